//! Weekly timetable combination engine.
//!
//! Builds every non-conflicting weekly-schedule combination from a set of
//! user-defined courses, each offering up to three interchangeable sections
//! with fixed weekly time slots, optionally filtered by a guaranteed free
//! lunch window. When nothing fits, the diagnosis module explains which
//! course or course pair makes completion impossible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Weekday`, `Course`,
//!   `Section`, `ScheduleItem`, `Combination`
//! - **`catalog`**: Session-scoped course store with admission-time
//!   validation (credit range, 24-credit cap, section counts)
//! - **`search`**: Depth-first backtracking enumeration of all valid
//!   combinations, in deterministic order
//! - **`lunch`**: The guaranteed-lunch-window predicate, usable on a whole
//!   combination or a single section
//! - **`diagnosis`**: Post-failure root-cause analysis over the catalog
//!
//! # Example
//!
//! ```
//! use timeweave::catalog::{Catalog, CourseDraft, SectionDraft};
//! use timeweave::models::Weekday;
//! use timeweave::search::{search, SearchOptions};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_course(
//!     CourseDraft::new("Calculus")
//!         .with_section(SectionDraft::new().with_meeting(Weekday::Mon, 1, 2))
//!         .with_section(SectionDraft::new().with_meeting(Weekday::Tue, 1, 2)),
//! )?;
//!
//! let combinations = search(&catalog, &SearchOptions::new());
//! assert_eq!(combinations.len(), 2);
//! # Ok::<(), timeweave::catalog::CatalogError>(())
//! ```
//!
//! The engine is single-threaded and synchronous: one "generate" request is
//! one atomic, pure computation over an in-memory catalog. Runtime is
//! bounded by the inputs themselves — the credit cap limits course count
//! and each course carries at most three sections.

pub mod catalog;
pub mod diagnosis;
pub mod lunch;
pub mod models;
pub mod search;
