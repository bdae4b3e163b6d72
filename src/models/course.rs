//! Course and section models.
//!
//! A [`Course`] is a subject with 1..=3 interchangeable [`Section`]s; each
//! section carries its own weekly [`TimeSlot`]s. Exactly one section per
//! course is chosen in a generated combination.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Maximum number of sections a course may offer.
pub const MAX_SECTIONS: usize = 3;

/// Number of display color tokens in the palette (indices 0..10).
pub const COLOR_COUNT: u8 = 10;

/// One concrete offering of a course.
///
/// Owned exclusively by its parent [`Course`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Catalog-scoped unique identifier, never reused.
    pub id: u32,
    /// 1-based position within the parent course.
    pub ordinal: u32,
    /// Weekly meeting times. Non-empty.
    pub slots: Vec<TimeSlot>,
}

impl Section {
    /// Creates a section.
    pub fn new(id: u32, ordinal: u32, slots: Vec<TimeSlot>) -> Self {
        Self { id, ordinal, slots }
    }

    /// Total weekly duration across all slots (hours).
    pub fn duration_hours(&self) -> u32 {
        self.slots.iter().map(TimeSlot::duration_hours).sum()
    }

    /// Whether any slot of this section overlaps any slot of `other`.
    pub fn overlaps(&self, other: &Section) -> bool {
        self.slots
            .iter()
            .any(|a| other.slots.iter().any(|b| a.overlaps(b)))
    }
}

/// A subject offering interchangeable sections.
///
/// Constructed only through [`Catalog::add_course`](crate::catalog::Catalog::add_course),
/// which enforces the credit and section-count invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog-scoped unique identifier.
    pub id: u64,
    /// Display name. Non-empty.
    pub name: String,
    /// Credit hours, 1..=3. Derived from the FIRST section's total duration
    /// only, even when later sections differ in length — an intentional
    /// simplification of the registration rules, not a bug.
    pub credit_hours: u32,
    /// Display color token (palette index 0..10).
    pub color_index: u8,
    /// Interchangeable offerings, length 1..=3, in entry order.
    pub sections: Vec<Section>,
}
