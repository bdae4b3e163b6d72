//! Course catalog: the per-session store of user-entered courses.
//!
//! The [`Catalog`] is an explicit session object — created empty, passed by
//! reference to search and diagnosis, and mutated only through the typed
//! add/remove operations here. All course invariants (non-empty name,
//! section counts, credit range, 24-credit cap) are enforced at admission
//! time and never retroactively.
//!
//! # Lenient time-slot policy
//!
//! A requested period range with `start > end` (or outside 1..=9) is
//! silently dropped from its section's slot list rather than rejected.
//! Only a section left with *zero* valid slots is an error
//! ([`CatalogError::NoValidTimeSlots`]).

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Course, Section, TimeSlot, Weekday, COLOR_COUNT, MAX_SECTIONS};

/// Maximum total credit hours a catalog may hold.
pub const CREDIT_CAP: u32 = 24;

/// Lowest allowed credit hours per course.
pub const MIN_CREDIT_HOURS: u32 = 1;
/// Highest allowed credit hours per course.
pub const MAX_CREDIT_HOURS: u32 = 3;

/// Reasons a course candidate is refused admission.
///
/// All recoverable: the caller fixes the input and retries. The first
/// violation encountered wins; there is no multi-error aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The course name is empty or whitespace.
    #[error("course name must not be empty")]
    InvalidName,
    /// The candidate has no sections at all.
    #[error("a course needs at least one section")]
    NoSections,
    /// The candidate has more sections than a course may offer.
    #[error("a course may offer at most 3 sections, got {0}")]
    TooManySections(usize),
    /// A section (identified by its 1-based ordinal) lost all of its
    /// requested time ranges to the lenient-drop policy.
    #[error("section #{0} has no valid time slots")]
    NoValidTimeSlots(u32),
    /// The first section's total duration is outside 1..=3 hours.
    #[error("course must be worth between 1 and 3 credit hours, got {0}")]
    CreditOutOfRange(u32),
    /// Admitting the course would push the catalog past the credit cap.
    #[error("credit cap of 24 exceeded: {current} held + {adding} requested")]
    CreditCapExceeded {
        /// Credit hours already held.
        current: u32,
        /// Credit hours the candidate would add.
        adding: u32,
    },
}

/// One requested meeting time: a weekday plus a 1-based period range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day of the week.
    pub day: Weekday,
    /// First period (1-based, inclusive).
    pub start_period: u32,
    /// Last period (1-based, inclusive).
    pub end_period: u32,
}

/// Input shape for one section of a course candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    /// Requested meeting times, in entry order.
    pub meetings: Vec<Meeting>,
}

impl SectionDraft {
    /// Creates an empty section draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a meeting time.
    pub fn with_meeting(mut self, day: Weekday, start_period: u32, end_period: u32) -> Self {
        self.meetings.push(Meeting {
            day,
            start_period,
            end_period,
        });
        self
    }
}

/// Input shape for a course candidate, as supplied by the form collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    /// Requested course name.
    pub name: String,
    /// Requested sections, in entry order.
    pub sections: Vec<SectionDraft>,
}

impl CourseDraft {
    /// Creates a draft with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, section: SectionDraft) -> Self {
        self.sections.push(section);
        self
    }
}

/// Ordered collection of admitted courses plus the id counters scoped to
/// this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
    next_section_id: u32,
    next_course_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_section_id: 1,
            next_course_id: 1,
        }
    }

    /// Rebuilds a catalog from previously persisted courses.
    ///
    /// The persistence collaborator stores `Vec<Course>` verbatim; the id
    /// counters are recovered by scanning the maximum existing ids so that
    /// identifiers are never reused after a reload.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let max_section_id = courses
            .iter()
            .flat_map(|c| c.sections.iter())
            .map(|s| s.id)
            .max()
            .unwrap_or(0);
        let max_course_id = courses.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            courses,
            next_section_id: max_section_id + 1,
            next_course_id: max_course_id + 1,
        }
    }

    /// Validates a candidate and, on success, appends it as a fully
    /// constructed [`Course`].
    ///
    /// Checks in order (first violation wins):
    /// 1. non-empty name
    /// 2. 1..=3 sections
    /// 3. every section keeps at least one valid time slot after the
    ///    lenient drop of reversed/out-of-range period requests
    /// 4. first section's total duration inside 1..=3 credit hours
    /// 5. catalog total after admission within the 24-credit cap
    ///
    /// The color token is drawn from the thread RNG; use
    /// [`add_course_with_rng`](Self::add_course_with_rng) to inject a
    /// seeded generator.
    pub fn add_course(&mut self, draft: CourseDraft) -> Result<&Course, CatalogError> {
        self.add_course_with_rng(draft, &mut rand::rng())
    }

    /// [`add_course`](Self::add_course) with a caller-supplied RNG for the
    /// color token.
    pub fn add_course_with_rng(
        &mut self,
        draft: CourseDraft,
        rng: &mut impl Rng,
    ) -> Result<&Course, CatalogError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidName);
        }
        if draft.sections.is_empty() {
            return Err(CatalogError::NoSections);
        }
        if draft.sections.len() > MAX_SECTIONS {
            return Err(CatalogError::TooManySections(draft.sections.len()));
        }

        // Lenient policy: invalid period ranges vanish here, one by one.
        let mut slot_lists: Vec<Vec<TimeSlot>> = Vec::with_capacity(draft.sections.len());
        for (idx, section) in draft.sections.iter().enumerate() {
            let ordinal = idx as u32 + 1;
            let slots: Vec<TimeSlot> = section
                .meetings
                .iter()
                .filter_map(|m| TimeSlot::from_periods(m.day, m.start_period, m.end_period))
                .collect();
            if slots.is_empty() {
                return Err(CatalogError::NoValidTimeSlots(ordinal));
            }
            slot_lists.push(slots);
        }

        // Credit hours come from the first section's duration only, even
        // when later sections total differently. Intentional simplification,
        // preserved as-is.
        let credit_hours: u32 = slot_lists[0].iter().map(TimeSlot::duration_hours).sum();
        if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&credit_hours) {
            return Err(CatalogError::CreditOutOfRange(credit_hours));
        }

        let current = self.total_credit_hours();
        if current + credit_hours > CREDIT_CAP {
            return Err(CatalogError::CreditCapExceeded {
                current,
                adding: credit_hours,
            });
        }

        let sections = slot_lists
            .into_iter()
            .enumerate()
            .map(|(idx, slots)| Section::new(self.alloc_section_id(), idx as u32 + 1, slots))
            .collect();

        let course = Course {
            id: self.alloc_course_id(),
            name: name.to_string(),
            credit_hours,
            color_index: rng.random_range(0..COLOR_COUNT),
            sections,
        };
        debug!(
            "admitted course '{}' ({} credit(s), {} now held)",
            course.name,
            course.credit_hours,
            current + credit_hours
        );
        self.courses.push(course);
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Removes the course at `index`; silent no-op when out of range.
    ///
    /// Callers are expected to pass indices sourced from a live listing.
    pub fn remove_course(&mut self, index: usize) {
        if index < self.courses.len() {
            let removed = self.courses.remove(index);
            debug!("removed course '{}'", removed.name);
        }
    }

    /// Empties the catalog and resets the id counters.
    ///
    /// This is the only operation that resets the counters.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Admitted courses in entry order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of admitted courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Running sum of credit hours across all courses.
    pub fn total_credit_hours(&self) -> u32 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }

    fn alloc_section_id(&mut self) -> u32 {
        let id = self.next_section_id;
        self.next_section_id += 1;
        id
    }

    fn alloc_course_id(&mut self) -> u64 {
        let id = self.next_course_id;
        self.next_course_id += 1;
        id
    }
}
