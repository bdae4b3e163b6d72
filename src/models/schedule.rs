//! Combination (solution) model.
//!
//! A [`Combination`] is one complete, conflict-free assignment of exactly one
//! section per catalog course. Combinations are value objects: the search
//! engine deep-copies the partial assignment at emission, so later
//! backtracking never aliases an already-returned result.

use serde::{Deserialize, Serialize};

use super::{Section, TimeSlot, Weekday};

/// One materialized choice inside a combination: a course paired with the
/// section picked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Name of the course this choice belongs to.
    pub course_name: String,
    /// Display color token inherited from the course.
    pub color_index: u8,
    /// The chosen section (owned copy).
    pub section: Section,
}

impl ScheduleItem {
    /// Creates a schedule item.
    pub fn new(course_name: impl Into<String>, color_index: u8, section: Section) -> Self {
        Self {
            course_name: course_name.into(),
            color_index,
            section,
        }
    }
}

/// A complete conflict-free section assignment, one item per course in
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Chosen items in catalog order.
    pub items: Vec<ScheduleItem>,
}

/// A renderable block: where one slot of one chosen section lands on the
/// weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBlock {
    /// Grid column.
    pub day: Weekday,
    /// Hour the block starts at.
    pub start_hour: u32,
    /// How many hour rows the block spans.
    pub duration_hours: u32,
    /// Course name to label the block with.
    pub course_name: String,
    /// 1-based section ordinal to label the block with.
    pub section_ordinal: u32,
    /// Display color token.
    pub color_index: u8,
}

impl Combination {
    /// Creates a combination from already-copied items.
    pub fn from_items(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }

    /// Number of items (one per course).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this combination contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over every time slot of every chosen section.
    pub fn slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.items.iter().flat_map(|item| item.section.slots.iter())
    }

    /// Brute-force pairwise overlap re-check across all items.
    ///
    /// The search engine never emits a conflicting combination; this exists
    /// so consumers and tests can verify that independently.
    pub fn has_conflicts(&self) -> bool {
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if a.section.overlaps(&b.section) {
                    return true;
                }
            }
        }
        false
    }

    /// Flattens the combination into grid placements for a renderer.
    pub fn grid_blocks(&self) -> Vec<GridBlock> {
        self.items
            .iter()
            .flat_map(|item| {
                item.section.slots.iter().map(|slot| GridBlock {
                    day: slot.day,
                    start_hour: slot.start_hour,
                    duration_hours: slot.duration_hours(),
                    course_name: item.course_name.clone(),
                    section_ordinal: item.section.ordinal,
                    color_index: item.color_index,
                })
            })
            .collect()
    }
}
