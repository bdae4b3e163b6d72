//! Combination search engine.
//!
//! Depth-first backtracking over one decision level per catalog course:
//! at level `i` every section of course `i` is tried in stored order, and a
//! section is admissible iff none of its slots overlaps any slot already
//! chosen at earlier levels. The engine enumerates the *entire* tree — it
//! never stops at the first success — and returns every valid combination in
//! the deterministic order induced by catalog order and per-course section
//! order.
//!
//! The lunch rule is a leaf-only acceptance gate: a complete assignment that
//! fails it is rejected without emission, but its ancestors are not pruned,
//! because the rule depends on the whole schedule and cannot be checked
//! incrementally per course.
//!
//! # Complexity
//!
//! O(s^n) leaves for n courses with s sections each; safe in practice
//! because the credit cap bounds n and courses carry at most 3 sections.
//! There is no depth or branch cap and no timeout.

use log::{debug, trace};

use crate::catalog::Catalog;
use crate::lunch::has_guaranteed_lunch;
use crate::models::{Combination, Course, ScheduleItem, Section};

/// Caller-supplied options for one generate request.
///
/// The lunch flag is never persisted or defaulted beyond "off".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Require a guaranteed free lunch hour on every weekday.
    pub require_lunch: bool,
}

impl SearchOptions {
    /// Creates default options (lunch rule off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the guaranteed-lunch rule.
    pub fn with_lunch_rule(mut self, require_lunch: bool) -> Self {
        self.require_lunch = require_lunch;
        self
    }
}

/// Enumerates every non-conflicting combination of one section per course.
///
/// The catalog is read-only for the whole call; emitted combinations are
/// deep copies and never alias catalog state. An empty catalog yields one
/// trivial empty combination — callers that want a "nothing to schedule"
/// message special-case [`Catalog::is_empty`] before searching.
pub fn search(catalog: &Catalog, options: &SearchOptions) -> Vec<Combination> {
    let mut results = Vec::new();
    let mut partial: Vec<ScheduleItem> = Vec::with_capacity(catalog.len());
    explore(catalog.courses(), 0, options, &mut partial, &mut results);
    debug!(
        "search over {} course(s) produced {} combination(s) (lunch rule {})",
        catalog.len(),
        results.len(),
        if options.require_lunch { "on" } else { "off" }
    );
    results
}

fn explore(
    courses: &[Course],
    level: usize,
    options: &SearchOptions,
    partial: &mut Vec<ScheduleItem>,
    results: &mut Vec<Combination>,
) {
    if level == courses.len() {
        if options.require_lunch
            && !has_guaranteed_lunch(partial.iter().flat_map(|item| item.section.slots.iter()))
        {
            trace!("leaf rejected by lunch rule at depth {level}");
            return;
        }
        // Deep copy on emit: the backtracking buffer stays mutable, the
        // result must not.
        results.push(Combination::from_items(partial.clone()));
        return;
    }

    let course = &courses[level];
    for section in &course.sections {
        if conflicts_with_chosen(section, partial) {
            continue;
        }
        partial.push(ScheduleItem::new(
            course.name.clone(),
            course.color_index,
            section.clone(),
        ));
        explore(courses, level + 1, options, partial, results);
        partial.pop();
    }
}

/// Whether a candidate section collides with any already-chosen section.
fn conflicts_with_chosen(candidate: &Section, chosen: &[ScheduleItem]) -> bool {
    chosen.iter().any(|item| item.section.overlaps(candidate))
}

/// Cursor over an already-computed result set.
///
/// Stepping forward and back is a pure index operation; nothing is
/// recomputed.
#[derive(Debug, Clone)]
pub struct CombinationBrowser {
    combinations: Vec<Combination>,
    cursor: usize,
}

impl CombinationBrowser {
    /// Wraps a result set, positioned at the first combination.
    pub fn new(combinations: Vec<Combination>) -> Self {
        Self {
            combinations,
            cursor: 0,
        }
    }

    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    /// Whether the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Combination under the cursor, if any.
    pub fn current(&self) -> Option<&Combination> {
        self.combinations.get(self.cursor)
    }

    /// Steps forward; stays put at the last combination.
    pub fn next(&mut self) -> Option<&Combination> {
        if self.cursor + 1 < self.combinations.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Steps backward; stays put at the first combination.
    pub fn prev(&mut self) -> Option<&Combination> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index` if it is in range.
    pub fn go_to(&mut self, index: usize) -> Option<&Combination> {
        if index < self.combinations.len() {
            self.cursor = index;
        }
        self.combinations.get(index)
    }
}
