//! Guaranteed-lunch-window predicate.
//!
//! A schedule guarantees lunch when every weekday keeps at least one
//! contiguous free hour inside the `[11, 14)` window. The predicate is pure
//! and takes any collection of time slots, so it applies equally to a whole
//! [`Combination`](crate::models::Combination) and to a single section's
//! slots (the diagnosis engine uses the latter).
//!
//! # Algorithm
//!
//! Per weekday: clip every intersecting slot to the window, sort by start,
//! then walk the clipped intervals tracking the furthest busy end. The day
//! passes if a gap of at least one hour opens before the first interval,
//! between consecutive intervals, or after the last one. A day with no
//! intersecting slots passes trivially. The combination passes only if
//! every weekday does.

use crate::models::{TimeSlot, Weekday};

/// Hour the lunch window opens.
pub const LUNCH_START: u32 = 11;
/// Hour the lunch window closes (exclusive).
pub const LUNCH_END: u32 = 14;
/// Minimum contiguous free time required inside the window (hours).
pub const MIN_FREE_HOURS: u32 = 1;

/// Whether the given slots leave a guaranteed lunch break on every weekday.
pub fn has_guaranteed_lunch<'a>(slots: impl IntoIterator<Item = &'a TimeSlot>) -> bool {
    let mut clipped: [Vec<(u32, u32)>; 5] = Default::default();
    for slot in slots {
        let start = slot.start_hour.max(LUNCH_START);
        let end = slot.end_hour.min(LUNCH_END);
        if start < end {
            clipped[slot.day.index()].push((start, end));
        }
    }
    clipped.iter_mut().all(|day| day_has_free_hour(day))
}

/// Whether one day's clipped busy intervals leave a free hour in the window.
fn day_has_free_hour(intervals: &mut [(u32, u32)]) -> bool {
    if intervals.is_empty() {
        return true;
    }
    intervals.sort_by_key(|&(start, _)| start);

    // Sweep left to right; `busy_until` is the furthest end seen so far,
    // so overlapping intervals from different courses cannot fake a gap.
    let mut busy_until = LUNCH_START;
    for &(start, end) in intervals.iter() {
        if start.saturating_sub(busy_until) >= MIN_FREE_HOURS {
            return true;
        }
        busy_until = busy_until.max(end);
    }
    LUNCH_END.saturating_sub(busy_until) >= MIN_FREE_HOURS
}

/// Convenience wrapper naming the weekday check for a single day's slots.
///
/// Exposed for consumers that report per-day results; `has_guaranteed_lunch`
/// is the canonical whole-week predicate.
pub fn day_allows_lunch<'a>(day: Weekday, slots: impl IntoIterator<Item = &'a TimeSlot>) -> bool {
    let mut clipped: Vec<(u32, u32)> = slots
        .into_iter()
        .filter(|s| s.day == day)
        .filter_map(|s| {
            let start = s.start_hour.max(LUNCH_START);
            let end = s.end_hour.min(LUNCH_END);
            (start < end).then_some((start, end))
        })
        .collect();
    day_has_free_hour(&mut clipped)
}
