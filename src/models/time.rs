//! Weekday and time slot models.
//!
//! A [`TimeSlot`] is a half-open hourly interval `[start, end)` on a single
//! weekday. Its `overlaps` predicate is the single source of truth for all
//! conflict logic in this crate: every higher-level conflict check reduces
//! to repeated applications of it across slot pairs.
//!
//! # Period Mapping
//!
//! Callers supply times as 1-based lesson periods. Period `p` starts at hour
//! `p + 8`, so a slot running period 1 through period 3 spans hours 9 to 12.
//! The institution operates periods 1..=9, i.e. hours `[9, 18)`.

use serde::{Deserialize, Serialize};

/// Earliest hour a slot may start.
pub const OPERATING_START_HOUR: u32 = 9;
/// Hour the operating day ends (exclusive).
pub const OPERATING_END_HOUR: u32 = 18;

/// First lesson period of the day.
pub const MIN_PERIOD: u32 = 1;
/// Last lesson period of the day (17:00–18:00).
pub const MAX_PERIOD: u32 = 9;
/// Period `p` starts at hour `p + PERIOD_HOUR_OFFSET`.
pub const PERIOD_HOUR_OFFSET: u32 = 8;

/// A teaching weekday (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in grid order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Zero-based column index (Mon = 0 .. Fri = 4).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Weekday::Mon => 0,
            Weekday::Tue => 1,
            Weekday::Wed => 2,
            Weekday::Thu => 3,
            Weekday::Fri => 4,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        };
        f.write_str(name)
    }
}

/// A half-open hourly interval `[start_hour, end_hour)` on one weekday.
///
/// Immutable once created. Invariant: `start_hour < end_hour`, both within
/// the operating range `[9, 18]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day this slot occurs on.
    pub day: Weekday,
    /// Start hour (inclusive).
    pub start_hour: u32,
    /// End hour (exclusive).
    pub end_hour: u32,
}

impl TimeSlot {
    /// Creates a slot from raw hours.
    ///
    /// Returns `None` if the interval is empty, reversed, or outside the
    /// operating range.
    pub fn new(day: Weekday, start_hour: u32, end_hour: u32) -> Option<Self> {
        if start_hour < end_hour
            && start_hour >= OPERATING_START_HOUR
            && end_hour <= OPERATING_END_HOUR
        {
            Some(Self {
                day,
                start_hour,
                end_hour,
            })
        } else {
            None
        }
    }

    /// Creates a slot from a 1-based period range.
    ///
    /// A range of period `s` through period `e` spans hours
    /// `[s + 8, e + 9)`. Returns `None` for reversed ranges
    /// (`start_period > end_period`) or periods outside 1..=9 — callers
    /// drop such requests silently rather than erroring (lenient-skip
    /// policy, see [`crate::catalog`]).
    pub fn from_periods(day: Weekday, start_period: u32, end_period: u32) -> Option<Self> {
        if start_period > end_period
            || start_period < MIN_PERIOD
            || end_period > MAX_PERIOD
        {
            return None;
        }
        Self::new(
            day,
            start_period + PERIOD_HOUR_OFFSET,
            end_period + PERIOD_HOUR_OFFSET + 1,
        )
    }

    /// Duration of this slot in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Whether two slots overlap.
    ///
    /// True iff same day and `a.start < b.end && b.start < a.end`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_hour < other.end_hour
            && other.start_hour < self.end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_periods_mapping() {
        // Period 1..3 => 09:00-12:00
        let slot = TimeSlot::from_periods(Weekday::Mon, 1, 3).unwrap();
        assert_eq!(slot.start_hour, 9);
        assert_eq!(slot.end_hour, 12);
        assert_eq!(slot.duration_hours(), 3);

        // Single period 9 => 17:00-18:00 (last period)
        let last = TimeSlot::from_periods(Weekday::Fri, 9, 9).unwrap();
        assert_eq!(last.start_hour, 17);
        assert_eq!(last.end_hour, 18);
    }

    #[test]
    fn test_from_periods_rejects_invalid() {
        // Reversed range dropped, not an error
        assert!(TimeSlot::from_periods(Weekday::Mon, 3, 1).is_none());
        // Periods outside 1..=9
        assert!(TimeSlot::from_periods(Weekday::Mon, 0, 2).is_none());
        assert!(TimeSlot::from_periods(Weekday::Mon, 8, 10).is_none());
    }

    #[test]
    fn test_new_enforces_operating_range() {
        assert!(TimeSlot::new(Weekday::Wed, 9, 18).is_some());
        assert!(TimeSlot::new(Weekday::Wed, 8, 10).is_none());
        assert!(TimeSlot::new(Weekday::Wed, 17, 19).is_none());
        assert!(TimeSlot::new(Weekday::Wed, 12, 12).is_none()); // empty
        assert!(TimeSlot::new(Weekday::Wed, 13, 11).is_none()); // reversed
    }

    #[test]
    fn test_overlap_basic() {
        let a = TimeSlot::new(Weekday::Mon, 9, 11).unwrap();
        let b = TimeSlot::new(Weekday::Mon, 10, 12).unwrap();
        assert!(a.overlaps(&b));

        // Touching intervals do not overlap (half-open)
        let c = TimeSlot::new(Weekday::Mon, 11, 13).unwrap();
        assert!(!a.overlaps(&c));

        // Same hours, different day
        let d = TimeSlot::new(Weekday::Tue, 9, 11).unwrap();
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_overlap_symmetry() {
        let slots = [
            TimeSlot::new(Weekday::Mon, 9, 11).unwrap(),
            TimeSlot::new(Weekday::Mon, 10, 12).unwrap(),
            TimeSlot::new(Weekday::Mon, 11, 13).unwrap(),
            TimeSlot::new(Weekday::Tue, 9, 11).unwrap(),
            TimeSlot::new(Weekday::Mon, 9, 18).unwrap(),
        ];
        for a in &slots {
            for b in &slots {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = TimeSlot::new(Weekday::Thu, 9, 14).unwrap();
        let inner = TimeSlot::new(Weekday::Thu, 10, 11).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(Weekday::Mon.index(), 0);
        assert_eq!(Weekday::Fri.index(), 4);
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }
}
