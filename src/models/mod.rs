//! Timetable domain models.
//!
//! Core data types for the combination engine: weekdays and half-open
//! time slots, courses with interchangeable sections, and emitted
//! combinations.
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Course` | A subject with 1..=3 interchangeable sections |
//! | `Section` | One concrete offering with fixed weekly time slots |
//! | `TimeSlot` | A (weekday, start-hour, end-hour) half-open interval |
//! | `Combination` | One conflict-free choice of exactly one section per course |

mod course;
mod schedule;
mod time;

pub use course::{Course, Section, COLOR_COUNT, MAX_SECTIONS};
pub use schedule::{Combination, GridBlock, ScheduleItem};
pub use time::{
    TimeSlot, Weekday, MAX_PERIOD, MIN_PERIOD, OPERATING_END_HOUR, OPERATING_START_HOUR,
    PERIOD_HOUR_OFFSET,
};
