//! Conflict diagnosis for empty search results.
//!
//! When [`search`](crate::search::search) comes back empty, this module
//! explains *why* instead of leaving the user with a bare failure. It
//! re-examines the catalog directly — read-only, no re-search — with two
//! independent analyses:
//!
//! 1. per-course lunch infeasibility (lunch rule active only): a course
//!    whose every section, taken alone, fails the lunch predicate blocks
//!    the timetable unilaterally;
//! 2. pairwise mutual exclusion: a course pair where every section
//!    cross-product entry overlaps can never coexist.
//!
//! When neither rule fires, the failure stems from a higher-order
//! interaction of three or more courses and a generic fallback cause is
//! reported.

use std::fmt;

use log::debug;

use crate::catalog::Catalog;
use crate::lunch::has_guaranteed_lunch;
use crate::models::Course;
use crate::search::SearchOptions;

/// A human-readable root cause for an empty result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictCause {
    /// Every section of this course, evaluated alone, denies the lunch
    /// window.
    LunchBlocked {
        /// Name of the blocking course.
        course: String,
    },
    /// No section pair across these two courses is conflict-free.
    MutuallyExclusive {
        /// Name of the earlier course in catalog order.
        first: String,
        /// Name of the later course in catalog order.
        second: String,
    },
    /// No single course or pair is responsible; three or more courses
    /// conflict only in combination.
    Unresolvable,
}

impl fmt::Display for ConflictCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictCause::LunchBlocked { course } => {
                write!(f, "every section of '{course}' blocks the lunch window")
            }
            ConflictCause::MutuallyExclusive { first, second } => {
                write!(
                    f,
                    "'{first}' and '{second}' overlap in every section pairing"
                )
            }
            ConflictCause::Unresolvable => {
                write!(f, "no single course or pair is at fault; three or more courses conflict only in combination")
            }
        }
    }
}

/// Diagnoses why the search produced no combinations.
///
/// Call only after an empty search result; on a satisfiable catalog the
/// pairwise analysis finds nothing and the fallback cause is returned,
/// which would be misleading. Causes are deduplicated in first-seen order.
pub fn diagnose(catalog: &Catalog, options: &SearchOptions) -> Vec<ConflictCause> {
    let mut causes: Vec<ConflictCause> = Vec::new();

    if options.require_lunch {
        for course in catalog.courses() {
            let all_blocked = course
                .sections
                .iter()
                .all(|section| !has_guaranteed_lunch(&section.slots));
            if all_blocked {
                push_unique(
                    &mut causes,
                    ConflictCause::LunchBlocked {
                        course: course.name.clone(),
                    },
                );
            }
        }
    }

    let courses = catalog.courses();
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            if !has_compatible_sections(a, b) {
                push_unique(
                    &mut causes,
                    ConflictCause::MutuallyExclusive {
                        first: a.name.clone(),
                        second: b.name.clone(),
                    },
                );
            }
        }
    }

    if causes.is_empty() {
        causes.push(ConflictCause::Unresolvable);
    }
    debug!("diagnosis found {} cause(s)", causes.len());
    causes
}

/// Whether at least one section pair across the two courses is
/// conflict-free.
fn has_compatible_sections(a: &Course, b: &Course) -> bool {
    a.sections
        .iter()
        .any(|sa| b.sections.iter().any(|sb| !sa.overlaps(sb)))
}

fn push_unique(causes: &mut Vec<ConflictCause>, cause: ConflictCause) {
    if !causes.contains(&cause) {
        causes.push(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CourseDraft, SectionDraft};
    use crate::models::Weekday;
    use crate::search::search;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn add(catalog: &mut Catalog, draft: CourseDraft) {
        let mut rng = SmallRng::seed_from_u64(99);
        catalog.add_course_with_rng(draft, &mut rng).unwrap();
    }

    fn section(day: Weekday, start_period: u32, end_period: u32) -> SectionDraft {
        SectionDraft::new().with_meeting(day, start_period, end_period)
    }

    #[test]
    fn test_pairwise_mutual_exclusion_single_reason() {
        let mut catalog = Catalog::new();
        // Both sections of each course sit on Mon 9-11 / 10-12: every
        // cross pairing overlaps.
        add(
            &mut catalog,
            CourseDraft::new("A")
                .with_section(section(Weekday::Mon, 1, 2))
                .with_section(section(Weekday::Mon, 2, 3)),
        );
        add(
            &mut catalog,
            CourseDraft::new("B")
                .with_section(section(Weekday::Mon, 1, 2))
                .with_section(section(Weekday::Mon, 2, 3)),
        );
        assert!(search(&catalog, &SearchOptions::new()).is_empty());

        let causes = diagnose(&catalog, &SearchOptions::new());
        let exclusive: Vec<_> = causes
            .iter()
            .filter(|c| matches!(c, ConflictCause::MutuallyExclusive { .. }))
            .collect();
        assert_eq!(exclusive.len(), 1);
        assert_eq!(
            exclusive[0],
            &ConflictCause::MutuallyExclusive {
                first: "A".into(),
                second: "B".into(),
            }
        );
    }

    #[test]
    fn test_compatible_pair_not_reported() {
        let mut catalog = Catalog::new();
        add(
            &mut catalog,
            CourseDraft::new("A")
                .with_section(section(Weekday::Mon, 1, 2))
                .with_section(section(Weekday::Tue, 1, 2)),
        );
        add(
            &mut catalog,
            CourseDraft::new("B").with_section(section(Weekday::Mon, 1, 2)),
        );
        // Satisfiable via A's Tuesday section; diagnosis of a satisfiable
        // catalog falls through to the fallback cause.
        let causes = diagnose(&catalog, &SearchOptions::new());
        assert_eq!(causes, vec![ConflictCause::Unresolvable]);
    }

    #[test]
    fn test_lunch_blocked_course_reported() {
        let mut catalog = Catalog::new();
        // Every section of "Seminar" covers 11-14 (periods 3-5).
        add(
            &mut catalog,
            CourseDraft::new("Seminar")
                .with_section(section(Weekday::Mon, 3, 5))
                .with_section(section(Weekday::Wed, 3, 5)),
        );
        let options = SearchOptions::new().with_lunch_rule(true);
        assert!(search(&catalog, &options).is_empty());

        let causes = diagnose(&catalog, &options);
        assert_eq!(
            causes,
            vec![ConflictCause::LunchBlocked {
                course: "Seminar".into()
            }]
        );
    }

    #[test]
    fn test_lunch_rule_inactive_skips_lunch_analysis() {
        let mut catalog = Catalog::new();
        add(
            &mut catalog,
            CourseDraft::new("Seminar").with_section(section(Weekday::Mon, 3, 5)),
        );
        // Lunch rule off: the course alone is fine, so only the fallback
        // remains.
        let causes = diagnose(&catalog, &SearchOptions::new());
        assert_eq!(causes, vec![ConflictCause::Unresolvable]);
    }

    #[test]
    fn test_higher_order_conflict_falls_back() {
        let mut catalog = Catalog::new();
        // Slots: X = Mon 9-10 (p1), Y = Mon 10-11 (p2).
        // C1 offers only X; C2 and C3 offer X or Y. Every pair has a
        // conflict-free choice, but the triple is unsatisfiable: C1 takes
        // X, so C2 and C3 both need Y.
        add(
            &mut catalog,
            CourseDraft::new("C1").with_section(section(Weekday::Mon, 1, 1)),
        );
        add(
            &mut catalog,
            CourseDraft::new("C2")
                .with_section(section(Weekday::Mon, 1, 1))
                .with_section(section(Weekday::Mon, 2, 2)),
        );
        add(
            &mut catalog,
            CourseDraft::new("C3")
                .with_section(section(Weekday::Mon, 1, 1))
                .with_section(section(Weekday::Mon, 2, 2)),
        );
        assert!(search(&catalog, &SearchOptions::new()).is_empty());

        let causes = diagnose(&catalog, &SearchOptions::new());
        assert_eq!(causes, vec![ConflictCause::Unresolvable]);
    }

    #[test]
    fn test_diagnosis_is_read_only() {
        let mut catalog = Catalog::new();
        add(
            &mut catalog,
            CourseDraft::new("A").with_section(section(Weekday::Mon, 1, 2)),
        );
        add(
            &mut catalog,
            CourseDraft::new("B").with_section(section(Weekday::Mon, 1, 2)),
        );
        let before = catalog.clone();
        let _ = diagnose(&catalog, &SearchOptions::new().with_lunch_rule(true));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_cause_display_strings() {
        let lunch = ConflictCause::LunchBlocked {
            course: "Seminar".into(),
        };
        assert_eq!(
            lunch.to_string(),
            "every section of 'Seminar' blocks the lunch window"
        );

        let pair = ConflictCause::MutuallyExclusive {
            first: "A".into(),
            second: "B".into(),
        };
        assert_eq!(
            pair.to_string(),
            "'A' and 'B' overlap in every section pairing"
        );
    }
}
