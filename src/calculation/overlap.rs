//! Interval overlap primitives.
//!
//! Two conventions meet here and both are fixed:
//!
//! - Overlap detection is inclusive: intervals that merely touch
//!   (`a.to == b.from`) overlap.
//! - Overlap length is end-exclusive: it is the number of days from the later
//!   start up to, but not including, the earlier end. Touching intervals
//!   therefore overlap for 0 days.

use crate::models::WorkInterval;

/// Returns true unless one interval ends before the other starts.
///
/// Symmetric in its arguments.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::intervals_overlap;
/// use longest_pair::models::WorkInterval;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2020, 4, d).unwrap();
/// let a = WorkInterval { employee_id: "1".into(), project_id: "1".into(), from: date(15), to: date(17) };
/// let b = WorkInterval { employee_id: "2".into(), project_id: "1".into(), from: date(17), to: date(20) };
///
/// assert!(intervals_overlap(&a, &b));
/// assert!(intervals_overlap(&b, &a));
/// ```
pub fn intervals_overlap(first: &WorkInterval, second: &WorkInterval) -> bool {
    !(first.to < second.from || second.to < first.from)
}

/// Returns the number of whole days two overlapping intervals share.
///
/// Only meaningful when [`intervals_overlap`] holds; callers branch on that
/// first. The span from `max(from)` to `min(to)` is end-exclusive and never
/// reported below zero, which can otherwise happen with inverted intervals.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::overlap_days;
/// use longest_pair::models::WorkInterval;
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let b = WorkInterval { employee_id: "2".into(), project_id: "1".into(), from: date(2020, 4, 17), to: date(2020, 4, 20) };
/// let c = WorkInterval { employee_id: "3".into(), project_id: "1".into(), from: date(2020, 4, 16), to: date(2021, 4, 17) };
///
/// assert_eq!(overlap_days(&b, &c), 3);
/// ```
pub fn overlap_days(first: &WorkInterval, second: &WorkInterval) -> i64 {
    let latest_start = first.from.max(second.from);
    let earliest_end = first.to.min(second.to);
    (earliest_end - latest_start).num_days().max(0)
}
