//! Pairwise overlap records for a single project.

use crate::models::{PairOverlap, WorkInterval};

use super::{intervals_overlap, overlap_days};

/// Builds one [`PairOverlap`] for every unordered pair of intervals in a project.
///
/// For `n` intervals the result holds exactly `n * (n - 1) / 2` records, in
/// row-major order of positions `(i, j)` with `i < j`. Pairs that do not
/// overlap are recorded with 0 days. A single interval yields no records.
///
/// All intervals are expected to share one project id; the id of the first
/// interval is used for every record.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::generate_project_pairs;
/// use longest_pair::models::WorkInterval;
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let interval = |id: &str, from, to| WorkInterval {
///     employee_id: id.to_string(),
///     project_id: "1".to_string(),
///     from,
///     to,
/// };
///
/// let intervals = vec![
///     interval("1", date(2020, 4, 15), date(2020, 4, 17)),
///     interval("2", date(2020, 4, 17), date(2020, 4, 20)),
///     interval("3", date(2020, 4, 16), date(2021, 4, 17)),
/// ];
///
/// let pairs = generate_project_pairs(&intervals);
/// let days: Vec<i64> = pairs.iter().map(|p| p.overlap_days).collect();
/// assert_eq!(days, vec![0, 1, 3]);
/// ```
pub fn generate_project_pairs(intervals: &[WorkInterval]) -> Vec<PairOverlap> {
    let Some(project_id) = intervals.first().map(|i| i.project_id.as_str()) else {
        return Vec::new();
    };

    let n = intervals.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, first) in intervals.iter().enumerate() {
        for second in &intervals[i + 1..] {
            let days = if intervals_overlap(first, second) {
                overlap_days(first, second)
            } else {
                0
            };

            pairs.push(PairOverlap {
                employee_a: first.employee_id.clone(),
                employee_b: second.employee_id.clone(),
                project_id: project_id.to_string(),
                overlap_days: days,
            });
        }
    }

    pairs
}
