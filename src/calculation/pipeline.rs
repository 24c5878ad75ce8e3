//! End-to-end processing of a raw work interval file.

use chrono::{Local, NaiveDate};

use crate::error::EngineResult;
use crate::models::{ProcessingResult, WorkInterval};

use super::{DatePattern, aggregate_project_pairs, parse_line, select_longest_pair};

/// Processes a whole file using the local current date for ongoing intervals.
///
/// See [`process_as_of`].
pub fn process(raw: &str, pattern: &str) -> EngineResult<ProcessingResult> {
    process_as_of(raw, pattern, Local::now().date_naive())
}

/// Processes a whole file with an explicit "today".
///
/// Compiles `pattern`, parses every non-blank line, builds the per-project
/// pair records and selects the longest working pair. The first malformed
/// line aborts the run and no partial result is returned.
///
/// # Errors
///
/// - [`EngineError::InvalidDatePattern`](crate::error::EngineError::InvalidDatePattern)
///   if `pattern` does not compile
/// - [`EngineError::MalformedLine`](crate::error::EngineError::MalformedLine)
///   for the first line that cannot be parsed
///
/// # Example
///
/// ```
/// use longest_pair::calculation::process_as_of;
/// use longest_pair::models::LongestPairSummary;
/// use chrono::NaiveDate;
///
/// let raw = "\
/// 1, 1, 2020-04-15, 2020-04-17
/// 2, 1, 2020-04-17, 2020-04-20
///
/// 3, 1, 2020-04-16, 2021-04-17
/// ";
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let result = process_as_of(raw, "yyyy-MM-dd", today).unwrap();
///
/// assert_eq!(result.pairs.len(), 3);
/// assert_eq!(
///     result.summary,
///     LongestPairSummary::BestPair {
///         employee_a: "2".to_string(),
///         employee_b: "3".to_string(),
///         total_days: 3,
///     }
/// );
/// ```
pub fn process_as_of(raw: &str, pattern: &str, today: NaiveDate) -> EngineResult<ProcessingResult> {
    let pattern = DatePattern::compile(pattern)?;
    let intervals = parse_intervals(raw, &pattern, today)?;
    let pairs = aggregate_project_pairs(intervals);
    let summary = select_longest_pair(&pairs);

    Ok(ProcessingResult { pairs, summary })
}

/// Parses every non-blank line of `raw`, stopping at the first failure.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_intervals(
    raw: &str,
    pattern: &DatePattern,
    today: NaiveDate,
) -> EngineResult<Vec<WorkInterval>> {
    split_lines(raw)
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| parse_line(line, line_number, pattern, today))
        .collect()
}

fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    let mut rest = raw;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, next) = match rest.find(['\r', '\n']) {
            Some(end) if rest[end..].starts_with("\r\n") => (&rest[..end], &rest[end + 2..]),
            Some(end) => (&rest[..end], &rest[end + 1..]),
            None => (rest, ""),
        };
        rest = next;
        Some(line)
    })
}
