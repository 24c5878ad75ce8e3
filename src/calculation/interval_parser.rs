//! Work interval line parsing.
//!
//! Each non-blank line of an input file has the form
//! `EmpID, ProjectID, DateFrom, DateTo`. `DateTo` may be `NULL` (any case)
//! for an assignment that is still running.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkInterval;

use super::DatePattern;

/// End-date token meaning "still ongoing". Compared case-insensitively.
pub const ONGOING_END_TOKEN: &str = "null";

const FIELD_COUNT: usize = 4;

/// Parses one trimmed, non-empty line into a [`WorkInterval`].
///
/// Fields are separated by commas and trimmed. Fields beyond the fourth are
/// ignored. An end token of `NULL` resolves to `today`.
///
/// # Arguments
///
/// * `line` - The line content, already trimmed
/// * `line_number` - 1-based position of the line in the raw input, used in errors
/// * `pattern` - The compiled date pattern for both date fields
/// * `today` - The date substituted for an ongoing end token
///
/// # Errors
///
/// Returns [`EngineError::MalformedLine`] when fewer than four fields are
/// present or either date does not match `pattern`.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::{parse_line, DatePattern};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let interval = parse_line("143, 12, 2013-11-01, NULL", 1, &DatePattern::default(), today)
///     .unwrap();
///
/// assert_eq!(interval.employee_id, "143");
/// assert_eq!(interval.project_id, "12");
/// assert_eq!(interval.from, NaiveDate::from_ymd_opt(2013, 11, 1).unwrap());
/// assert_eq!(interval.to, today);
/// ```
pub fn parse_line(
    line: &str,
    line_number: usize,
    pattern: &DatePattern,
    today: NaiveDate,
) -> EngineResult<WorkInterval> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return Err(malformed(
            line,
            line_number,
            format!(
                "expected at least {} comma-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let from = parse_date(fields[2], line, line_number, pattern)?;
    let to = if fields[3].eq_ignore_ascii_case(ONGOING_END_TOKEN) {
        today
    } else {
        parse_date(fields[3], line, line_number, pattern)?
    };

    Ok(WorkInterval {
        employee_id: fields[0].to_string(),
        project_id: fields[1].to_string(),
        from,
        to,
    })
}

fn parse_date(
    token: &str,
    line: &str,
    line_number: usize,
    pattern: &DatePattern,
) -> EngineResult<NaiveDate> {
    pattern.parse(token).map_err(|e| {
        malformed(
            line,
            line_number,
            format!("date '{}' does not match pattern '{}': {}", token, pattern, e),
        )
    })
}

fn malformed(line: &str, line_number: usize, message: String) -> EngineError {
    EngineError::MalformedLine {
        line_number,
        line: line.to_string(),
        message,
    }
}
