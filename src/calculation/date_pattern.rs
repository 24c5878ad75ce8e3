//! Date pattern compilation.
//!
//! Upload clients describe date formats with letter patterns such as
//! `yyyy-MM-dd` or `dd/MM/yyyy`. This module translates those patterns into
//! chrono format strings once, so every line of a file is parsed with the
//! same compiled pattern.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::error::{EngineError, EngineResult};

/// Pattern used when the caller does not supply one.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

/// First year of the window two-digit years resolve into.
const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// Why a date token was rejected by [`DatePattern::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTokenError {
    /// chrono could not read the token with the compiled format.
    #[error("{0}")]
    Parse(#[from] chrono::ParseError),

    /// The token parsed, but its fields are not as wide as the pattern requires.
    #[error("field widths differ from the pattern, expected '{expected}'")]
    Width {
        /// The date rendered with the pattern.
        expected: String,
    },
}

/// How strictly a compiled field constrains the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldWidth {
    /// Always rendered with the same number of digits (`MM`, `dd`, `yyyy`).
    Fixed,
    /// Accepts one or more digits (`M`, `d`, `y`).
    Variable,
    /// A month or weekday name.
    Text,
}

/// A letter-style date pattern compiled to a chrono format string.
///
/// Supported letters:
///
/// | Letters        | Meaning                                   |
/// |----------------|-------------------------------------------|
/// | `yy`           | two-digit year, read as 2000 to 2099      |
/// | `y`, `yyyy`    | full year (`u` is accepted as a synonym)  |
/// | `M`, `MM`      | month number (`L` is accepted as well)    |
/// | `MMM`, `MMMM`  | abbreviated / full month name             |
/// | `d`, `dd`      | day of month                              |
/// | `D`..`DDD`     | day of year                               |
/// | `E`, `EEEE`    | abbreviated / full weekday name           |
///
/// Text inside single quotes is literal and `''` is a single quote. Any other
/// non-letter character is copied through unchanged.
///
/// Doubled numeric letters are exact widths: under `yyyy-MM-dd` the token
/// `2020-4-7` is rejected. Once a pattern contains a single-letter numeric
/// field, widths are no longer checked.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::DatePattern;
/// use chrono::NaiveDate;
///
/// let pattern = DatePattern::compile("dd/MM/yyyy").unwrap();
/// assert_eq!(pattern.chrono_format(), "%d/%m/%Y");
///
/// let date = pattern.parse("17/04/2020").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2020, 4, 17).unwrap());
/// assert_eq!(pattern.format(date), "17/04/2020");
/// assert!(pattern.parse("17/4/2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    chrono_format: String,
    exact_width: bool,
    two_digit_year: bool,
}

impl DatePattern {
    /// Compiles a letter-style pattern.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDatePattern`] if the pattern is blank,
    /// uses an unsupported letter or letter count, or leaves a quote open.
    pub fn compile(pattern: &str) -> EngineResult<Self> {
        if pattern.trim().is_empty() {
            return Err(invalid(pattern, "pattern is empty"));
        }

        let chars: Vec<char> = pattern.chars().collect();
        let mut chrono_format = String::with_capacity(pattern.len() * 2);
        let mut exact_width = true;
        let mut two_digit_year = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                i = compile_quoted(pattern, &chars, i, &mut chrono_format)?;
                continue;
            }

            if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&other| other == c).count();
                let (spec, width) = letter_spec(pattern, c, run)?;
                chrono_format.push_str(spec);
                exact_width &= width != FieldWidth::Variable;
                two_digit_year |= spec == "%y";
                i += run;
                continue;
            }

            push_literal(&mut chrono_format, c);
            i += 1;
        }

        Ok(Self {
            source: pattern.to_string(),
            chrono_format,
            exact_width,
            two_digit_year,
        })
    }

    /// The pattern as supplied by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The equivalent chrono format string.
    pub fn chrono_format(&self) -> &str {
        &self.chrono_format
    }

    /// Parses a date token with this pattern.
    ///
    /// Two-digit years land in 2000..=2099. When every numeric field of the
    /// pattern has a fixed width, the token must match the date rendered back
    /// with the pattern (names compared case-insensitively).
    pub fn parse(&self, token: &str) -> Result<NaiveDate, DateTokenError> {
        let mut date = NaiveDate::parse_from_str(token, &self.chrono_format)?;

        if self.two_digit_year && date.year() < TWO_DIGIT_YEAR_BASE {
            // chrono reads 70..=99 as 1970..=1999
            if let Some(shifted) = date.with_year(date.year() + 100) {
                date = shifted;
            }
        }

        if self.exact_width {
            let expected = self.format(date);
            if !expected.eq_ignore_ascii_case(token) {
                return Err(DateTokenError::Width { expected });
            }
        }

        Ok(date)
    }

    /// Renders a date with this pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_format).to_string()
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_string(),
            chrono_format: "%Y-%m-%d".to_string(),
            exact_width: true,
            two_digit_year: false,
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(pattern: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidDatePattern {
        pattern: pattern.to_string(),
        message: message.into(),
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Copies a quoted section starting at `start` and returns the index after it.
fn compile_quoted(
    pattern: &str,
    chars: &[char],
    start: usize,
    out: &mut String,
) -> EngineResult<usize> {
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return Ok(start + 2);
    }

    let mut i = start + 1;
    loop {
        match chars.get(i) {
            None => return Err(invalid(pattern, "unterminated quoted text")),
            Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                out.push('\'');
                i += 2;
            }
            Some('\'') => return Ok(i + 1),
            Some(&c) => {
                push_literal(out, c);
                i += 1;
            }
        }
    }
}

fn letter_spec(
    pattern: &str,
    letter: char,
    run: usize,
) -> EngineResult<(&'static str, FieldWidth)> {
    use FieldWidth::{Fixed, Text, Variable};

    let spec = match (letter, run) {
        ('y' | 'u', 2) => ("%y", Fixed),
        ('y' | 'u', 4) => ("%Y", Fixed),
        ('y' | 'u', _) => ("%Y", Variable),
        ('M' | 'L', 1) => ("%-m", Variable),
        ('M' | 'L', 2) => ("%m", Fixed),
        ('M' | 'L', 3) => ("%b", Text),
        ('M' | 'L', _) => ("%B", Text),
        ('d', 1) => ("%-d", Variable),
        ('d', 2) => ("%d", Fixed),
        ('D', 3) => ("%j", Fixed),
        ('D', 1..=2) => ("%j", Variable),
        ('E', 1..=3) => ("%a", Text),
        ('E', 4) => ("%A", Text),
        ('d' | 'D' | 'E', _) => {
            return Err(invalid(
                pattern,
                format!("too many pattern letters: '{}'", letter.to_string().repeat(run)),
            ));
        }
        _ => {
            return Err(invalid(
                pattern,
                format!("unsupported pattern letter '{}'", letter),
            ));
        }
    };
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_pattern_matches_compiled_default() {
        let compiled = DatePattern::compile(DEFAULT_DATE_PATTERN).unwrap();
        assert_eq!(compiled, DatePattern::default());
    }

    #[test]
    fn test_upload_ui_patterns_compile() {
        let cases = [
            ("yyyy-MM-dd", "%Y-%m-%d"),
            ("dd/MM/yyyy", "%d/%m/%Y"),
            ("dd-MM-yyyy", "%d-%m-%Y"),
            ("MM-dd-yyyy", "%m-%d-%Y"),
            ("MM/dd/yyyy", "%m/%d/%Y"),
        ];
        for (pattern, expected) in cases {
            assert_eq!(
                DatePattern::compile(pattern).unwrap().chrono_format(),
                expected,
                "pattern {}",
                pattern
            );
        }
    }

    #[test]
    fn test_parses_us_style_dates() {
        let pattern = DatePattern::compile("MM/dd/yyyy").unwrap();
        assert_eq!(pattern.parse("04/17/2020").unwrap(), make_date("2020-04-17"));
    }

    #[test]
    fn test_single_letter_fields_accept_unpadded_values() {
        let pattern = DatePattern::compile("d.M.yyyy").unwrap();
        assert_eq!(pattern.parse("7.4.2020").unwrap(), make_date("2020-04-07"));
        assert_eq!(pattern.format(make_date("2020-04-07")), "7.4.2020");
    }

    #[test]
    fn test_month_names() {
        let pattern = DatePattern::compile("dd MMM yyyy").unwrap();
        assert_eq!(pattern.parse("17 Apr 2020").unwrap(), make_date("2020-04-17"));

        let pattern = DatePattern::compile("MMMM d, yyyy").unwrap();
        assert_eq!(pattern.format(make_date("2020-04-17")), "April 17, 2020");
    }

    #[test]
    fn test_quoted_literals_and_escaped_quote() {
        let pattern = DatePattern::compile("yyyy-MM-dd'T'").unwrap();
        assert_eq!(pattern.chrono_format(), "%Y-%m-%dT");

        let pattern = DatePattern::compile("''yy").unwrap();
        assert_eq!(pattern.chrono_format(), "'%y");

        let pattern = DatePattern::compile("'day ''d'''").unwrap();
        assert_eq!(pattern.chrono_format(), "day 'd'");
    }

    #[test]
    fn test_percent_is_escaped() {
        let pattern = DatePattern::compile("yyyy%MM%dd").unwrap();
        assert_eq!(pattern.chrono_format(), "%Y%%%m%%%d");
        assert_eq!(pattern.parse("2020%04%17").unwrap(), make_date("2020-04-17"));
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let err = DatePattern::compile("  ").unwrap_err();
        assert!(matches!(err, EngineError::InvalidDatePattern { .. }));
    }

    #[test]
    fn test_unsupported_letter_is_rejected() {
        let err = DatePattern::compile("yyyy-QQ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date pattern 'yyyy-QQ': unsupported pattern letter 'Q'"
        );
    }

    #[test]
    fn test_too_many_day_letters_is_rejected() {
        let err = DatePattern::compile("yyyy-MM-ddd").unwrap_err();
        assert!(err.to_string().contains("too many pattern letters: 'ddd'"));
    }

    #[test]
    fn test_unterminated_quote_is_rejected() {
        let err = DatePattern::compile("yyyy 'at").unwrap_err();
        assert!(err.to_string().contains("unterminated quoted text"));
    }

    #[test]
    fn test_token_not_matching_pattern_fails() {
        let pattern = DatePattern::default();
        assert!(pattern.parse("17/04/2020").is_err());
        assert!(pattern.parse("2020-13-01").is_err());
    }

    #[test]
    fn test_unpadded_fields_rejected_under_two_letter_pattern() {
        let pattern = DatePattern::default();
        for token in ["2020-4-7", "2020-04-7", "2020-4-07"] {
            match pattern.parse(token) {
                Err(DateTokenError::Width { expected }) => assert_eq!(expected, "2020-04-07"),
                other => panic!("token {} gave {:?}", token, other),
            }
        }
        assert_eq!(pattern.parse("2020-04-07").unwrap(), make_date("2020-04-07"));
    }

    #[test]
    fn test_month_name_case_is_ignored_under_exact_width() {
        let pattern = DatePattern::compile("dd MMM yyyy").unwrap();
        assert_eq!(pattern.parse("07 apr 2020").unwrap(), make_date("2020-04-07"));
        assert!(pattern.parse("7 Apr 2020").is_err());
    }

    #[test]
    fn test_two_digit_years_resolve_into_2000s() {
        let pattern = DatePattern::compile("dd/MM/yy").unwrap();
        assert_eq!(pattern.parse("15/04/85").unwrap(), make_date("2085-04-15"));
        assert_eq!(pattern.parse("15/04/20").unwrap(), make_date("2020-04-15"));
        assert_eq!(pattern.parse("29/02/72").unwrap(), make_date("2072-02-29"));
        assert_eq!(pattern.format(make_date("2085-04-15")), "15/04/85");
    }
}
