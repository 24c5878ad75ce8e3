//! Work interval model.
//!
//! A [`WorkInterval`] is one parsed line of an input file: a single employee's
//! working period on a single project.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's working period on one project.
///
/// Intervals are half-open by convention, `[from, to)`. Nothing enforces
/// `from <= to`; inverted ranges are accepted as parsed.
///
/// # Example
///
/// ```
/// use longest_pair::models::WorkInterval;
/// use chrono::NaiveDate;
///
/// let interval = WorkInterval {
///     employee_id: "143".to_string(),
///     project_id: "12".to_string(),
///     from: NaiveDate::from_ymd_opt(2013, 11, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2014, 1, 5).unwrap(),
/// };
/// assert_eq!(interval.duration_days(), 65);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Identifier of the project.
    pub project_id: String,
    /// First day of the interval.
    pub from: NaiveDate,
    /// End of the interval (exclusive).
    pub to: NaiveDate,
}

impl WorkInterval {
    /// Returns the length of the interval in days, negative for inverted ranges.
    pub fn duration_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_duration_of_inverted_interval_is_negative() {
        let interval = WorkInterval {
            employee_id: "1".to_string(),
            project_id: "10".to_string(),
            from: make_date("2020-04-20"),
            to: make_date("2020-04-17"),
        };
        assert_eq!(interval.duration_days(), -3);
    }

    #[test]
    fn test_work_interval_deserialization() {
        let json = r#"{
            "employee_id": "218",
            "project_id": "10",
            "from": "2012-05-16",
            "to": "2013-04-17"
        }"#;

        let interval: WorkInterval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.employee_id, "218");
        assert_eq!(interval.from, make_date("2012-05-16"));
        assert_eq!(interval.to, make_date("2013-04-17"));
    }
}
