//! Processing result models.
//!
//! This module contains the [`ProcessingResult`] returned by the pipeline and
//! the [`LongestPairSummary`] describing which pair, if any, worked together
//! the longest.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PairOverlap;

/// Outcome of selecting the longest working pair.
///
/// `Undetermined` (there were no pairs at all) is kept distinct from
/// `NoOverlap` (pairs existed but none of them shared a single day).
///
/// # Example
///
/// ```
/// use longest_pair::models::LongestPairSummary;
///
/// let summary = LongestPairSummary::BestPair {
///     employee_a: "2".to_string(),
///     employee_b: "3".to_string(),
///     total_days: 3,
/// };
/// assert!(summary.is_best_pair());
/// assert_eq!(
///     summary.to_string(),
///     "The pair of employees that have worked together for the longest time is \
///      'Employee Id: 2, Employee Id: 3', 3 days total."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LongestPairSummary {
    /// The input produced no pairs.
    Undetermined,
    /// Pairs exist but every total is zero.
    NoOverlap,
    /// The pair with the greatest positive total.
    BestPair {
        /// First employee of the pair, in canonical order.
        employee_a: String,
        /// Second employee of the pair, in canonical order.
        employee_b: String,
        /// Days worked together across all shared projects.
        total_days: i64,
    },
}

impl LongestPairSummary {
    /// Returns true if a pair with a positive total was found.
    pub fn is_best_pair(&self) -> bool {
        matches!(self, LongestPairSummary::BestPair { .. })
    }
}

impl fmt::Display for LongestPairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongestPairSummary::Undetermined => write!(
                f,
                "The pair of employees that have worked together for the longest time cannot be determined."
            ),
            LongestPairSummary::NoOverlap => write!(f, "No employees have worked together."),
            LongestPairSummary::BestPair {
                employee_a,
                employee_b,
                total_days,
            } => write!(
                f,
                "The pair of employees that have worked together for the longest time is \
                 'Employee Id: {}, Employee Id: {}', {} days total.",
                employee_a, employee_b, total_days
            ),
        }
    }
}

/// Everything produced from one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// One record per employee pair per project, in project then encounter order.
    pub pairs: Vec<PairOverlap>,
    /// The longest working pair across all projects.
    pub summary: LongestPairSummary,
}
