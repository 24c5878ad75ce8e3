//! Pair overlap models.
//!
//! This module defines the per-project [`PairOverlap`] record, the canonical
//! unordered [`PairKey`] used to aggregate records across projects, and the
//! derived [`PairTotal`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of days two employees worked together on one project.
///
/// `employee_a` and `employee_b` follow the encounter order of the source
/// file, not lexical order. Zero-overlap pairs are recorded too.
///
/// Serialized field names are the ones the upload UI reads.
///
/// # Example
///
/// ```
/// use longest_pair::models::PairOverlap;
///
/// let pair = PairOverlap {
///     employee_a: "2".to_string(),
///     employee_b: "3".to_string(),
///     project_id: "1".to_string(),
///     overlap_days: 3,
/// };
/// let json = serde_json::to_value(&pair).unwrap();
/// assert_eq!(json["employeeIdFirst"], "2");
/// assert_eq!(json["daysWorked"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOverlap {
    /// The employee encountered first in the project's interval list.
    #[serde(rename = "employeeIdFirst")]
    pub employee_a: String,
    /// The employee encountered second in the project's interval list.
    #[serde(rename = "employeeIdSecond")]
    pub employee_b: String,
    /// The project both intervals belong to.
    #[serde(rename = "projectId")]
    pub project_id: String,
    /// Days worked together, never negative.
    #[serde(rename = "daysWorked")]
    pub overlap_days: i64,
}

impl PairOverlap {
    /// Returns the canonical unordered key for this record's employees.
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.employee_a, &self.employee_b)
    }

    /// Returns true if both sides name the same employee.
    pub fn is_self_pair(&self) -> bool {
        self.employee_a == self.employee_b
    }
}

/// An unordered pair of employee ids.
///
/// The ids are stored sorted, so `PairKey::new("b", "a") == PairKey::new("a", "b")`.
///
/// ```
/// use longest_pair::models::PairKey;
///
/// let key = PairKey::new("7", "3");
/// assert_eq!(key, PairKey::new("3", "7"));
/// assert_eq!(key.first(), "3");
/// assert_eq!(key.second(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Creates a key from two ids in any order.
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// The lexically smaller id.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexically greater id.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee Id: {}, Employee Id: {}",
            self.first, self.second
        )
    }
}

/// Overlap days summed across every project a pair shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairTotal {
    /// The unordered pair.
    pub key: PairKey,
    /// Sum of `overlap_days` over all records naming the pair.
    pub total_days: i64,
}
