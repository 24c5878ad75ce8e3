//! Longest working pair selection.
//!
//! Totals are summed per unordered employee pair across every shared project
//! and the greatest total wins. Ties go to the pair whose first record appears
//! earliest in the pair list (first-seen max).

use std::collections::HashMap;

use crate::models::{LongestPairSummary, PairKey, PairOverlap, PairTotal};

/// Sums `overlap_days` per unordered employee pair.
///
/// Totals are returned in order of each pair's first appearance. Records that
/// name the same employee twice are skipped.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::sum_pair_totals;
/// use longest_pair::models::{PairKey, PairOverlap};
///
/// let record = |a: &str, b: &str, project: &str, days| PairOverlap {
///     employee_a: a.to_string(),
///     employee_b: b.to_string(),
///     project_id: project.to_string(),
///     overlap_days: days,
/// };
///
/// let totals = sum_pair_totals(&[
///     record("1", "2", "10", 5),
///     record("3", "1", "10", 1),
///     record("2", "1", "11", 7),
/// ]);
///
/// assert_eq!(totals.len(), 2);
/// assert_eq!(totals[0].key, PairKey::new("1", "2"));
/// assert_eq!(totals[0].total_days, 12);
/// ```
pub fn sum_pair_totals(pairs: &[PairOverlap]) -> Vec<PairTotal> {
    let mut index: HashMap<PairKey, usize> = HashMap::new();
    let mut totals: Vec<PairTotal> = Vec::new();

    for pair in pairs.iter().filter(|p| !p.is_self_pair()) {
        let key = pair.key();
        match index.get(&key) {
            Some(&position) => totals[position].total_days += pair.overlap_days,
            None => {
                index.insert(key.clone(), totals.len());
                totals.push(PairTotal {
                    key,
                    total_days: pair.overlap_days,
                });
            }
        }
    }

    totals
}

/// Selects the pair of employees who worked together the longest.
///
/// # Returns
///
/// - [`LongestPairSummary::Undetermined`] when there are no pairs to compare
/// - [`LongestPairSummary::NoOverlap`] when the greatest total is 0
/// - [`LongestPairSummary::BestPair`] otherwise, with ids in canonical order
///
/// # Example
///
/// ```
/// use longest_pair::calculation::select_longest_pair;
/// use longest_pair::models::LongestPairSummary;
///
/// assert_eq!(select_longest_pair(&[]), LongestPairSummary::Undetermined);
/// ```
pub fn select_longest_pair(pairs: &[PairOverlap]) -> LongestPairSummary {
    let mut best: Option<PairTotal> = None;

    for total in sum_pair_totals(pairs) {
        let replace = match &best {
            Some(current) => total.total_days > current.total_days,
            None => true,
        };
        if replace {
            best = Some(total);
        }
    }

    match best {
        None => LongestPairSummary::Undetermined,
        Some(total) if total.total_days == 0 => LongestPairSummary::NoOverlap,
        Some(total) => LongestPairSummary::BestPair {
            employee_a: total.key.first().to_string(),
            employee_b: total.key.second().to_string(),
            total_days: total.total_days,
        },
    }
}
