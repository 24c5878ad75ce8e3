//! Grouping intervals by project and collecting their pair records.

use std::collections::HashMap;

use crate::models::{PairOverlap, WorkInterval};

use super::generate_project_pairs;

/// All intervals that share one project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    /// The shared project id.
    pub project_id: String,
    /// The intervals in input order.
    pub intervals: Vec<WorkInterval>,
}

/// Groups intervals by project id.
///
/// Groups appear in order of each project's first occurrence and keep the
/// input order of their intervals.
pub fn group_by_project(intervals: Vec<WorkInterval>) -> Vec<ProjectGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ProjectGroup> = Vec::new();

    for interval in intervals {
        match index.get(&interval.project_id) {
            Some(&position) => groups[position].intervals.push(interval),
            None => {
                index.insert(interval.project_id.clone(), groups.len());
                groups.push(ProjectGroup {
                    project_id: interval.project_id.clone(),
                    intervals: vec![interval],
                });
            }
        }
    }

    groups
}

/// Produces the flat list of pair records for every project in the input.
///
/// Projects with a single interval contribute nothing.
///
/// # Example
///
/// ```
/// use longest_pair::calculation::aggregate_project_pairs;
/// use longest_pair::models::WorkInterval;
/// use chrono::NaiveDate;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
/// let interval = |emp: &str, project: &str| WorkInterval {
///     employee_id: emp.to_string(),
///     project_id: project.to_string(),
///     from: date(1, 1),
///     to: date(1, 11),
/// };
///
/// let pairs = aggregate_project_pairs(vec![
///     interval("1", "A"),
///     interval("2", "B"),
///     interval("3", "A"),
/// ]);
///
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].project_id, "A");
/// assert_eq!(pairs[0].overlap_days, 10);
/// ```
pub fn aggregate_project_pairs(intervals: Vec<WorkInterval>) -> Vec<PairOverlap> {
    group_by_project(intervals)
        .iter()
        .flat_map(|group| generate_project_pairs(&group.intervals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn interval(employee_id: &str, project_id: &str) -> WorkInterval {
        WorkInterval {
            employee_id: employee_id.to_string(),
            project_id: project_id.to_string(),
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        }
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let groups = group_by_project(vec![
            interval("1", "20"),
            interval("2", "10"),
            interval("3", "20"),
            interval("4", "30"),
            interval("5", "10"),
        ]);

        let ids: Vec<&str> = groups.iter().map(|g| g.project_id.as_str()).collect();
        assert_eq!(ids, vec!["20", "10", "30"]);

        let employees: Vec<&str> = groups[0]
            .intervals
            .iter()
            .map(|i| i.employee_id.as_str())
            .collect();
        assert_eq!(employees, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        assert!(group_by_project(Vec::new()).is_empty());
    }

    #[test]
    fn test_pairs_are_concatenated_in_group_order() {
        let pairs = aggregate_project_pairs(vec![
            interval("1", "20"),
            interval("2", "10"),
            interval("3", "20"),
            interval("4", "10"),
            interval("5", "10"),
        ]);

        // project 20: (1,3); project 10: (2,4), (2,5), (4,5)
        let summary: Vec<(&str, &str, &str)> = pairs
            .iter()
            .map(|p| {
                (
                    p.project_id.as_str(),
                    p.employee_a.as_str(),
                    p.employee_b.as_str(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("20", "1", "3"),
                ("10", "2", "4"),
                ("10", "2", "5"),
                ("10", "4", "5"),
            ]
        );
    }

    #[test]
    fn test_single_interval_projects_contribute_nothing() {
        let pairs = aggregate_project_pairs(vec![
            interval("1", "10"),
            interval("2", "20"),
            interval("3", "30"),
        ]);
        assert!(pairs.is_empty());
    }
}
