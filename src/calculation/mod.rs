//! Calculation logic for the longest pair engine.
//!
//! This module contains the processing pipeline: date pattern compilation,
//! line parsing into work intervals, interval overlap primitives, per-project
//! pair generation, grouping by project, and selection of the pair of
//! employees who worked together the longest.

mod date_pattern;
mod interval_parser;
mod longest_pair;
mod overlap;
mod pair_generator;
mod pipeline;
mod project_aggregator;

pub use date_pattern::{DEFAULT_DATE_PATTERN, DatePattern, DateTokenError};
pub use interval_parser::{ONGOING_END_TOKEN, parse_line};
pub use longest_pair::{select_longest_pair, sum_pair_totals};
pub use overlap::{intervals_overlap, overlap_days};
pub use pair_generator::generate_project_pairs;
pub use pipeline::{parse_intervals, process, process_as_of};
pub use project_aggregator::{ProjectGroup, aggregate_project_pairs, group_by_project};
