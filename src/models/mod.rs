//! Core data models for the longest pair engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pair_overlap;
mod processing_result;
mod work_interval;

pub use pair_overlap::{PairKey, PairOverlap, PairTotal};
pub use processing_result::{LongestPairSummary, ProcessingResult};
pub use work_interval::WorkInterval;
