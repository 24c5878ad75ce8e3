//! Longest working pair engine.
//!
//! This crate reads files of employee work intervals on projects, computes how
//! many days every pair of employees worked together on shared projects and
//! reports the pair that worked together the longest. The processing pipeline
//! lives in [`calculation`]; [`api`] exposes it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
