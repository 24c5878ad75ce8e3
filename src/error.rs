//! Error types for the longest pair engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing work interval files.

use thiserror::Error;

/// The main error type for the longest pair engine.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use longest_pair::error::EngineError;
///
/// let error = EngineError::ResultNotFound {
///     key: "employees.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "No processed result stored for 'employees.txt'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A line of the input did not have the expected structure.
    #[error("Malformed line {line_number} '{line}': {message}")]
    MalformedLine {
        /// The 1-based line number within the raw input.
        line_number: usize,
        /// The trimmed content of the offending line.
        line: String,
        /// A description of what was wrong with the line.
        message: String,
    },

    /// A date pattern could not be compiled.
    #[error("Invalid date pattern '{pattern}': {message}")]
    InvalidDatePattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// A description of the problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No processed result is stored under the requested key.
    #[error("No processed result stored for '{key}'")]
    ResultNotFound {
        /// The key that was looked up.
        key: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
