//! Storage for processed results.
//!
//! The HTTP layer keeps each upload's [`ProcessingResult`] so it can be
//! fetched later by file name. Storage sits behind the [`ResultStore`] trait
//! and is injected into the API state; the processing pipeline never touches it.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::ProcessingResult;

/// A key-value store of processed results.
///
/// Writing an existing key replaces the previous result.
pub trait ResultStore: Send + Sync {
    /// Stores `result` under `key`.
    fn put(&self, key: &str, result: ProcessingResult);

    /// Returns a copy of the result stored under `key`, if any.
    fn get(&self, key: &str) -> Option<ProcessingResult>;
}

/// A process-lifetime store backed by a `HashMap`.
///
/// There is no eviction; entries live until the process exits.
///
/// # Example
///
/// ```
/// use longest_pair::models::{LongestPairSummary, ProcessingResult};
/// use longest_pair::store::{InMemoryResultStore, ResultStore};
///
/// let store = InMemoryResultStore::new();
/// store.put("employees.txt", ProcessingResult {
///     pairs: vec![],
///     summary: LongestPairSummary::Undetermined,
/// });
///
/// assert!(store.get("employees.txt").is_some());
/// assert!(store.get("other.txt").is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: RwLock<HashMap<String, ProcessingResult>>,
}

impl InMemoryResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored results.
    pub fn len(&self) -> usize {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultStore for InMemoryResultStore {
    fn put(&self, key: &str, result: ProcessingResult) {
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), result);
    }

    fn get(&self, key: &str) -> Option<ProcessingResult> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
