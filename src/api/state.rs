//! Application state for the longest pair API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::store::{InMemoryResultStore, ResultStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// result store and the service configuration.
#[derive(Clone)]
pub struct AppState {
    /// Where processed uploads are kept.
    store: Arc<dyn ResultStore>,
    /// The service configuration.
    config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates a new application state with the given store and configuration.
    pub fn new(store: Arc<dyn ResultStore>, config: ServiceConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Creates a state backed by a fresh [`InMemoryResultStore`].
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(Arc::new(InMemoryResultStore::new()), config)
    }

    /// Returns the result store.
    pub fn store(&self) -> &dyn ResultStore {
        self.store.as_ref()
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the date pattern used when an upload names none.
    pub fn default_date_pattern(&self) -> &str {
        &self.config.parser.date_pattern
    }
}
