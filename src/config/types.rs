//! Configuration types for the longest pair service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_DATE_PATTERN;

/// Default address the HTTP service listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Default upper bound on an uploaded request body, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Browser origin of the upload UI's development server.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_address: String,
    /// Maximum accepted request body size for uploads.
    pub max_upload_bytes: usize,
    /// Browser origins allowed to call the API cross-origin. `"*"` allows any
    /// origin; an empty list disables CORS.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

/// Line parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Date pattern used when an upload does not name one.
    pub date_pattern: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Line parser settings.
    pub parser: ParserConfig,
}
