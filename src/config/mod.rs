//! Configuration loading and management for the longest pair service.
//!
//! This module provides functionality to load the service configuration from
//! a YAML file: the HTTP bind address, the upload size limit, the browser
//! origins allowed to call the API and the default date pattern.
//!
//! # Example
//!
//! ```no_run
//! use longest_pair::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Default date pattern: {}", config.default_date_pattern());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND_ADDRESS, DEFAULT_MAX_UPLOAD_BYTES, ParserConfig,
    ServerConfig, ServiceConfig,
};
