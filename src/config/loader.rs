//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;

use crate::calculation::DatePattern;
use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind_address: "127.0.0.1:8080"
///   max_upload_bytes: 10485760
///   allowed_origins:
///     - "http://localhost:3000"
/// parser:
///   date_pattern: "yyyy-MM-dd"
/// ```
///
/// # Example
///
/// ```no_run
/// use longest_pair::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind_address);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - An allowed origin is not a valid header value
    /// - The configured default date pattern does not compile
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> EngineResult<ServiceConfig> {
        // An empty file deserializes to YAML null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }

        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if let Some(origin) = config
            .server
            .allowed_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!("invalid allowed origin '{}'", origin.escape_debug()),
            });
        }

        DatePattern::compile(&config.parser.date_pattern)?;
        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the default date pattern for uploads.
    pub fn default_date_pattern(&self) -> &str {
        &self.config.parser.date_pattern
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("longest-pair-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = temp_config(
            "full.yaml",
            r#"
server:
  bind_address: "0.0.0.0:9090"
  max_upload_bytes: 1024
parser:
  date_pattern: "dd/MM/yyyy"
"#,
        );

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().server.bind_address, "0.0.0.0:9090");
        assert_eq!(loader.config().server.max_upload_bytes, 1024);
        assert_eq!(loader.default_date_pattern(), "dd/MM/yyyy");
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load("./config/service.yaml").unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let path = temp_config("empty.yaml", "");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/service.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error_with_path() {
        let path = temp_config("invalid.yaml", "server: [unclosed");
        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { path: reported, .. }) => {
                assert!(reported.ends_with("invalid.yaml"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_default_pattern_is_rejected() {
        let path = temp_config("bad-pattern.yaml", "parser:\n  date_pattern: \"yyyy-QQ\"\n");
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::InvalidDatePattern { .. })));
    }

    #[test]
    fn test_invalid_allowed_origin_is_rejected() {
        let path = temp_config(
            "bad-origin.yaml",
            "server:\n  allowed_origins:\n    - \"http://localhost:3000\\n\"\n",
        );
        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("invalid allowed origin"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
