//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LoggingSettings, ServerSettings, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 8000
/// logging:
///   level: info
///   format: pretty   # pretty | compact | json
/// ```
///
/// # Example
///
/// ```no_run
/// use receipt_points::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Binding to {}", loader.server().bind_address());
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
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<ServiceConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingSettings {
        &self.config.logging
    }

    /// Replaces the host and/or port, leaving unset values untouched.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.config.server.host = host;
        }
        if let Some(port) = port {
            self.config.server.port = port;
        }
        self
    }
}
