//! Configuration types for the receipt points service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use serde::{Deserialize, Serialize};

/// Default host the HTTP server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Network settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host or IP address to bind.
    pub host: String,
    /// TCP port to listen on; 0 picks a free port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. `info` or `receipt_points=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Complete service configuration.
///
/// Every section is optional in the YAML file; missing sections and fields
/// fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}
