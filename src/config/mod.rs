//! Configuration loading for the receipt points service.
//!
//! This module loads server and logging settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use receipt_points::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_HOST, DEFAULT_PORT, LogFormat, LoggingSettings, ServerSettings, ServiceConfig,
};
