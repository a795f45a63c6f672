//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber whose filter comes from `RUST_LOG`
//! when set, otherwise from the configured level, and whose output format is
//! chosen by [`LogFormat`].

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LogFormat, LoggingSettings};

/// Boxed error returned when the subscriber cannot be installed.
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Builds the event filter for the given settings.
///
/// `RUST_LOG` wins over the configured level when it is set and valid.
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&settings.level)?),
    }
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = build_filter(settings)?;

    match settings.format {
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true));
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty());
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact());
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
