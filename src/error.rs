//! Error types for the receipt points service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while scoring and storing receipts.

use thiserror::Error;
use uuid::Uuid;

use crate::models::FieldViolation;

/// The main error type for the receipt points service.
///
/// All fallible operations in the crate return this error type, so the
/// HTTP layer can map every failure to a uniform response in one place.
///
/// # Example
///
/// ```
/// use receipt_points::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A submitted receipt failed structural validation.
    #[error("Invalid receipt: {} violation(s)", .violations.len())]
    InvalidReceipt {
        /// Every field-level violation found in the payload.
        violations: Vec<FieldViolation>,
    },

    /// No score has been recorded under the given identifier.
    #[error("No receipt found for ID: {id}")]
    ReceiptNotFound {
        /// The identifier that was looked up, as supplied by the caller.
        id: String,
    },

    /// A store insert reused an identifier that already holds a score.
    #[error("Receipt ID already recorded: {id}")]
    DuplicateReceiptId {
        /// The identifier that collided.
        id: Uuid,
    },

    /// A best-effort audit record could not be delivered.
    ///
    /// Returned by [`AuditSink`](crate::audit::AuditSink) implementations
    /// whose delivery fails. The built-in tracing sink never fails, so this
    /// variant exists for sinks that forward records elsewhere.
    #[error("Audit delivery failed: {message}")]
    AuditFailed {
        /// A description of the delivery failure.
        message: String,
    },

    /// A well-formed receipt carried a value the rule engine cannot interpret.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
