//! Field-level validation violations.

use serde::{Deserialize, Serialize};

/// A single field that failed validation.
///
/// `field` is a path into the submitted payload such as `retailer` or
/// `items[2].price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Path of the offending field.
    pub field: String,
    /// Why the field was rejected.
    pub message: String,
}

impl FieldViolation {
    /// Creates a new violation.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
