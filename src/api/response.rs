//! Response types for the receipt points API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::FieldViolation;

/// Summary message returned with every validation failure.
pub const VALIDATION_MESSAGE: &str = "Invalid input data. Please verify input.";

/// Message returned when an identifier has no recorded score.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    /// Identifier under which the score was recorded.
    pub id: Uuid,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    /// The recorded points.
    pub points: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-level violations, present only for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            violations: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing each offending field.
    pub fn validation_error(violations: Vec<FieldViolation>) -> Self {
        Self {
            violations,
            ..Self::new("VALIDATION_ERROR", VALIDATION_MESSAGE)
        }
    }

    /// Creates a receipt not found error response.
    pub fn receipt_not_found() -> Self {
        Self::new("RECEIPT_NOT_FOUND", NOT_FOUND_MESSAGE)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps violations in a `400 Bad Request`.
    pub fn bad_request(violations: Vec<FieldViolation>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(violations),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidReceipt { violations } => Self::bad_request(violations),
            EngineError::ReceiptNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::receipt_not_found(),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::DuplicateReceiptId { id } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Failed to record receipt",
                    format!("Receipt ID already recorded: {}", id),
                ),
            },
            EngineError::AuditFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("AUDIT_ERROR", "Audit delivery failed", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
