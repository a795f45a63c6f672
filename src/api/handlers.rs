//! HTTP request handlers for the receipt points API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::audit::{AuditRecord, dispatch};
use crate::calculation::calculate_breakdown;
use crate::error::EngineError;
use crate::models::{FieldViolation, Receipt};

use super::request::ReceiptRequest;
use super::response::{ApiErrorResponse, PointsResponse, ProcessReceiptResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/:id/points", get(get_points_handler))
        .with_state(state)
}

/// Handler for POST /receipts/process.
///
/// Validates the receipt, scores it, records the score under a fresh
/// identifier and returns that identifier. The audit record is dispatched
/// after the store write and is not awaited.
async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt");

    let Json(request) = payload.map_err(|rejection| {
        let violation = rejection_violation(&rejection);
        warn!(
            correlation_id = %correlation_id,
            error = %violation.message,
            "Rejected receipt body"
        );
        ApiErrorResponse::bad_request(vec![violation])
    })?;

    let receipt = Receipt::try_from(request).map_err(|err| {
        if let EngineError::InvalidReceipt { violations } = &err {
            warn!(
                correlation_id = %correlation_id,
                violations = ?violations,
                "Receipt failed validation"
            );
        }
        ApiErrorResponse::from(err)
    })?;

    match serde_json::to_string(&receipt) {
        Ok(json) => debug!(correlation_id = %correlation_id, receipt = %json, "Validated receipt"),
        Err(err) => debug!(correlation_id = %correlation_id, error = %err, "Receipt not serializable"),
    }

    let start_time = Instant::now();
    let breakdown = calculate_breakdown(&receipt).map_err(|err| {
        error!(correlation_id = %correlation_id, error = %err, "Points calculation failed");
        ApiErrorResponse::from(err)
    })?;
    debug!(correlation_id = %correlation_id, steps = ?breakdown.steps, "Points breakdown");

    let id = Uuid::new_v4();
    let points = breakdown.total_points;
    state.store().put(id, points).await.map_err(|err| {
        error!(correlation_id = %correlation_id, error = %err, "Failed to record points");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        receipt_id = %id,
        points,
        items_count = receipt.item_count(),
        duration_us = start_time.elapsed().as_micros(),
        "Receipt processed"
    );

    dispatch(state.audit().clone(), AuditRecord::new(id, points));

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Handler for GET /receipts/{id}/points.
///
/// Identifiers that are not valid UUIDs cannot have been issued by this
/// service and are reported as not found.
async fn get_points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiErrorResponse> {
    info!(receipt_id = %id, "Fetching points");

    let not_found = || {
        warn!(receipt_id = %id, "No receipt found");
        ApiErrorResponse::from(EngineError::ReceiptNotFound { id: id.clone() })
    };

    let Ok(uuid) = Uuid::parse_str(&id) else {
        return Err(not_found());
    };

    match state.store().get(uuid).await? {
        Some(points) => {
            info!(receipt_id = %uuid, points, "Points found");
            Ok(Json(PointsResponse { points }))
        }
        None => Err(not_found()),
    }
}

/// Turns a body extraction failure into a single field violation.
fn rejection_violation(rejection: &JsonRejection) -> FieldViolation {
    match rejection {
        // Field types are checked during validation, so this is a non-object body
        JsonRejection::JsonDataError(err) => FieldViolation::new("body", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            FieldViolation::new("body", format!("Invalid JSON syntax: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            FieldViolation::new("content-type", "Content-Type must be application/json")
        }
        _ => FieldViolation::new("body", "Failed to read request body"),
    }
}
