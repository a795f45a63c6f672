//! HTTP API module for the receipt points service.
//!
//! This module provides the REST endpoints for submitting receipts and
//! retrieving their points, plus the server wiring around them.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::{ItemRequest, JsonField, ReceiptRequest};
pub use response::{
    ApiError, ApiErrorResponse, NOT_FOUND_MESSAGE, PointsResponse, ProcessReceiptResponse,
    VALIDATION_MESSAGE,
};
pub use server::{ServerError, create_app, run_server, start_background_server};
pub use state::AppState;
