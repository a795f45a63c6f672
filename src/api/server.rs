//! API server setup.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;

use super::handlers::create_router;
use super::state::AppState;

/// Boxed error returned by server startup.
pub type ServerError = Box<dyn std::error::Error + Send + Sync>;

/// Builds the router with HTTP tracing middleware.
pub fn create_app(state: AppState) -> Router {
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Runs the API server until the listener fails.
pub async fn run_server(settings: &ServerSettings, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(settings.bind_address()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(address = %addr, "Receipt points API listening");

    axum::serve(listener, create_app(state)).await?;

    Ok(())
}

/// Starts the server on a background task and returns the bound address.
///
/// Binding port 0 picks a free port, which makes this useful in tests.
pub async fn start_background_server(
    settings: &ServerSettings,
    state: AppState,
) -> Result<SocketAddr, ServerError> {
    let listener = TcpListener::bind(settings.bind_address()).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, create_app(state)).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
