//! Application state for the receipt points API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::audit::{AuditSink, TracingAuditSink};
use crate::store::{InMemoryReceiptStore, ReceiptStore};

/// Shared application state.
///
/// Holds the score store and the audit sink behind trait objects so either
/// can be replaced without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReceiptStore>,
    audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Creates a new application state from a store and an audit sink.
    pub fn new(store: Arc<dyn ReceiptStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    /// Creates a state backed by an empty in-memory store that audits to
    /// the tracing log.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryReceiptStore::new()),
            Arc::new(TracingAuditSink),
        )
    }

    /// Returns the score store.
    pub fn store(&self) -> &Arc<dyn ReceiptStore> {
        &self.store
    }

    /// Returns the audit sink.
    pub fn audit(&self) -> &Arc<dyn AuditSink> {
        &self.audit
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
