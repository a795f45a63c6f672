//! Best-effort audit of processed receipts.
//!
//! After a submission is committed the handler hands an [`AuditRecord`] to
//! [`dispatch`], which runs the configured [`AuditSink`] on a detached tokio
//! task. The request never waits for it, and a failing sink is only logged.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

/// Record emitted once per successfully processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// The identifier returned to the client.
    pub id: Uuid,
    /// The points stored under that identifier.
    pub points: u64,
    /// When the submission was committed.
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Creates a record stamped with the current time.
    pub fn new(id: Uuid, points: u64) -> Self {
        Self {
            id,
            points,
            recorded_at: Utc::now(),
        }
    }
}

/// Destination for audit records.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Delivers one record.
    async fn record(&self, record: AuditRecord) -> EngineResult<()>;
}

/// Sink that emits each record as an `info` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, record: AuditRecord) -> EngineResult<()> {
        info!(
            receipt_id = %record.id,
            points = record.points,
            recorded_at = %record.recorded_at,
            "Receipt processing recorded"
        );
        Ok(())
    }
}

/// Delivers a record on a detached task.
///
/// The returned handle may be dropped; it exists so tests can wait for
/// delivery. Sink errors are logged at `warn` and go no further.
pub fn dispatch(sink: Arc<dyn AuditSink>, record: AuditRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        let id = record.id;
        if let Err(err) = sink.record(record).await {
            warn!(receipt_id = %id, error = %err, "Audit record dropped");
        }
    })
}
