//! Score storage for processed receipts.
//!
//! The [`ReceiptStore`] trait is the seam between the HTTP handlers and
//! whatever holds the scores. [`InMemoryReceiptStore`] keeps them in a
//! process-local map and loses them on restart; a durable backend only has
//! to implement the same two operations.

mod in_memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;

pub use in_memory::InMemoryReceiptStore;

/// Registry from receipt identifier to awarded points.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Records the points for a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateReceiptId` if the identifier already holds a score.
    /// Existing records are never overwritten.
    async fn put(&self, id: Uuid, points: u64) -> EngineResult<()>;

    /// Returns the points recorded for an identifier, or `None` if there is
    /// no such record.
    async fn get(&self, id: Uuid) -> EngineResult<Option<u64>>;
}
