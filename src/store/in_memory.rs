//! In-memory score store.
//!
//! Scores live in a `HashMap` behind a tokio `RwLock`, so concurrent lookups
//! share the lock and inserts take it exclusively.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::ReceiptStore;

/// A thread-safe in-memory store for receipt scores.
///
/// Uses `Arc<RwLock<HashMap<Uuid, u64>>>` so clones share one map. Records
/// are never evicted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    scores: Arc<RwLock<HashMap<Uuid, u64>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded scores.
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    /// Returns true if no scores have been recorded.
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: Uuid, points: u64) -> EngineResult<()> {
        let mut scores = self.scores.write().await;
        match scores.entry(id) {
            Entry::Occupied(_) => Err(EngineError::DuplicateReceiptId { id }),
            Entry::Vacant(slot) => {
                slot.insert(points);
                Ok(())
            }
        }
    }

    async fn get(&self, id: Uuid) -> EngineResult<Option<u64>> {
        let scores = self.scores.read().await;
        Ok(scores.get(&id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryReceiptStore::new();
        let id = Uuid::new_v4();

        store.put(id, 28).await.unwrap();

        assert_eq!(store.get(id).await.unwrap(), Some(28));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none_not_zero() {
        let store = InMemoryReceiptStore::new();
        assert_eq!(store.get(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_zero_points_is_distinct_from_missing() {
        let store = InMemoryReceiptStore::new();
        let id = Uuid::new_v4();
        store.put(id, 0).await.unwrap();

        assert_eq!(store.get(id).await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_duplicate_put_is_rejected_and_keeps_original() {
        let store = InMemoryReceiptStore::new();
        let id = Uuid::new_v4();
        store.put(id, 15).await.unwrap();

        match store.put(id, 99).await {
            Err(EngineError::DuplicateReceiptId { id: dup }) => assert_eq!(dup, id),
            other => panic!("Expected DuplicateReceiptId, got {:?}", other),
        }
        assert_eq!(store.get(id).await.unwrap(), Some(15));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryReceiptStore::new();
        let clone = store.clone();
        let id = Uuid::new_v4();

        clone.put(id, 31).await.unwrap();

        assert_eq!(store.get(id).await.unwrap(), Some(31));
    }

    #[tokio::test]
    async fn test_concurrent_puts_are_not_lost() {
        let store = InMemoryReceiptStore::new();
        let mut handles = Vec::new();

        for i in 0..64u64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = Uuid::new_v4();
                store.put(id, i).await.unwrap();
                (id, i)
            }));
        }

        let mut written = Vec::new();
        for handle in handles {
            written.push(handle.await.unwrap());
        }

        assert_eq!(store.len().await, 64);
        for (id, points) in written {
            assert_eq!(store.get(id).await.unwrap(), Some(points));
        }
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryReceiptStore::new();
        assert!(store.is_empty().await);
    }
}
