//! In-memory snapshot storage
//!
//! Drop-in store for tests and ephemeral sessions.

use crate::error::Result;
use crate::store::SnapshotStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory snapshot store backed by a shared map.
///
/// Cloning yields a handle to the same underlying map, so a test can hold
/// one handle while the controller owns another.
#[derive(Clone, Default)]
pub struct MemorySnapshotStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the store to a controller.
    pub async fn preload(&self, key: &str, value: &str) {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemorySnapshotStore::new();

        assert!(store.get("todos").await.unwrap().is_none());

        store.set("todos", "[]").await.unwrap();
        assert_eq!(store.get("todos").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_memory_store_clone_shares_values() {
        let store = MemorySnapshotStore::new();
        let handle = store.clone();

        store.set("todos", "[1]").await.unwrap();
        assert_eq!(handle.get("todos").await.unwrap().as_deref(), Some("[1]"));
    }
}
