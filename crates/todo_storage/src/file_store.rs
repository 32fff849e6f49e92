//! File-based snapshot storage
//!
//! One `{key}.json` file per key under a base directory.

use crate::error::Result;
use crate::store::SnapshotStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based snapshot store.
#[derive(Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        let path = self.key_path(key);
        fs::write(&path, value).await?;

        tracing::debug!(key, path = %path.display(), "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_set_and_get() {
        let dir = tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        store.set("todos", r#"[{"id":1}]"#).await.unwrap();

        let value = store.get("todos").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[tokio::test]
    async fn test_file_store_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        let value = store.get("todos").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_file_store_overwrites() {
        let dir = tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path());

        store.set("todos", "[]").await.unwrap();
        store.set("todos", r#"["replaced"]"#).await.unwrap();

        let value = store.get("todos").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"["replaced"]"#));
    }
}
