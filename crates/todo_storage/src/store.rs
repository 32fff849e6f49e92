//! Snapshot storage trait

use crate::error::Result;
use async_trait::async_trait;

/// Key-value persistence gateway for snapshot payloads.
///
/// Values are opaque strings; interpretation (and tolerance of malformed
/// content) is the caller's concern. A missing key is `Ok(None)`, never an
/// error.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
