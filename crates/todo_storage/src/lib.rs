//! # Todo Storage
//!
//! Persistence gateway for todo list snapshots. The gateway is a plain
//! key-value surface over string payloads; callers decide the encoding
//! (the controller stores one JSON array under a single key).

pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod store;

// Re-exports
pub use error::{Result, StorageError};
pub use file_store::FileSnapshotStore;
pub use memory_store::MemorySnapshotStore;
pub use store::SnapshotStore;
