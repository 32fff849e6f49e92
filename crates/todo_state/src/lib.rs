//! todo_state - State controller for the todo list
//!
//! This crate provides the event-driven state manager that owns the
//! in-memory list, the active filter, the seed page cursor, and the edit
//! session. Rendering layers dispatch intents and re-render from the
//! snapshot; they never mutate state directly.

pub mod controller;
pub mod error;
pub mod id;
pub mod intent;
pub mod snapshot;

// Re-export commonly used types
pub use controller::{TodoListController, PAGE_SIZE, STORAGE_KEY};
pub use error::{ControllerError, Result};
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use intent::{Notice, TodoIntent};
pub use snapshot::{EditSession, EmptyState, Snapshot};
