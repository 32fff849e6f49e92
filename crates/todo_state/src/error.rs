//! Controller error types
//!
//! Every variant is recoverable; the presentation layer surfaces the
//! display text as a warning and the list stays unchanged.

use thiserror::Error;
use todo_storage::StorageError;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Todo title cannot be empty.")]
    EmptyTitle,

    #[error("The todo list is still loading.")]
    Loading,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ControllerError>;
