//! todo_core - Core types for the todo list system
//!
//! This crate provides the foundational types used across all todo-related
//! crates:
//! - `item` - TodoItem, the single unit of user data
//! - `filter` - Filter, the display-only view predicate

pub mod filter;
pub mod item;

// Re-export commonly used types
pub use filter::Filter;
pub use item::{TodoItem, DEFAULT_OWNER_TAG};
