//! TodoItem - the single unit of user data
//!
//! Field names on the wire match the demo seed collection
//! (jsonplaceholder-style), so the same serde shape covers both the
//! persisted snapshot and the remote seed payload.

use serde::{Deserialize, Serialize};

/// Owner tag applied to items created locally.
///
/// The tag is opaque and carried only because seed data supplies one; it is
/// never used for access control.
pub const DEFAULT_OWNER_TAG: u64 = 1;

/// A single todo entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Opaque owner tag carried from seed data.
    #[serde(rename = "userId")]
    pub owner_tag: u64,

    /// Unique identifier within the current list.
    pub id: u64,

    /// Display text. Never empty after trimming; emptiness is rejected at
    /// the mutation boundary, not here.
    pub title: String,

    /// Completion flag.
    pub completed: bool,
}

impl TodoItem {
    /// Create a fresh, uncompleted item with the default owner tag.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            owner_tag: DEFAULT_OWNER_TAG,
            id,
            title: title.into(),
            completed: false,
        }
    }
}
