//! Intents and notices - the presentation boundary
//!
//! The rendering layer dispatches intents to the controller and shows the
//! resulting notices (or error text) to the user.

use serde::{Deserialize, Serialize};
use todo_core::Filter;

/// A named user action dispatched to the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "intent")]
pub enum TodoIntent {
    /// Create a new item with the given title.
    Create { title: String },

    /// Delete the item with the given id.
    Delete { id: u64 },

    /// Flip the completion flag of the item with the given id.
    ToggleComplete { id: u64 },

    /// Open an edit session for the item with the given id.
    StartEdit { id: u64 },

    /// Replace the active edit session's draft text.
    UpdateDraft { text: String },

    /// Commit the active edit session.
    CommitEdit,

    /// Discard the active edit session.
    CancelEdit,

    /// Switch the display filter.
    SetFilter { filter: Filter },

    /// Advance the seed page cursor.
    NextPage,

    /// Move the seed page cursor back.
    PrevPage,
}

/// User-facing signal produced by a successful (or degraded but recovered)
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// An item was created.
    Created,

    /// An item's title was updated.
    Updated,

    /// An item was deleted.
    Deleted,

    /// The initial seed fetch failed; the list starts empty but the
    /// controller remains usable.
    SeedUnavailable,
}

impl Notice {
    /// Display text for the notice.
    pub fn message(&self) -> &str {
        match self {
            Self::Created => "Todo created successfully!",
            Self::Updated => "Todo updated successfully!",
            Self::Deleted => "Todo deleted successfully!",
            Self::SeedUnavailable => "Failed to fetch todos. Please try again later.",
        }
    }

    /// Whether the notice reports a degraded path rather than a success.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::SeedUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Created.message(), "Todo created successfully!");
        assert!(Notice::SeedUnavailable.is_warning());
        assert!(!Notice::Deleted.is_warning());
    }

    #[test]
    fn test_intent_serde_shape() {
        let intent = TodoIntent::Create {
            title: "Buy milk".into(),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["intent"], "create");
        assert_eq!(json["title"], "Buy milk");
    }
}
