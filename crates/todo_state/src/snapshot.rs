//! Read-only snapshot consumed by the presentation layer
//!
//! The snapshot is a clone of the controller's state at a point in time,
//! plus the derived views (filtered items, empty-state classification).

use serde::Serialize;
use todo_core::{Filter, TodoItem};

/// An in-progress title edit. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditSession {
    /// Id of the item being edited.
    pub target_id: u64,
    /// Working copy of the title, seeded from the item on open.
    pub draft_title: String,
}

/// Why the visible list is empty. Variants are mutually exclusive and
/// evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The underlying list has no items at all.
    NothingYet,

    /// Every item is completed and the Active filter hides them all.
    AllCompleted,

    /// No item is completed and the Completed filter hides them all.
    NoneCompleted,

    /// The filtered view is empty for any other reason.
    NoMatch,
}

impl EmptyState {
    /// Headline text for the empty view.
    pub fn title(&self) -> &str {
        match self {
            Self::NothingYet => "Your list is empty for this page!",
            Self::AllCompleted => "All tasks completed!",
            Self::NoneCompleted => "No completed tasks yet.",
            Self::NoMatch => "No todos match your filter.",
        }
    }

    /// Supporting text shown under the headline.
    pub fn message(&self) -> &str {
        match self {
            Self::NothingYet => "Add a new todo or try another page.",
            Self::AllCompleted => "Nice job! No active todos left on this page.",
            Self::NoneCompleted => "Keep working to see your finished todos here for this page.",
            Self::NoMatch => "Try a different filter or add more todos.",
        }
    }
}

/// Point-in-time view of the controller state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// The full list, display order (newest first).
    pub items: Vec<TodoItem>,
    /// Active display filter.
    pub filter: Filter,
    /// Seed page cursor, 1-based.
    pub page: u32,
    /// Whether the initial seed fetch is outstanding.
    pub is_loading: bool,
    /// Whether the last fetched seed page was short.
    pub is_last_page: bool,
    /// The active edit session, if any.
    pub edit: Option<EditSession>,
}

impl Snapshot {
    /// Items visible under the active filter, in display order.
    pub fn filtered_items(&self) -> Vec<&TodoItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Classify an empty visible list, or `None` when items are visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.items.is_empty() {
            return Some(EmptyState::NothingYet);
        }
        if !self.filtered_items().is_empty() {
            return None;
        }
        Some(match self.filter {
            Filter::Active => EmptyState::AllCompleted,
            Filter::Completed => EmptyState::NoneCompleted,
            Filter::All => EmptyState::NoMatch,
        })
    }
}
