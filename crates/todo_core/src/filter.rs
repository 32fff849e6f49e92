//! Filter - display-only view predicate
//!
//! A filter selects a subset of the list for presentation and never mutates
//! stored data.

use serde::{Deserialize, Serialize};

use crate::item::TodoItem;

/// View predicate over the todo list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Show every item.
    #[default]
    All,

    /// Show items not yet completed.
    Active,

    /// Show completed items.
    Completed,
}

impl Filter {
    /// Whether the given item is visible under this filter.
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Filter name as a simple string for display.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_matches() {
        let mut item = TodoItem::new(1, "task");
        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }
}
