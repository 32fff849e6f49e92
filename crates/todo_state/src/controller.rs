//! TodoListController - owns the list and mediates its transitions
//!
//! The controller sits between the snapshot store and seed fetcher on the
//! input side and the rendering layer on the output side. Every mutation
//! overwrites the whole persisted snapshot (last-write-wins); filters and
//! the page cursor are view state and never persisted.

use seed_client::SeedFetcher;
use todo_core::{Filter, TodoItem};
use todo_storage::SnapshotStore;

use crate::error::{ControllerError, Result};
use crate::id::{IdGenerator, SequentialIds};
use crate::intent::{Notice, TodoIntent};
use crate::snapshot::{EditSession, Snapshot};

/// Number of seed items requested per page.
pub const PAGE_SIZE: usize = 5;

/// Storage key holding the persisted snapshot.
pub const STORAGE_KEY: &str = "todos";

/// Event-driven state manager for the todo list.
///
/// Single-threaded by construction: transitions take `&mut self`, so no
/// intent can interleave with a running `initialize()`. The `is_loading`
/// guard covers the remaining window: an `initialize()` future abandoned at
/// its await point (a hung or cancelled seed fetch) leaves the flag set, and
/// mutating intents keep failing with [`ControllerError::Loading`] rather
/// than racing a seed adoption that never arrived.
pub struct TodoListController<S, F> {
    store: S,
    fetcher: F,
    ids: Box<dyn IdGenerator>,
    items: Vec<TodoItem>,
    filter: Filter,
    page: u32,
    is_loading: bool,
    is_last_page: bool,
    adopted_persisted: bool,
    edit: Option<EditSession>,
}

impl<S: SnapshotStore, F: SeedFetcher> TodoListController<S, F> {
    /// Create a controller with the default monotonic id generator.
    pub fn new(store: S, fetcher: F) -> Self {
        Self::with_ids(store, fetcher, Box::new(SequentialIds::new()))
    }

    /// Create a controller with an injected id generator.
    pub fn with_ids(store: S, fetcher: F, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            fetcher,
            ids,
            items: Vec::new(),
            filter: Filter::All,
            page: 1,
            is_loading: false,
            is_last_page: false,
            adopted_persisted: false,
            edit: None,
        }
    }

    /// Load the persisted snapshot, or seed one page from the remote
    /// collection if nothing is stored.
    ///
    /// Never fails: malformed or unreadable stored data is treated as
    /// absent, and a failed seed fetch leaves an empty but usable list and
    /// returns [`Notice::SeedUnavailable`].
    ///
    /// Dropping the returned future before it resolves leaves the loading
    /// guard engaged; mutating intents then fail with
    /// [`ControllerError::Loading`] and there is no automatic retry.
    pub async fn initialize(&mut self) -> Result<Option<Notice>> {
        self.is_loading = true;
        let outcome = self.load_initial().await;
        self.is_loading = false;
        outcome
    }

    async fn load_initial(&mut self) -> Result<Option<Notice>> {
        match self.store.get(STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TodoItem>>(&raw) {
                Ok(items) => {
                    tracing::info!(count = items.len(), "adopted persisted snapshot");
                    self.items = items;
                    self.adopted_persisted = true;
                    return Ok(None);
                }
                Err(err) => {
                    tracing::warn!(%err, "malformed persisted snapshot, treating as absent");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "snapshot read failed, treating as absent");
            }
        }

        match self.fetcher.fetch_page(self.page, PAGE_SIZE).await {
            Ok(items) => {
                self.is_last_page = items.len() < PAGE_SIZE;
                tracing::info!(
                    count = items.len(),
                    page = self.page,
                    is_last_page = self.is_last_page,
                    "adopted seed page"
                );
                self.items = items;
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(%err, page = self.page, "seed fetch failed");
                Ok(Some(Notice::SeedUnavailable))
            }
        }
    }

    /// Dispatch a presentation-layer intent.
    pub async fn dispatch(&mut self, intent: TodoIntent) -> Result<Option<Notice>> {
        match intent {
            TodoIntent::Create { title } => self.create(&title).await,
            TodoIntent::Delete { id } => self.delete(id).await,
            TodoIntent::ToggleComplete { id } => self.toggle_complete(id).await,
            TodoIntent::StartEdit { id } => {
                self.start_edit(id);
                Ok(None)
            }
            TodoIntent::UpdateDraft { text } => {
                self.update_draft(text);
                Ok(None)
            }
            TodoIntent::CommitEdit => self.commit_edit().await,
            TodoIntent::CancelEdit => {
                self.cancel_edit();
                Ok(None)
            }
            TodoIntent::SetFilter { filter } => {
                self.set_filter(filter);
                Ok(None)
            }
            TodoIntent::NextPage => {
                self.next_page();
                Ok(None)
            }
            TodoIntent::PrevPage => {
                self.prev_page();
                Ok(None)
            }
        }
    }

    /// Create a new item at the front of the list.
    pub async fn create(&mut self, title: &str) -> Result<Option<Notice>> {
        self.ensure_ready()?;
        if title.trim().is_empty() {
            return Err(ControllerError::EmptyTitle);
        }

        let id = self.fresh_id();
        self.items.insert(0, TodoItem::new(id, title));
        self.persist().await?;
        Ok(Some(Notice::Created))
    }

    /// Remove the item with the given id. Unknown ids are a no-op, not an
    /// error.
    pub async fn delete(&mut self, id: u64) -> Result<Option<Notice>> {
        self.ensure_ready()?;
        self.items.retain(|item| item.id != id);
        self.persist().await?;
        Ok(Some(Notice::Deleted))
    }

    /// Flip the completion flag of the item with the given id. Unknown ids
    /// are a no-op.
    pub async fn toggle_complete(&mut self, id: u64) -> Result<Option<Notice>> {
        self.ensure_ready()?;
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
        }
        self.persist().await?;
        Ok(None)
    }

    /// Open an edit session for the given item, replacing any prior
    /// session. Silent no-op for unknown ids.
    pub fn start_edit(&mut self, id: u64) {
        if let Some(item) = self.items.iter().find(|item| item.id == id) {
            self.edit = Some(EditSession {
                target_id: id,
                draft_title: item.title.clone(),
            });
        }
    }

    /// Replace the active session's draft text. No-op without a session.
    pub fn update_draft(&mut self, text: String) {
        if let Some(session) = self.edit.as_mut() {
            session.draft_title = text;
        }
    }

    /// Write the draft into the target item and close the session.
    ///
    /// A blank draft is rejected and the session stays open. Without a
    /// session this is a no-op.
    pub async fn commit_edit(&mut self) -> Result<Option<Notice>> {
        self.ensure_ready()?;
        let Some(session) = self.edit.as_ref() else {
            return Ok(None);
        };
        if session.draft_title.trim().is_empty() {
            return Err(ControllerError::EmptyTitle);
        }

        let target_id = session.target_id;
        let draft = session.draft_title.clone();
        if let Some(item) = self.items.iter_mut().find(|item| item.id == target_id) {
            item.title = draft;
        }
        self.edit = None;
        self.persist().await?;
        Ok(Some(Notice::Updated))
    }

    /// Close the edit session without touching the list.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Switch the display filter. Pure view state, never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Advance the seed page cursor.
    ///
    /// Meaningful only for the first-run seeding flow: disabled once the
    /// last page was seen or a persisted snapshot was adopted. Affects
    /// which page a from-scratch initialization fetches; never re-slices
    /// the loaded list.
    pub fn next_page(&mut self) {
        if !self.is_last_page && !self.adopted_persisted {
            self.page += 1;
        }
    }

    /// Move the seed page cursor back. No-op at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 && !self.adopted_persisted {
            self.page -= 1;
        }
    }

    /// Point-in-time view for the rendering layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            filter: self.filter,
            page: self.page,
            is_loading: self.is_loading,
            is_last_page: self.is_last_page,
            edit: self.edit.clone(),
        }
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_loading {
            return Err(ControllerError::Loading);
        }
        Ok(())
    }

    fn fresh_id(&mut self) -> u64 {
        // Re-draw until the candidate misses every current id; keeps the
        // uniqueness invariant independent of the generator.
        loop {
            let id = self.ids.next_id();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }

    async fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.store.set(STORAGE_KEY, &raw).await?;
        tracing::debug!(count = self.items.len(), "snapshot persisted");
        Ok(())
    }
}
