// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::debug;

/// Retrieval status of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing has been requested yet, or the list was cleared locally.
    #[default]
    Idle,
    /// A list request is in flight.
    Loading,
    /// The snapshot reflects the last successful fetch.
    Ready,
    /// The last fetch failed and the snapshot was emptied.
    Failed,
}

/// A snapshot of one remote collection plus its retrieval status.
///
/// The list is only ever replaced wholesale by the result of a fetch. There
/// is no way to insert, patch or remove a single element; after a mutation
/// the owner must refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStore<T> {
    /// Human-readable collection name, used in logs.
    name: &'static str,
    /// The last fetched list, in server order.
    items: Vec<T>,
    /// Current retrieval status.
    status: LoadStatus,
    /// Message recorded by the last failed fetch.
    error: Option<String>,
}

impl<T> CollectionStore<T> {
    /// Creates an empty, idle store.
    ///
    /// # Arguments
    ///
    /// * `name` - Collection name used in diagnostics (e.g. `"departments"`)
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Vec::new(),
            status: LoadStatus::Idle,
            error: None,
        }
    }

    /// Returns the collection name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current snapshot in server order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.items
    }

    /// Returns the current retrieval status.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.status
    }

    /// Returns the message recorded by the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Marks a fetch as started.
    ///
    /// The previous snapshot stays visible until the fetch resolves.
    pub fn begin_refresh(&mut self) {
        debug!(collection = self.name, "Refresh started");
        self.status = LoadStatus::Loading;
    }

    /// Replaces the snapshot with a successful fetch result.
    pub fn complete_refresh(&mut self, items: Vec<T>) {
        debug!(collection = self.name, count = items.len(), "Refresh completed");
        self.items = items;
        self.status = LoadStatus::Ready;
        self.error = None;
    }

    /// Records a failed fetch.
    ///
    /// The snapshot is emptied rather than left stale.
    pub fn fail_refresh(&mut self, message: String) {
        debug!(collection = self.name, %message, "Refresh failed");
        self.items.clear();
        self.status = LoadStatus::Failed;
        self.error = Some(message);
    }

    /// Empties the snapshot without fetching.
    ///
    /// Used when a query is refused locally (e.g. an invalid filter).
    pub fn clear(&mut self) {
        self.items.clear();
        self.status = LoadStatus::Idle;
        self.error = None;
    }
}

impl<T: helpdesk_domain::Identified> CollectionStore<T> {
    /// Looks up an entity in the current snapshot.
    #[must_use]
    pub fn find(&self, id: &helpdesk_domain::EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}
