//! Playground list: stable item identity and lifecycle.
//!
//! The list assigns every item an id at creation time. Ids are never
//! derived from list position and never reused after deletion, so a
//! persisted record always means the same item for the whole session.

use crate::session::EditSession;
use crate::store::PlaygroundStore;
use crate::target::InjectionTarget;

/// Ordered collection of edit sessions sharing one persistence store.
pub struct PlaygroundList<T, S> {
    sessions: Vec<EditSession<T, S>>,
    store: S,
    next_id: u64,
}

impl<T: InjectionTarget, S: PlaygroundStore + Clone> PlaygroundList<T, S> {
    /// Empty list.
    pub fn new(store: S) -> Self {
        Self {
            sessions: Vec::new(),
            store,
            next_id: 0,
        }
    }

    /// Rebuild the list from the persisted collection, creating one
    /// session per record. `make_target` supplies each item's preview
    /// surface (one iframe per item in the browser).
    pub fn restore(store: S, mut make_target: impl FnMut(u64) -> T) -> Self {
        let records = store.load();
        tracing::debug!(count = records.len(), "restoring playground items");

        let mut next_id = 0;
        let sessions = records
            .iter()
            .map(|record| {
                next_id = next_id.max(record.id + 1);
                EditSession::from_record(record, make_target(record.id), store.clone())
            })
            .collect();

        Self {
            sessions,
            store,
            next_id,
        }
    }

    /// Add a fresh item, returning its newly assigned id.
    pub fn add_item(&mut self, target: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.sessions
            .push(EditSession::new(id, target, self.store.clone()));
        tracing::debug!(id, "playground item added");
        id
    }

    /// Remove the item with the given id from the in-memory list.
    ///
    /// The persisted record for the id is deliberately left in the
    /// collection: deletion only forgets the live session. Returns false
    /// if no such item exists.
    pub fn delete_item(&mut self, id: u64) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id() != id);
        let removed = self.sessions.len() < before;
        if removed {
            tracing::debug!(id, "playground item deleted");
        }
        removed
    }

    pub fn get(&self, id: u64) -> Option<&EditSession<T, S>> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut EditSession<T, S>> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditSession<T, S>> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
