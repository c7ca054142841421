//! Persistence port and collection helpers.
//!
//! The backing store is a key-value string store (localStorage in the
//! browser). The whole collection is read at session start and rewritten
//! on every edit, after an in-place update-or-append of the changed
//! record's field.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::types::{PlaygroundRecord, RecordField};

/// Errors from persisting the playground collection.
///
/// Read-side failures are not errors: missing or malformed stored state
/// decodes to the empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize playground records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backing store rejected the write: {0}")]
    Backend(String),
}

/// Persistence port for the playground collection.
///
/// Injected into sessions and lists so tests can use an in-memory fake
/// instead of ambient browser storage.
pub trait PlaygroundStore {
    /// Load the persisted collection. Missing or unreadable state yields
    /// an empty list.
    fn load(&self) -> Vec<PlaygroundRecord>;

    /// Persist the whole collection.
    fn save(&self, records: &[PlaygroundRecord]) -> Result<(), StoreError>;
}

/// Decode a serialized collection, treating malformed input as empty.
pub fn decode_collection(raw: &str) -> Vec<PlaygroundRecord> {
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(%err, "stored playground collection is unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Serialize a collection for the backing string store.
pub fn encode_collection(records: &[PlaygroundRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(records)?)
}

/// Update-or-append a single field of the record with the given id.
///
/// If a record with `id` exists the field is mutated in place; otherwise
/// a new record carrying only that field is appended.
pub fn upsert_field(
    records: &mut Vec<PlaygroundRecord>,
    id: u64,
    field: RecordField,
    value: &str,
) {
    if let Some(record) = records.iter_mut().find(|r| r.id == id) {
        record.set_field(field, value);
    } else {
        let mut record = PlaygroundRecord::new(id);
        record.set_field(field, value);
        records.push(record);
    }
}

/// Shared in-memory store.
///
/// Clone handles share the same underlying collection, so a test can keep
/// one handle and hand another to the session under test.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<Vec<PlaygroundRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current collection.
    pub fn records(&self) -> Vec<PlaygroundRecord> {
        self.records.borrow().clone()
    }
}

impl PlaygroundStore for MemoryStore {
    fn load(&self) -> Vec<PlaygroundRecord> {
        self.records.borrow().clone()
    }

    fn save(&self, records: &[PlaygroundRecord]) -> Result<(), StoreError> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
