//! localStorage persistence for the playground collection.
//!
//! The collection is stored as one JSON string under a single key, read
//! whole at session start and rewritten whole on every edit. Decoding is
//! delegated to the core helpers so malformed stored state degrades to an
//! empty list instead of an error.

use gloo_storage::{LocalStorage, Storage};
use sandpit_core::{
    PlaygroundRecord, PlaygroundStore, StoreError, decode_collection, encode_collection,
};

/// Storage key the persisted collection lives under.
pub const STORAGE_KEY: &str = "editCodeList";

/// Playground store backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    /// Store under the default [`STORAGE_KEY`].
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    /// Store under a custom key (isolated collections, tests).
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaygroundStore for LocalStorageStore {
    fn load(&self) -> Vec<PlaygroundRecord> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(Some(raw)) => decode_collection(&raw),
            _ => Vec::new(),
        }
    }

    fn save(&self, records: &[PlaygroundRecord]) -> Result<(), StoreError> {
        let raw = encode_collection(records)?;
        LocalStorage::raw()
            .set_item(&self.key, &raw)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }
}
