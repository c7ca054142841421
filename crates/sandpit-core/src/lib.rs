//! sandpit-core: pure playground logic without browser dependencies.
//!
//! This crate provides:
//! - `InjectionTarget` - port for the preview surface (replace-not-append
//!   injection of html/css/js fragments)
//! - `PlaygroundStore` - port for the persisted item collection
//! - `EditSession` - per-item buffers, module state machine, and flush
//!   orchestration
//! - `PlaygroundList` - stable identity and lifecycle for multiple items
//!
//! Timers live in the platform layer: the browser crate arms one debounce
//! timer per code kind and calls back into `EditSession::flush`.

pub mod list;
pub mod session;
pub mod store;
pub mod target;
pub mod types;

pub use list::PlaygroundList;
pub use session::EditSession;
pub use store::{
    MemoryStore, PlaygroundStore, StoreError, decode_collection, encode_collection, upsert_field,
};
pub use target::{InjectionTarget, guard_js};
pub use types::{
    CodeKind, DEFAULT_HTML_SKELETON, ModuleState, PlaygroundRecord, QUIET_WINDOW_MS, RecordField,
};
