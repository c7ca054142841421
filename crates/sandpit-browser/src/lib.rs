//! Browser DOM layer for the sandpit live-code playground.
//!
//! This crate binds the pure logic in `sandpit-core` to real browser
//! capabilities. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: iframe-backed `InjectionTarget` (replace-not-append
//!   injection of html/css/js fragments)
//! - `storage`: localStorage-backed `PlaygroundStore`
//! - `debounce`: trailing-edge flush timers (gloo `Timeout`)
//! - `controller`: per-item glue between editor callbacks, timers, and
//!   the core list
//!
//! # Re-exports
//!
//! This crate re-exports `sandpit-core` for convenience, so consumers
//! only need to depend on `sandpit-browser`.

// Re-export core crate
pub use sandpit_core;
pub use sandpit_core::*;

pub mod controller;
pub mod debounce;
pub mod storage;
pub mod surface;

pub use controller::{BrowserList, BrowserSession, PlaygroundApp};
pub use debounce::DebouncedFlush;
pub use storage::{LocalStorageStore, STORAGE_KEY};
pub use surface::IframeSurface;
