//! Injection-target port: the capability a preview surface provides.
//!
//! The browser implementation writes into an iframe's document; tests use
//! a headless double with a per-kind map standing in for the DOM.

use crate::types::CodeKind;

/// Rendering surface for one playground item.
///
/// Injection is replace-not-append: at most one injected node per code
/// kind exists in the surface at any time, and re-injecting a kind fully
/// replaces its previous fragment without disturbing the other kinds.
pub trait InjectionTarget {
    /// Whether the underlying document is mounted and writable. Injection
    /// attempted before this reports true is skipped; the mount signal is
    /// expected to trigger the first injection.
    fn surface_ready(&self) -> bool;

    /// Replace (or create) the injected node for `kind` with `code`.
    ///
    /// `code` is interpreted as markup/source, not escaped. Calling twice
    /// with identical `code` leaves the same final state as calling once.
    fn create_or_replace(&self, kind: CodeKind, code: &str);
}

/// Wrap user JS so a runtime error cannot escape the injected script.
///
/// A throw inside the guard is swallowed silently; other injected modules
/// and the host page keep running.
pub fn guard_js(code: &str) -> String {
    format!("try{{{code}}}catch(e){{}}")
}
