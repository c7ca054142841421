//! Per-item edit session: buffers, module state machine, and flush
//! orchestration.
//!
//! An `EditSession` owns the three source buffers plus the title for one
//! playground item and routes every change two ways:
//!
//! - synchronously to the persistence store, on every edit, and
//! - to the preview surface, rate-limited by the platform's debounce
//!   timer calling [`EditSession::flush`] after the quiet window.
//!
//! The session itself holds no timers; the platform layer arms one timer
//! per code kind and resets it on each edit, so a flush always injects
//! the most recent buffer value.

use crate::store::{PlaygroundStore, upsert_field};
use crate::target::InjectionTarget;
use crate::types::{
    CodeKind, DEFAULT_HTML_SKELETON, ModuleState, PlaygroundRecord, RecordField,
};

/// Edit state for one playground item, generic over the preview surface
/// and the persistence store.
pub struct EditSession<T, S> {
    id: u64,
    title: String,
    buffers: [String; 3],
    modules: [ModuleState; 3],
    target: T,
    store: S,
}

impl<T: InjectionTarget, S: PlaygroundStore> EditSession<T, S> {
    /// Create a fresh item: skeleton HTML, empty CSS/JS, only the HTML
    /// panel shown.
    pub fn new(id: u64, target: T, store: S) -> Self {
        let mut modules = [ModuleState::Hidden; 3];
        modules[CodeKind::Html.index()] = ModuleState::VisibleClean;

        Self {
            id,
            title: String::new(),
            buffers: [
                DEFAULT_HTML_SKELETON.to_owned(),
                String::new(),
                String::new(),
            ],
            modules,
            target,
            store,
        }
    }

    /// Restore an item from its persisted record. Fields absent from the
    /// record fall back to the fresh-item defaults.
    pub fn from_record(record: &PlaygroundRecord, target: T, store: S) -> Self {
        let mut session = Self::new(record.id, target, store);
        if let Some(title) = &record.title {
            session.title = title.clone();
        }
        for kind in CodeKind::ALL {
            if let Some(code) = record.field(kind.into()) {
                session.buffers[kind.index()] = code.to_owned();
            }
        }
        session
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn buffer(&self, kind: CodeKind) -> &str {
        &self.buffers[kind.index()]
    }

    pub fn module_state(&self, kind: CodeKind) -> ModuleState {
        self.modules[kind.index()]
    }

    /// Whether any editor panel is shown. The chrome layer hides the
    /// preview wrapper entirely when this is false.
    pub fn any_module_visible(&self) -> bool {
        self.modules.iter().any(|m| m.is_visible())
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mount signal from the preview surface: perform the first injection
    /// of all three buffers, in natural order.
    ///
    /// Hidden modules are injected too - restored CSS/JS from a persisted
    /// record stays live in the preview even while its panel is hidden.
    pub fn on_surface_ready(&mut self) {
        tracing::debug!(id = self.id, "preview surface mounted, injecting buffers");
        for kind in CodeKind::ALL {
            self.target
                .create_or_replace(kind, &self.buffers[kind.index()]);
            if self.modules[kind.index()] == ModuleState::VisibleDirty {
                self.modules[kind.index()] = ModuleState::VisibleClean;
            }
        }
    }

    /// Replace the buffer for `kind` with the editor's new full text.
    ///
    /// Persists synchronously on every call; the preview update is left
    /// to the debounced [`flush`](Self::flush) the platform schedules.
    pub fn on_edit(&mut self, kind: CodeKind, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(id = self.id, %kind, len = text.len(), "buffer edit");
        self.persist(kind.into(), &text);
        self.buffers[kind.index()] = text;

        if self.modules[kind.index()].is_visible() {
            self.modules[kind.index()] = ModuleState::VisibleDirty;
        }
    }

    /// Update the title. Persisted synchronously; no preview effect.
    pub fn on_title_edit(&mut self, markup: impl Into<String>) {
        let markup = markup.into();
        self.persist(RecordField::Title, &markup);
        self.title = markup;
    }

    /// Debounced flush for one kind: inject the current buffer value.
    ///
    /// Skipped (returning false) while the surface is not mounted; the
    /// mount signal performs the first injection instead, so no retry is
    /// scheduled here.
    pub fn flush(&mut self, kind: CodeKind) -> bool {
        if !self.target.surface_ready() {
            tracing::trace!(id = self.id, %kind, "flush skipped, surface not ready");
            return false;
        }

        self.target
            .create_or_replace(kind, &self.buffers[kind.index()]);
        if self.modules[kind.index()] == ModuleState::VisibleDirty {
            self.modules[kind.index()] = ModuleState::VisibleClean;
        }
        true
    }

    /// Show the editor panel for `kind` and inject its current buffer
    /// immediately. A user-initiated reveal must not wait out the quiet
    /// window.
    pub fn add_module(&mut self, kind: CodeKind) {
        tracing::debug!(id = self.id, %kind, "module added");
        self.modules[kind.index()] = ModuleState::VisibleClean;
        if self.target.surface_ready() {
            self.target
                .create_or_replace(kind, &self.buffers[kind.index()]);
        }
    }

    /// Hide the editor panel for `kind`. The previously injected node is
    /// left live in the preview; hiding only unmounts the panel.
    pub fn remove_module(&mut self, kind: CodeKind) {
        tracing::debug!(id = self.id, %kind, "module hidden");
        self.modules[kind.index()] = ModuleState::Hidden;
    }

    /// Load-update-save of the whole collection, keyed by this item's id.
    /// Write failures (e.g. storage quota) are logged and dropped.
    fn persist(&self, field: RecordField, value: &str) {
        let mut records = self.store.load();
        upsert_field(&mut records, self.id, field, value);
        if let Err(err) = self.store.save(&records) {
            tracing::warn!(id = self.id, %err, "failed to persist playground collection");
        }
    }
}
