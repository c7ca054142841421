//! Browser-side playground controller.
//!
//! Glues the core `PlaygroundList` to the browser: editor-widget change
//! callbacks, one debounce timer per (item, code kind), and the iframe
//! mount hook that performs each item's first injection.
//!
//! Everything runs on the single browser thread; the shared list lives in
//! an `Rc<RefCell<..>>` that timer and load-event closures re-borrow when
//! they fire.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use sandpit_core::{CodeKind, EditSession, InjectionTarget, PlaygroundList};

use crate::debounce::DebouncedFlush;
use crate::storage::LocalStorageStore;
use crate::surface::IframeSurface;

pub type BrowserSession = EditSession<IframeSurface, LocalStorageStore>;
pub type BrowserList = PlaygroundList<IframeSurface, LocalStorageStore>;

/// All live playground items plus their timers and mount listeners.
pub struct PlaygroundApp {
    list: Rc<RefCell<BrowserList>>,
    timers: RefCell<HashMap<(u64, CodeKind), DebouncedFlush>>,
    mounts: RefCell<HashMap<u64, EventListener>>,
}

impl PlaygroundApp {
    /// Empty playground.
    pub fn new(store: LocalStorageStore) -> Self {
        Self {
            list: Rc::new(RefCell::new(PlaygroundList::new(store))),
            timers: RefCell::new(HashMap::new()),
            mounts: RefCell::new(HashMap::new()),
        }
    }

    /// Rebuild the playground from persisted state. `make_iframe`
    /// supplies the (already attached) iframe element for each restored
    /// item id.
    pub fn restore(
        store: LocalStorageStore,
        mut make_iframe: impl FnMut(u64) -> web_sys::HtmlIFrameElement,
    ) -> Self {
        let list = PlaygroundList::restore(store, |id| IframeSurface::new(make_iframe(id)));
        let ids: Vec<u64> = list.iter().map(|s| s.id()).collect();

        let app = Self {
            list: Rc::new(RefCell::new(list)),
            timers: RefCell::new(HashMap::new()),
            mounts: RefCell::new(HashMap::new()),
        };
        for id in ids {
            app.hook_mount(id);
        }
        app
    }

    /// Add a fresh item rendering into `iframe`, returning its id.
    pub fn add_item(&self, iframe: web_sys::HtmlIFrameElement) -> u64 {
        let id = self.list.borrow_mut().add_item(IframeSurface::new(iframe));
        self.hook_mount(id);
        id
    }

    /// Delete an item: the live session, its timers, and its mount
    /// listener go away. The persisted record stays (see the core list).
    pub fn delete_item(&self, id: u64) -> bool {
        self.timers.borrow_mut().retain(|(item, _), _| *item != id);
        self.mounts.borrow_mut().remove(&id);
        self.list.borrow_mut().delete_item(id)
    }

    /// Editor change callback: persist now, reset this kind's timer so
    /// the preview updates once the quiet window elapses.
    pub fn on_editor_change(&self, id: u64, kind: CodeKind, text: impl Into<String>) {
        {
            let mut list = self.list.borrow_mut();
            let Some(session) = list.get_mut(id) else {
                tracing::warn!(id, %kind, "edit for unknown playground item");
                return;
            };
            session.on_edit(kind, text);
        }

        let list = Rc::clone(&self.list);
        self.timers
            .borrow_mut()
            .entry((id, kind))
            .or_default()
            .schedule(move || {
                if let Some(session) = list.borrow_mut().get_mut(id) {
                    session.flush(kind);
                }
            });
    }

    /// Title input callback; persisted, never previewed.
    pub fn on_title_input(&self, id: u64, markup: impl Into<String>) {
        if let Some(session) = self.list.borrow_mut().get_mut(id) {
            session.on_title_edit(markup);
        }
    }

    /// Show a module's panel and inject its buffer immediately.
    pub fn add_module(&self, id: u64, kind: CodeKind) {
        if let Some(session) = self.list.borrow_mut().get_mut(id) {
            session.add_module(kind);
        }
    }

    /// Hide a module's panel; its injected content stays live.
    pub fn remove_module(&self, id: u64, kind: CodeKind) {
        if let Some(session) = self.list.borrow_mut().get_mut(id) {
            session.remove_module(kind);
        }
    }

    /// Whether the item's preview wrapper should be shown at all.
    pub fn any_module_visible(&self, id: u64) -> bool {
        self.list
            .borrow()
            .get(id)
            .is_some_and(|s| s.any_module_visible())
    }

    /// Shared handle to the underlying list, for chrome that needs direct
    /// session access (rendering editor panels, titles).
    pub fn list(&self) -> Rc<RefCell<BrowserList>> {
        Rc::clone(&self.list)
    }

    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }

    /// Inject on iframe load, and right away if the blank document is
    /// already usable (it usually is for a src-less iframe).
    fn hook_mount(&self, id: u64) {
        let (iframe, ready) = {
            let list = self.list.borrow();
            let Some(session) = list.get(id) else {
                return;
            };
            (
                session.target().iframe().clone(),
                session.target().surface_ready(),
            )
        };

        let handle = Rc::clone(&self.list);
        let target: &web_sys::EventTarget = iframe.as_ref();
        let listener = EventListener::new(target, "load", move |_| {
            if let Some(session) = handle.borrow_mut().get_mut(id) {
                session.on_surface_ready();
            }
        });
        self.mounts.borrow_mut().insert(id, listener);

        if ready {
            if let Some(session) = self.list.borrow_mut().get_mut(id) {
                session.on_surface_ready();
            }
        }
    }
}
