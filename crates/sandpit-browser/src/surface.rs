//! Iframe preview surface.
//!
//! Implements the core `InjectionTarget` port against one iframe's
//! document. Each code kind owns a single reserved element id inside the
//! iframe; injection removes the previous node (if any) and appends a
//! fresh one, so re-injecting replaces and never duplicates.

use sandpit_core::{CodeKind, InjectionTarget, guard_js};
use wasm_bindgen::JsCast;

/// Preview surface backed by one iframe element, 1:1 with a playground
/// item.
pub struct IframeSurface {
    iframe: web_sys::HtmlIFrameElement,
}

impl IframeSurface {
    pub fn new(iframe: web_sys::HtmlIFrameElement) -> Self {
        Self { iframe }
    }

    /// Downcast a generic element, if it is an iframe.
    pub fn from_element(element: web_sys::Element) -> Option<Self> {
        element
            .dyn_into::<web_sys::HtmlIFrameElement>()
            .ok()
            .map(Self::new)
    }

    pub fn iframe(&self) -> &web_sys::HtmlIFrameElement {
        &self.iframe
    }

    fn document(&self) -> Option<web_sys::Document> {
        self.iframe.content_document()
    }
}

impl InjectionTarget for IframeSurface {
    fn surface_ready(&self) -> bool {
        // The document exists once the iframe is attached and its (blank)
        // content has loaded; injection needs a body to append into.
        self.document().and_then(|d| d.body()).is_some()
    }

    fn create_or_replace(&self, kind: CodeKind, code: &str) {
        let Some(document) = self.document() else {
            tracing::trace!(%kind, "injection skipped, no content document");
            return;
        };

        if let Some(previous) = document.get_element_by_id(kind.injected_node_id()) {
            previous.remove();
        }

        tracing::trace!(%kind, len = code.len(), "injecting fragment");
        match kind {
            CodeKind::Html => {
                let Ok(node) = document.create_element("div") else {
                    return;
                };
                node.set_id(kind.injected_node_id());
                node.set_inner_html(code);
                if let Some(body) = document.body() {
                    let _ = body.append_child(&node);
                }
            }
            CodeKind::Css => {
                let Ok(node) = document.create_element("style") else {
                    return;
                };
                node.set_id(kind.injected_node_id());
                node.set_text_content(Some(code));
                if let Some(head) = document.head() {
                    let _ = head.append_child(&node);
                }
            }
            CodeKind::Js => {
                let Ok(node) = document.create_element("script") else {
                    return;
                };
                node.set_id(kind.injected_node_id());
                // The guard swallows runtime throws from user code; the
                // script executes synchronously on append.
                node.set_text_content(Some(&guard_js(code)));
                if let Some(body) = document.body() {
                    let _ = body.append_child(&node);
                }
            }
        }
    }
}
