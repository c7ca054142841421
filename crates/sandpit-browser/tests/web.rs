//! WASM browser tests for sandpit-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use sandpit_browser::{DebouncedFlush, IframeSurface, LocalStorageStore, PlaygroundApp};
use sandpit_core::{CodeKind, InjectionTarget, PlaygroundStore, upsert_field};

fn attach_iframe() -> web_sys::HtmlIFrameElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let iframe: web_sys::HtmlIFrameElement = document
        .create_element("iframe")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&iframe).unwrap();
    iframe
}

fn make_surface() -> IframeSurface {
    IframeSurface::new(attach_iframe())
}

fn injected_nodes(surface: &IframeSurface, kind: CodeKind) -> web_sys::NodeList {
    let selector = format!("#{}", kind.injected_node_id());
    surface
        .iframe()
        .content_document()
        .unwrap()
        .query_selector_all(&selector)
        .unwrap()
}

// === Injection protocol tests ===

#[wasm_bindgen_test]
fn test_surface_ready_once_attached() {
    let surface = make_surface();
    assert!(surface.surface_ready());
}

#[wasm_bindgen_test]
fn test_replace_not_append() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Html, "<p>a</p>");
    surface.create_or_replace(CodeKind::Html, "<p>b</p>");

    let nodes = injected_nodes(&surface, CodeKind::Html);
    assert_eq!(nodes.length(), 1);

    let node: web_sys::Element = nodes.get(0).unwrap().dyn_into().unwrap();
    assert_eq!(node.inner_html(), "<p>b</p>");
}

#[wasm_bindgen_test]
fn test_injection_is_idempotent() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Css, "p { color: red }");
    surface.create_or_replace(CodeKind::Css, "p { color: red }");

    assert_eq!(injected_nodes(&surface, CodeKind::Css).length(), 1);
}

#[wasm_bindgen_test]
fn test_css_lands_in_head_html_in_body() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Css, "p {}");
    surface.create_or_replace(CodeKind::Html, "<p>x</p>");

    let doc = surface.iframe().content_document().unwrap();
    let css = doc
        .get_element_by_id(CodeKind::Css.injected_node_id())
        .unwrap();
    let html = doc
        .get_element_by_id(CodeKind::Html.injected_node_id())
        .unwrap();

    assert_eq!(css.parent_node().unwrap().node_name(), "HEAD");
    assert_eq!(html.parent_node().unwrap().node_name(), "BODY");
}

#[wasm_bindgen_test]
fn test_injected_js_executes() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Js, "document.title = 'sandpit-ran'");

    let doc = surface.iframe().content_document().unwrap();
    assert_eq!(doc.title(), "sandpit-ran");
}

#[wasm_bindgen_test]
fn test_throwing_js_does_not_block_later_injection() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Js, "throw new Error('boom')");
    surface.create_or_replace(CodeKind::Css, "em { color: teal }");
    surface.create_or_replace(CodeKind::Html, "<em>still here</em>");

    assert_eq!(injected_nodes(&surface, CodeKind::Css).length(), 1);
    assert_eq!(injected_nodes(&surface, CodeKind::Html).length(), 1);
}

#[wasm_bindgen_test]
fn test_kinds_do_not_disturb_each_other() {
    let surface = make_surface();
    surface.create_or_replace(CodeKind::Html, "<p>keep</p>");
    surface.create_or_replace(CodeKind::Css, "p { margin: 0 }");
    surface.create_or_replace(CodeKind::Css, "p { margin: 1px }");

    let html: web_sys::Element = injected_nodes(&surface, CodeKind::Html)
        .get(0)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(html.inner_html(), "<p>keep</p>");
}

// === localStorage store tests ===

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let store = LocalStorageStore::with_key("sandpit-test-roundtrip");

    let mut records = Vec::new();
    upsert_field(&mut records, 1, CodeKind::Html.into(), "A");
    upsert_field(&mut records, 1, CodeKind::Css.into(), "B");
    store.save(&records).unwrap();

    let back = store.load();
    assert_eq!(back, records);
}

#[wasm_bindgen_test]
fn test_local_storage_malformed_state_loads_empty() {
    let key = "sandpit-test-malformed";
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .set_item(key, "{broken")
        .unwrap();

    let store = LocalStorageStore::with_key(key);
    assert!(store.load().is_empty());
}

#[wasm_bindgen_test]
fn test_local_storage_missing_key_loads_empty() {
    let store = LocalStorageStore::with_key("sandpit-test-never-written");
    assert!(store.load().is_empty());
}

// === Debounce tests ===

#[wasm_bindgen_test]
async fn test_debounce_fires_trailing_only() {
    let fired = Rc::new(Cell::new(0u32));
    let mut debounce = DebouncedFlush::with_quiet_window(50);

    for _ in 0..3 {
        let fired = Rc::clone(&fired);
        debounce.schedule(move || fired.set(fired.get() + 1));
    }

    assert_eq!(fired.get(), 0); // no leading call
    TimeoutFuture::new(150).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn test_debounce_cancel() {
    let fired = Rc::new(Cell::new(0u32));
    let mut debounce = DebouncedFlush::with_quiet_window(50);

    {
        let fired = Rc::clone(&fired);
        debounce.schedule(move || fired.set(fired.get() + 1));
    }
    debounce.cancel();

    TimeoutFuture::new(150).await;
    assert_eq!(fired.get(), 0);
}

// === End-to-end controller tests ===

#[wasm_bindgen_test]
async fn test_edits_coalesce_into_one_preview_update() {
    let app = PlaygroundApp::new(LocalStorageStore::with_key("sandpit-test-coalesce"));
    let iframe = attach_iframe();
    let id = app.add_item(iframe.clone());

    app.on_editor_change(id, CodeKind::Html, "<p>1</p>");
    app.on_editor_change(id, CodeKind::Html, "<p>12</p>");
    app.on_editor_change(id, CodeKind::Html, "<p>123</p>");

    TimeoutFuture::new(800).await;

    let node = iframe
        .content_document()
        .unwrap()
        .get_element_by_id(CodeKind::Html.injected_node_id())
        .unwrap();
    assert_eq!(node.inner_html(), "<p>123</p>");
}

#[wasm_bindgen_test]
fn test_new_item_persists_and_deletion_keeps_record() {
    let store = LocalStorageStore::with_key("sandpit-test-delete");
    let app = PlaygroundApp::new(store.clone());
    let id = app.add_item(attach_iframe());

    app.on_editor_change(id, CodeKind::Js, "let a = 1");
    assert!(app.delete_item(id));
    assert!(app.is_empty());

    // Deletion forgets the live session but not the stored record.
    let records = store.load();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].js.as_deref(), Some("let a = 1"));
}
