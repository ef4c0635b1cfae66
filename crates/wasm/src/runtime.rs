//! The host-visible registry slot and the page-load initialization trigger.
//!
//! Separate initialization units (the page's own bundle, late-loaded feature
//! scripts) all register into one thread-local registry before [`boot`] runs
//! the first scan. Registration after that scan is unsupported; such entries
//! are only picked up by an explicit [`mount_widgets`] call.

use crate::bridge::JsComponent;
use crate::dom::DocumentScan;
use crate::settings::RuntimeSettings;
use inlay_core::{Component, ComponentRegistry, MountReport, Mounter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document};

thread_local! {
    static REGISTRY: RefCell<ComponentRegistry> = RefCell::new(ComponentRegistry::new());
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Registers a JavaScript widget implementation under `name`.
///
/// Last registration for a name wins. Must happen before the boot scan.
#[wasm_bindgen(js_name = registerWidget)]
pub fn register_widget(name: String, render: js_sys::Function) {
    register_component(name, Rc::new(JsComponent::new(render)));
}

/// Registers a Rust-side component; same phase contract as
/// [`register_widget`].
pub fn register_component(name: String, component: Rc<dyn Component>) {
    REGISTRY.with(|registry| registry.borrow_mut().register(name, component));
}

/// Runs the initial widget scan exactly once per page load.
///
/// If the document is still parsing, the scan is deferred to the
/// `DOMContentLoaded` signal; otherwise it runs immediately. Repeat calls,
/// and a `DOMContentLoaded` arriving after an immediate run, are no-ops.
#[wasm_bindgen]
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("no document available, boot skipped");
        return;
    };
    boot_with_document(&document);
}

/// [`boot`] with an explicit document.
pub fn boot_with_document(document: &Document) {
    let settings = RuntimeSettings::from_global();
    log::debug!("boot: readyState={} {settings:?}", document.ready_state());
    boot_with_ready_state(document, &document.ready_state());
}

/// [`boot`] against an explicit readiness value.
///
/// The public entry points pass the document's own `readyState`; tests use
/// this seam to drive the deferred branch after the real document has long
/// finished parsing.
pub fn boot_with_ready_state(document: &Document, ready_state: &str) {
    if ready_state == "loading" {
        let deferred = document.clone();
        let listener = Closure::once_into_js(move || run_boot_scan(&deferred));
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let attached = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            listener.unchecked_ref(),
            &options,
        );
        if attached.is_err() {
            // Listener rejected; scan now rather than never.
            run_boot_scan(document);
        }
    } else {
        run_boot_scan(document);
    }
}

/// Scans the current document and mounts every pending placeholder.
///
/// Safe to call repeatedly: the rendered marker keeps already-mounted
/// placeholders untouched. This is the host's explicit re-scan hook for
/// content inserted after page load; the runtime never re-scans on its own.
#[wasm_bindgen(js_name = mountWidgets)]
pub fn mount_widgets() {
    let Some(scan) = DocumentScan::from_window() else {
        log::error!("no document available, cannot mount widgets");
        return;
    };
    run_scan(&scan);
}

fn run_boot_scan(document: &Document) {
    if BOOTED.replace(true) {
        return;
    }
    run_scan(&DocumentScan::new(document.clone()));
}

fn run_scan(scan: &DocumentScan) -> MountReport {
    let mounter = REGISTRY.with(|registry| Mounter::new(registry.borrow().clone()));
    let report = mounter.mount_all(scan);
    if report.has_failures() {
        log::warn!(
            "scan finished: {} mounted, {} skipped, {} failed",
            report.mounted(),
            report.skipped(),
            report.failed()
        );
    } else {
        log::debug!(
            "scan finished: {} mounted, {} skipped",
            report.mounted(),
            report.skipped()
        );
    }
    report
}
