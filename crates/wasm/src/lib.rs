#![deny(missing_docs)]
//! Browser runtime for the inlay widget mounter.
//!
//! Binds the host-agnostic `inlay-core` mounting logic to the live document:
//! a web-sys DOM adapter, a bridge that lets pages register widgets as plain
//! JavaScript functions, the host-visible registry slot, and the page-load
//! initialization trigger.

/// JavaScript-function component bridge.
pub mod bridge;
/// web-sys implementations of the core DOM traits.
pub mod dom;
/// Console-backed sink for core diagnostics.
pub mod logger;
/// Registry slot and initialization trigger.
pub mod runtime;
/// Host-injected page settings.
pub mod settings;

pub use bridge::JsComponent;
pub use dom::{DocumentScan, ElementPoint};
pub use runtime::{boot, mount_widgets, register_component, register_widget};
pub use settings::RuntimeSettings;

use wasm_bindgen::prelude::*;

/// Module initialization: install the panic hook and console logger so
/// widget failures are diagnosable from the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();
}
