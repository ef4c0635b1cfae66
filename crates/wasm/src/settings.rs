//! Host-injected page settings.
//!
//! The server-side platform may define a global settings object alongside the
//! widget markup (API root, request nonce, signed-in user). Widgets read it
//! through [`RuntimeSettings`] instead of reaching for their own globals.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the global slot the host page may define.
pub const SETTINGS_GLOBAL: &str = "inlaySettings";

/// Per-page settings injected by the server-side platform.
///
/// Every field is optional; a page that defines no settings object gets the
/// defaults, never an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeSettings {
    /// API root URL for widget backends.
    #[serde(default)]
    pub root: Option<String>,
    /// Request nonce issued by the host platform.
    #[serde(default)]
    pub nonce: Option<String>,
    /// Identifier of the signed-in user, if any.
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl RuntimeSettings {
    /// Reads settings from the page's global slot.
    pub fn from_global() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(SETTINGS_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(value)
    }

    /// Parses a settings value, tolerating absence and malformed shapes.
    pub fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(value).unwrap_or_default()
    }
}
