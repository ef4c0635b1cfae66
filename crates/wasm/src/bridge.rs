//! Bridges JavaScript-side widget implementations into the core component
//! model.

use inlay_core::{Component, Html, Props, RenderError};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// A widget implemented as a JavaScript render function.
///
/// The function receives the decoded props as a plain object and returns the
/// markup string to commit. A thrown exception or a non-string return value
/// becomes a [`RenderError`], which the failure boundary confines like any
/// other render fault.
#[derive(Debug, Clone)]
pub struct JsComponent {
    render: js_sys::Function,
}

impl JsComponent {
    /// Wraps a JS render function.
    pub fn new(render: js_sys::Function) -> Self {
        Self { render }
    }
}

impl Component for JsComponent {
    fn render(&self, props: &Props) -> Result<Html, RenderError> {
        // Plain-object serialization: JS widgets expect `props.x`, not an
        // ES2015 Map.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_props = props
            .serialize(&serializer)
            .map_err(|err| RenderError::new(format!("props marshalling failed: {err}")))?;
        let output = self
            .render
            .call1(&JsValue::NULL, &js_props)
            .map_err(|err| RenderError::new(describe_js_error(&err)))?;
        output
            .as_string()
            .map(Html::new)
            .ok_or_else(|| RenderError::new("render function did not return a string"))
    }
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}
