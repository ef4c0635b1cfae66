//! web-sys implementations of the core DOM traits.

use inlay_core::{DomError, Html, MountPoint, PLACEHOLDER_SELECTOR, PlaceholderScan};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// A placeholder element in the live document.
#[derive(Debug, Clone)]
pub struct ElementPoint {
    element: Element,
}

impl ElementPoint {
    /// Wraps a DOM element.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The underlying element.
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl MountPoint for ElementPoint {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.element.set_attribute(name, value).map_err(|err| {
            DomError::new(format!(
                "failed to set {name} on {}: {err:?}",
                self.describe()
            ))
        })
    }

    fn commit_html(&self, html: &Html) -> Result<(), DomError> {
        // innerHTML assignment parses and attaches before returning; the
        // subtree is visible once this call completes.
        self.element.set_inner_html(html.as_str());
        Ok(())
    }

    fn describe(&self) -> String {
        let tag = self.element.tag_name().to_lowercase();
        let id = self.element.id();
        if id.is_empty() {
            format!("<{tag}>")
        } else {
            format!("<{tag} id=\"{id}\">")
        }
    }
}

/// Scans the live document for flagged placeholder elements.
#[derive(Debug, Clone)]
pub struct DocumentScan {
    document: Document,
}

impl DocumentScan {
    /// Scan over the given document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Scan over the window's current document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }
}

impl PlaceholderScan for DocumentScan {
    type Point = ElementPoint;

    fn find_placeholders(&self) -> Vec<ElementPoint> {
        let Ok(list) = self.document.query_selector_all(PLACEHOLDER_SELECTOR) else {
            return Vec::new();
        };
        let mut points = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            let Some(node) = list.get(index) else {
                continue;
            };
            if let Ok(element) = node.dyn_into::<Element>() {
                points.push(ElementPoint::new(element));
            }
        }
        points
    }
}
