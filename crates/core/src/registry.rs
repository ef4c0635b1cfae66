//! Name-to-implementation registry: the only shared mutable state in the core.

use crate::component::Component;
use std::collections::HashMap;
use std::rc::Rc;

/// Mapping from widget name to implementation.
///
/// Populated during an initialization phase that fully precedes the first
/// scan and read-only afterwards; entries are never removed for the page's
/// lifetime. Registering after a scan has run is unsupported — late entries
/// are only picked up if the host explicitly triggers another scan.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, Rc<dyn Component>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `component` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, component: Rc<dyn Component>) {
        self.entries.insert(name.into(), component);
    }

    /// Looks up a component by name.
    pub fn resolve(&self, name: &str) -> Option<Rc<dyn Component>> {
        self.entries.get(name).cloned()
    }

    /// Whether a component is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Html, Props};
    use crate::error::RenderError;

    fn static_component(markup: &'static str) -> Rc<dyn Component> {
        Rc::new(move |_props: &Props| -> Result<Html, RenderError> { Ok(Html::new(markup)) })
    }

    #[test]
    fn resolves_registered_names() {
        let mut registry = ComponentRegistry::new();
        registry.register("Alpha", static_component("<p>alpha</p>"));

        let alpha = registry.resolve("Alpha").expect("Alpha should resolve");
        let html = alpha.render(&Props::new()).expect("render should succeed");
        assert_eq!(html.as_str(), "<p>alpha</p>");
        assert!(registry.resolve("Beta").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ComponentRegistry::new();
        registry.register("Alpha", static_component("<p>old</p>"));
        registry.register("Alpha", static_component("<p>new</p>"));

        assert_eq!(registry.len(), 1);
        let alpha = registry.resolve("Alpha").expect("Alpha should resolve");
        let html = alpha.render(&Props::new()).expect("render should succeed");
        assert_eq!(html.as_str(), "<p>new</p>");
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ComponentRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("anything"));
        assert!(registry.resolve("anything").is_none());
    }
}
