//! Component model: the single capability the core consumes from widgets.

use crate::error::RenderError;
use serde_json::{Map, Value};

/// Decoded widget configuration: a schema-agnostic JSON object.
///
/// The core passes this through verbatim; each component validates its own
/// expected shape internally.
pub type Props = Map<String, Value>;

/// Opaque render output, committed verbatim at the mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// Wraps a markup string.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Borrows the markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the output into its markup text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Html {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl From<&str> for Html {
    fn from(markup: &str) -> Self {
        Self(markup.to_owned())
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered widget implementation.
///
/// Given decoded props, produce markup. The core never inspects the output
/// beyond committing it at the placeholder. A props shape the component
/// cannot work with should surface as a [`RenderError`], not a panic; both
/// are confined by the failure boundary, but only the error channel is
/// interceptable on every target.
pub trait Component {
    /// Renders the widget with the given decoded configuration.
    fn render(&self, props: &Props) -> Result<Html, RenderError>;
}

impl<F> Component for F
where
    F: Fn(&Props) -> Result<Html, RenderError>,
{
    fn render(&self, props: &Props) -> Result<Html, RenderError> {
        self(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_components() {
        let greet = |props: &Props| -> Result<Html, RenderError> {
            let name = props
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("stranger");
            Ok(Html::new(format!("<p>hello {name}</p>")))
        };

        let mut props = Props::new();
        props.insert("name".into(), Value::String("ada".into()));
        let html = greet.render(&props).expect("render should succeed");
        assert_eq!(html.as_str(), "<p>hello ada</p>");
    }

    #[test]
    fn html_round_trips_markup() {
        let html = Html::from("<b>x</b>");
        assert_eq!(html.to_string(), "<b>x</b>");
        assert_eq!(html.into_string(), "<b>x</b>");
    }
}
