//! Failure isolation: confine one widget's render fault to its own subtree.

use crate::component::{Component, Html, Props};
use crate::error::RenderFault;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Guards a single widget's render.
///
/// A fault — an error return or a panic — is captured as a [`RenderFault`]
/// and never propagates to sibling widgets or the surrounding page. Once a
/// mount instance degrades it stays degraded; the fallback view offers a
/// manual page reload and there is no automatic retry.
///
/// Panic interception relies on unwinding. Under `panic = "abort"` (the
/// usual wasm32 configuration) only error returns are interceptable; the
/// browser runtime installs a console panic hook so an aborting widget still
/// leaves a trace.
#[derive(Debug, Clone)]
pub struct FailureBoundary {
    widget: String,
}

impl FailureBoundary {
    /// Creates a boundary guarding the named widget.
    pub fn new(widget: impl Into<String>) -> Self {
        Self {
            widget: widget.into(),
        }
    }

    /// Name of the widget this boundary guards.
    pub fn widget(&self) -> &str {
        &self.widget
    }

    /// Renders the component, capturing any fault it raises.
    pub fn render(&self, component: &dyn Component, props: &Props) -> Result<Html, RenderFault> {
        match panic::catch_unwind(AssertUnwindSafe(|| component.render(props))) {
            Ok(Ok(html)) => Ok(html),
            Ok(Err(err)) => Err(self.fault(err.message().to_owned(), false)),
            Err(payload) => Err(self.fault(panic_message(payload.as_ref()), true)),
        }
    }

    /// Fallback view shown in place of a degraded widget.
    ///
    /// Visibly distinct, names the widget, carries the error context, and
    /// offers a full-page reload. The area is never silently blanked.
    pub fn fallback(&self, fault: &RenderFault) -> Html {
        fallback_markup(&self.widget, &fault.message)
    }

    fn fault(&self, message: String, panicked: bool) -> RenderFault {
        RenderFault {
            widget: self.widget.clone(),
            message,
            panicked,
        }
    }
}

/// Inline fallback for failures around the boundary itself, such as a commit
/// that fails before the rendered output becomes visible.
pub fn setup_fallback(widget: &str, detail: &str) -> Html {
    fallback_markup(widget, detail)
}

fn fallback_markup(widget: &str, detail: &str) -> Html {
    let widget = html_escape::encode_text(widget);
    let detail = html_escape::encode_text(detail);
    Html::new(format!(
        "<div class=\"widget-fallback\" role=\"alert\">\
         <p class=\"widget-fallback__message\">The {widget} widget could not be displayed.</p>\
         <p class=\"widget-fallback__detail\">{detail}</p>\
         <button type=\"button\" class=\"widget-fallback__reload\" \
         onclick=\"window.location.reload()\">Reload page</button>\
         </div>"
    ))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panic with non-string payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    fn quiet_panics<T>(run: impl FnOnce() -> T) -> T {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = run();
        panic::set_hook(previous);
        result
    }

    #[test]
    fn passes_through_successful_renders() {
        let component = |_: &Props| -> Result<Html, RenderError> { Ok(Html::new("<p>ok</p>")) };
        let boundary = FailureBoundary::new("Alpha");
        let html = boundary
            .render(&component, &Props::new())
            .expect("render should succeed");
        assert_eq!(html.as_str(), "<p>ok</p>");
    }

    #[test]
    fn captures_error_returns() {
        let component = |_: &Props| -> Result<Html, RenderError> {
            Err(RenderError::new("bad props shape"))
        };
        let boundary = FailureBoundary::new("Alpha");
        let fault = boundary
            .render(&component, &Props::new())
            .expect_err("render should fail");
        assert_eq!(fault.widget, "Alpha");
        assert_eq!(fault.message, "bad props shape");
        assert!(!fault.panicked);
    }

    #[test]
    fn captures_panics() {
        let component = |_: &Props| -> Result<Html, RenderError> { panic!("widget exploded") };
        let boundary = FailureBoundary::new("Alpha");
        let fault = quiet_panics(|| {
            boundary
                .render(&component, &Props::new())
                .expect_err("render should panic")
        });
        assert_eq!(fault.message, "widget exploded");
        assert!(fault.panicked);
    }

    #[test]
    fn fallback_names_widget_and_offers_reload() {
        let boundary = FailureBoundary::new("Checkout <Step>");
        let fault = RenderFault {
            widget: "Checkout <Step>".into(),
            message: "boom".into(),
            panicked: false,
        };
        insta::assert_snapshot!(boundary.fallback(&fault).as_str(), @r#"<div class="widget-fallback" role="alert"><p class="widget-fallback__message">The Checkout &lt;Step&gt; widget could not be displayed.</p><p class="widget-fallback__detail">boom</p><button type="button" class="widget-fallback__reload" onclick="window.location.reload()">Reload page</button></div>"#);
    }

    #[test]
    fn fallback_carries_error_context() {
        let boundary = FailureBoundary::new("Cart");
        let fault = RenderFault {
            widget: "Cart".into(),
            message: "price lookup failed".into(),
            panicked: false,
        };
        let markup = boundary.fallback(&fault);
        assert!(markup.as_str().contains("price lookup failed"));
        assert!(markup.as_str().contains("The Cart widget could not be displayed."));
    }
}
