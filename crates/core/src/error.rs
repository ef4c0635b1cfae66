//! Error and diagnostic types for the mounting core.
//!
//! Every failure here is recoverable per-placeholder: nothing in this module
//! is allowed to propagate past the widget that raised it.

use thiserror::Error;

/// Failure to decode a placeholder's serialized props.
#[derive(Debug, Error)]
pub enum PropsDecodeError {
    /// The attribute text is not valid JSON.
    #[error("invalid props JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The attribute text is valid JSON but not an object.
    #[error("props JSON must be an object, found {found}")]
    NotAnObject {
        /// JSON type that was actually found.
        found: &'static str,
    },
}

/// Error raised by a component implementation during render.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    /// Creates a render error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure of a DOM commit or other host interop call.
#[derive(Debug, Error)]
#[error("dom operation failed: {message}")]
pub struct DomError {
    message: String,
}

impl DomError {
    /// Creates a DOM error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A render fault captured by a failure boundary.
#[derive(Debug, Clone)]
pub struct RenderFault {
    /// Name of the widget the boundary was guarding.
    pub widget: String,
    /// Error text: the component's error message or the panic payload.
    pub message: String,
    /// Whether the fault was a panic rather than an error return.
    pub panicked: bool,
}

impl std::fmt::Display for RenderFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.panicked {
            write!(f, "{} panicked: {}", self.widget, self.message)
        } else {
            write!(f, "{}: {}", self.widget, self.message)
        }
    }
}

/// Outcome of one placeholder's mount attempt.
///
/// Not persisted anywhere; the mounter returns these for logging and
/// diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// The widget rendered and its output was committed.
    Mounted {
        /// Widget name.
        widget: String,
    },
    /// The placeholder carries no component name.
    SkippedNoComponentName,
    /// The placeholder already carries the rendered marker.
    SkippedAlreadyMounted,
    /// No implementation is registered under the placeholder's name.
    SkippedUnknownComponent {
        /// Widget name.
        widget: String,
    },
    /// The serialized props could not be decoded.
    FailedPropsDecode {
        /// Widget name.
        widget: String,
    },
    /// The claim, render, or commit failed; where the element was still
    /// writable a fallback view was attached.
    FailedRender {
        /// Widget name.
        widget: String,
    },
}

impl MountOutcome {
    /// Whether the widget actually mounted.
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountOutcome::Mounted { .. })
    }

    /// Whether the placeholder was skipped before any render attempt.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            MountOutcome::SkippedNoComponentName
                | MountOutcome::SkippedAlreadyMounted
                | MountOutcome::SkippedUnknownComponent { .. }
        )
    }

    /// Whether the mount attempt failed after the placeholder was claimed.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            MountOutcome::FailedPropsDecode { .. } | MountOutcome::FailedRender { .. }
        )
    }

    /// The widget name, where one was known.
    pub fn widget(&self) -> Option<&str> {
        match self {
            MountOutcome::Mounted { widget }
            | MountOutcome::SkippedUnknownComponent { widget }
            | MountOutcome::FailedPropsDecode { widget }
            | MountOutcome::FailedRender { widget } => Some(widget),
            MountOutcome::SkippedNoComponentName | MountOutcome::SkippedAlreadyMounted => None,
        }
    }
}

/// Aggregate outcome of one full scan, in document order.
#[derive(Debug, Clone, Default)]
pub struct MountReport {
    outcomes: Vec<MountOutcome>,
}

impl MountReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one placeholder's outcome.
    pub fn push(&mut self, outcome: MountOutcome) {
        self.outcomes.push(outcome);
    }

    /// Per-placeholder outcomes in document order.
    pub fn outcomes(&self) -> &[MountOutcome] {
        &self.outcomes
    }

    /// Number of widgets that mounted.
    pub fn mounted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_mounted()).count()
    }

    /// Number of placeholders skipped without a render attempt.
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skip()).count()
    }

    /// Number of placeholders whose mount attempt failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Whether any placeholder failed.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.is_failure())
    }

    /// Total number of placeholders visited.
    pub fn count(&self) -> usize {
        self.outcomes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_kind() {
        let mut report = MountReport::new();
        report.push(MountOutcome::Mounted {
            widget: "a".into(),
        });
        report.push(MountOutcome::SkippedAlreadyMounted);
        report.push(MountOutcome::FailedRender {
            widget: "b".into(),
        });

        assert_eq!(report.count(), 3);
        assert_eq!(report.mounted(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn outcome_widget_names() {
        let outcome = MountOutcome::FailedPropsDecode {
            widget: "cart".into(),
        };
        assert_eq!(outcome.widget(), Some("cart"));
        assert!(outcome.is_failure());
        assert!(MountOutcome::SkippedNoComponentName.widget().is_none());
    }

    #[test]
    fn fault_display_marks_panics() {
        let fault = RenderFault {
            widget: "menu".into(),
            message: "boom".into(),
            panicked: true,
        };
        assert_eq!(fault.to_string(), "menu panicked: boom");
    }
}
