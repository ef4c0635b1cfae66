//! Mount orchestration: resolve, configure, and render widgets at placeholders.

use crate::boundary::{self, FailureBoundary};
use crate::component::Html;
use crate::dom::{
    COMPONENT_ATTR, MountPoint, PlaceholderDescriptor, PlaceholderScan, RENDERED_ATTR,
    RENDERED_VALUE,
};
use crate::error::{MountOutcome, MountReport};
use crate::props::decode_props;
use crate::registry::ComponentRegistry;

/// Drives widget mounting over a set of placeholders.
///
/// The registry is injected once at construction and treated as read-only
/// from then on; the host contract is "register everything, then scan" (see
/// [`ComponentRegistry`]).
#[derive(Debug)]
pub struct Mounter {
    registry: ComponentRegistry,
}

impl Mounter {
    /// Creates a mounter over the given registry.
    pub fn new(registry: ComponentRegistry) -> Self {
        Self { registry }
    }

    /// The injected registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Mounts every placeholder found by `scan`, in document order.
    ///
    /// Each placeholder is processed to completion — decode, render, commit —
    /// before the next one is touched, and every failure is terminal only for
    /// its own placeholder.
    pub fn mount_all<S: PlaceholderScan>(&self, scan: &S) -> MountReport {
        let mut report = MountReport::new();
        for point in scan.find_placeholders() {
            report.push(self.mount_one(&point));
        }
        report
    }

    /// Runs the full mount sequence for one placeholder.
    pub fn mount_one(&self, point: &impl MountPoint) -> MountOutcome {
        let descriptor = PlaceholderDescriptor::read(point);

        let Some(name) = descriptor.component_name else {
            log::warn!(
                "{COMPONENT_ATTR} is missing on widget node {}",
                point.describe()
            );
            return MountOutcome::SkippedNoComponentName;
        };

        if descriptor.already_mounted {
            return MountOutcome::SkippedAlreadyMounted;
        }

        let Some(component) = self.registry.resolve(&name) else {
            log::warn!("no component registered for {name}");
            return MountOutcome::SkippedUnknownComponent { widget: name };
        };

        // Claim the element before rendering so a render that throws
        // synchronously cannot leave it eligible for a re-entrant mount on a
        // later scan. If the claim itself cannot be written, rendering would
        // break the mount-once invariant, so the attempt is aborted.
        if let Err(err) = point.set_attribute(RENDERED_ATTR, RENDERED_VALUE) {
            log::error!("could not claim placeholder for {name}: {err}");
            return MountOutcome::FailedRender { widget: name };
        }

        let props = match decode_props(descriptor.raw_props.as_deref()) {
            Ok(props) => props,
            Err(err) => {
                log::error!("failed to decode props for {name}: {err}");
                return MountOutcome::FailedPropsDecode { widget: name };
            }
        };

        let guard = FailureBoundary::new(name.clone());
        let html = match guard.render(component.as_ref(), &props) {
            Ok(html) => html,
            Err(fault) => {
                log::error!("render failure in widget {fault}");
                commit_fallback(point, &guard.fallback(&fault), &name);
                return MountOutcome::FailedRender { widget: name };
            }
        };

        if let Err(err) = point.commit_html(&html) {
            log::error!("mount setup failed for {name}: {err}");
            commit_fallback(point, &boundary::setup_fallback(&name, &err.to_string()), &name);
            return MountOutcome::FailedRender { widget: name };
        }

        MountOutcome::Mounted { widget: name }
    }
}

/// Best-effort fallback commit; a second failure is only logged.
fn commit_fallback(point: &impl MountPoint, fallback: &Html, name: &str) {
    if let Err(err) = point.commit_html(fallback) {
        log::error!("could not attach fallback for {name}: {err}");
    }
}
