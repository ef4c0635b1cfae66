//! DOM contract: placeholder attributes, mount-point traits, and the typed
//! placeholder descriptor.
//!
//! The attribute encoding below is the wire-level interface page authors and
//! the server-side platform write against. Internally the mounter works with
//! [`PlaceholderDescriptor`], read off a [`MountPoint`] at scan time.

use crate::component::Html;
use crate::error::DomError;

/// Attribute flagging an element as a widget mount target.
pub const MOUNT_FLAG_ATTR: &str = "data-widget";
/// Required sentinel value of the mount flag.
pub const MOUNT_FLAG_VALUE: &str = "1";
/// Attribute naming the component to mount.
pub const COMPONENT_ATTR: &str = "data-component";
/// Attribute holding the serialized props object, if any.
pub const PROPS_ATTR: &str = "data-props";
/// Marker the mounter writes once it has claimed an element. Never set by
/// page authors.
pub const RENDERED_ATTR: &str = "data-widget-rendered";
/// Value written to the rendered marker.
pub const RENDERED_VALUE: &str = "1";

/// CSS selector matching flagged placeholder elements. Must stay in sync
/// with [`MOUNT_FLAG_ATTR`]/[`MOUNT_FLAG_VALUE`]; a unit test enforces the
/// coupling.
pub const PLACEHOLDER_SELECTOR: &str = "[data-widget=\"1\"]";

/// One placeholder element the mounter can act on.
///
/// `commit_html` must be synchronous: when it returns `Ok`, the subtree is
/// visible in the document. Deferring the commit to a later tick would let
/// surrounding page scripts interleave with the mount sequence and corrupt
/// mount state.
pub trait MountPoint {
    /// Reads an attribute value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes an attribute value.
    ///
    /// A failed write surfaces as an error so the mounter can abort the
    /// attempt: rendering without a successfully written claim marker could
    /// double-mount the element on a later scan.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Replaces the element's content with the given markup, synchronously.
    fn commit_html(&self, html: &Html) -> Result<(), DomError>;

    /// Short label identifying the element in diagnostics.
    fn describe(&self) -> String;
}

/// A restartable query for the current set of placeholder elements.
pub trait PlaceholderScan {
    /// Element handle type produced by this scan.
    type Point: MountPoint;

    /// Returns every flagged placeholder in document order.
    ///
    /// An empty result is valid; a malformed document yields zero or partial
    /// matches rather than an error.
    fn find_placeholders(&self) -> Vec<Self::Point>;
}

/// Typed view of one placeholder's mount-relevant attributes.
///
/// Derived per element at scan time and never persisted; the rendered marker
/// on the element itself is what survives across scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDescriptor {
    /// Name of the component to mount, if declared and non-empty.
    pub component_name: Option<String>,
    /// Raw serialized props text, if present.
    pub raw_props: Option<String>,
    /// Whether the mounter has already claimed this element.
    pub already_mounted: bool,
}

impl PlaceholderDescriptor {
    /// Reads the descriptor off a mount point's attributes.
    pub fn read(point: &impl MountPoint) -> Self {
        Self {
            component_name: point.attribute(COMPONENT_ATTR).filter(|n| !n.is_empty()),
            raw_props: point.attribute(PROPS_ATTR),
            already_mounted: point.attribute(RENDERED_ATTR).is_some(),
        }
    }
}
