#![deny(missing_docs)]
//! inlay core: widget discovery, resolution, and mounting for pre-rendered pages.
//!
//! A server-side platform leaves placeholder elements in its markup; this
//! crate finds them, resolves each to a registered [`Component`], decodes its
//! configuration, and renders it in place. One broken widget never takes down
//! its siblings or the page.
//!
//! The crate is host-agnostic: all DOM access goes through the traits in
//! [`dom`], so the same mounting logic runs against a browser document (see
//! the `inlay-wasm` crate) or an in-memory double in tests.

/// Failure isolation around a single widget's render.
pub mod boundary;
/// Component trait and render output types.
pub mod component;
/// DOM contract: placeholder attributes, mount-point traits, descriptors.
pub mod dom;
/// Core error and diagnostic types.
pub mod error;
/// Mount orchestration.
pub mod mount;
/// Props decoding.
pub mod props;
/// Name-to-implementation registry.
pub mod registry;

pub use boundary::FailureBoundary;
pub use component::{Component, Html, Props};
pub use dom::{
    COMPONENT_ATTR, MOUNT_FLAG_ATTR, MOUNT_FLAG_VALUE, MountPoint, PLACEHOLDER_SELECTOR,
    PROPS_ATTR, PlaceholderDescriptor, PlaceholderScan, RENDERED_ATTR, RENDERED_VALUE,
};
pub use error::{DomError, MountOutcome, MountReport, PropsDecodeError, RenderError, RenderFault};
pub use mount::Mounter;
pub use props::decode_props;
pub use registry::ComponentRegistry;
