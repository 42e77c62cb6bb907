//! Deterministic smart merging and rendering of HTML attribute structures.
//!
//! Component libraries usually ship default attributes that callers want to
//! extend rather than replace. [`HtmlAttrs::smart_merge`] combines two
//! attribute mappings so that mergeable entries (`class`, `style` and `data`
//! by default) concatenate or merge recursively, while every other entry is
//! overwritten by the incoming value. The result renders straight into a tag.
//!
//! ```rust
//! use html_attrs::{AsHtmlAttrs, attr_map, attrs};
//!
//! let defaults = attr_map! { class: "btn", data: { controller: "popover" }, id: "a" };
//! let merged = defaults.smart_merge(attrs!({
//!     class: "btn-primary",
//!     data: { action: "popover#open" },
//!     id: "b",
//! }))?;
//! assert_eq!(
//!     merged.to_html(),
//!     r#"class="btn btn-primary" data-controller="popover" data-action="popover#open" id="b""#
//! );
//! # Ok::<_, html_attrs::HtmlAttrsError>(())
//! ```
//!
//! The building blocks are public as well: [`merge`] holds the merge engine
//! over raw [`AttrValue`] trees, [`render`] the attribute renderer and
//! [`config`] the figment-backed policy configuration.

mod attrs;
pub mod config;
mod error;
mod macros;
pub mod merge;
pub mod policy;
pub mod render;
pub mod value;

pub use attrs::{AsHtmlAttrs, HtmlAttrs, RESERVED_POLICY_KEY};
pub use config::HtmlAttrsConfig;
pub use error::{HtmlAttrsError, HtmlAttrsResult, KeyPath, Operand};
pub use policy::{DEFAULT_MERGEABLE_ATTRIBUTES, MergePolicy};
pub use value::{AttrKey, AttrMap, AttrValue, KeyForm, ValueKind};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
