//! Rendering attribute structures as `name="value"` strings.
//!
//! The [`AttributeRenderer`] trait is the seam the wrapper renders through;
//! [`TagOptionsRenderer`] is the standard implementation.

mod escape;

pub use escape::escape_attribute;

use crate::{AttrMap, AttrValue};

/// HTML attributes whose presence alone means "on".
///
/// A truthy value renders `name="name"`; `false` and `nil` omit the
/// attribute.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "allowpaymentrequest",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "compact",
    "controls",
    "declare",
    "default",
    "defaultchecked",
    "defaultmuted",
    "defaultselected",
    "defer",
    "disabled",
    "enabled",
    "formnovalidate",
    "hidden",
    "indeterminate",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nohref",
    "nomodule",
    "noresize",
    "noshade",
    "novalidate",
    "nowrap",
    "open",
    "pauseonexit",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
    "sortable",
    "truespeed",
    "typemustmatch",
    "visible",
];

/// Turns an attribute mapping into markup.
pub trait AttributeRenderer {
    /// Render `attrs` as space-separated `name="value"` pairs.
    fn render(&self, attrs: &AttrMap) -> String;
}

/// Renderer following the usual tag-option conventions of HTML helpers.
///
/// - Entries render in insertion order; `nil` values are skipped.
/// - Nested mappings flatten to `parent-child` names at any depth, with `_`
///   in child names turned into `-`.
/// - Inside a flattened mapping, non-text values render as JSON.
/// - At the top level, sequences join with spaces and
///   [`BOOLEAN_ATTRIBUTES`] render as `name="name"` when truthy.
/// - Values are escaped with [`escape_attribute`].
///
/// # Examples
///
/// ```rust
/// use html_attrs::attr_map;
/// use html_attrs::render::{AttributeRenderer, TagOptionsRenderer};
///
/// let attrs = attr_map! {
///     class: ["btn", "btn-primary"],
///     disabled: true,
///     data: { turbo_frame: "main", count: 2 },
/// };
/// assert_eq!(
///     TagOptionsRenderer.render(&attrs),
///     r#"class="btn btn-primary" disabled="disabled" data-turbo-frame="main" data-count="2""#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TagOptionsRenderer;

impl AttributeRenderer for TagOptionsRenderer {
    fn render(&self, attrs: &AttrMap) -> String {
        let mut out = String::new();
        for (key, value) in attrs {
            write_attribute(&mut out, key.canonical(), value, false);
        }
        out.trim().to_owned()
    }
}

/// Render with [`TagOptionsRenderer`].
#[must_use]
pub fn render(attrs: &AttrMap) -> String {
    TagOptionsRenderer.render(attrs)
}

/// Whether `name` is one of the [`BOOLEAN_ATTRIBUTES`].
#[must_use]
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

fn write_attribute(out: &mut String, name: &str, value: &AttrValue, nested: bool) {
    match value {
        AttrValue::Nil => {}
        AttrValue::Map(map) => {
            for (key, child) in map {
                let child_name = format!("{name}-{}", dasherize(key.canonical()));
                write_attribute(out, &child_name, child, true);
            }
        }
        _ if !nested && is_boolean_attribute(name) => {
            if !matches!(value, AttrValue::Bool(false)) {
                push_pair(out, name, name);
            }
        }
        _ => push_pair(out, name, &attribute_text(value, nested)),
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

fn attribute_text(value: &AttrValue, nested: bool) -> String {
    match value {
        AttrValue::Text(text) => text.clone(),
        _ if nested => value.to_json().to_string(),
        AttrValue::List(items) => {
            let mut words = Vec::new();
            collect_words(items, &mut words);
            words.join(" ")
        }
        AttrValue::Number(number) => number.to_string(),
        AttrValue::Bool(flag) => flag.to_string(),
        AttrValue::Map(_) | AttrValue::Nil => String::new(),
    }
}

fn collect_words(items: &[AttrValue], words: &mut Vec<String>) {
    for item in items {
        match item {
            AttrValue::Nil => {}
            AttrValue::Text(text) if text.trim().is_empty() => {}
            AttrValue::List(nested) => collect_words(nested, words),
            AttrValue::Text(text) => words.push(text.clone()),
            AttrValue::Number(number) => words.push(number.to_string()),
            AttrValue::Bool(flag) => words.push(flag.to_string()),
            AttrValue::Map(_) => words.push(item.to_json().to_string()),
        }
    }
}

fn dasherize(name: &str) -> String {
    name.replace('_', "-")
}
