//! Canonical attribute mappings shared by the integration suites.
//!
//! `component_defaults` plays the role of attributes a component ships with
//! and `caller_overrides` the attributes a caller passes in. The `expected_*`
//! functions hold the result of merging the two under each policy.

use html_attrs::{AttrMap, attr_map};

/// Attributes already present on a component.
#[must_use]
pub fn component_defaults() -> AttrMap {
    attr_map! {
        class: "a b",
        style: "color: red;",
        data: { a: 1, b: 2, d: "x y", e: "z", deep: { a: "aa" } },
        id: "test",
        unmergeable: { x: "1", y: 2, z: {} },
    }
}

/// Attributes applied on top of [`component_defaults`].
#[must_use]
pub fn caller_overrides() -> AttrMap {
    attr_map! {
        class: "c d",
        style: "color: blue;",
        data: { b: 3, c: 4, d: "e", f: "zz", deep: { x: "a", a: "b" } },
        id: "test2",
        unmergeable: { x: "2", y: 3, z: false },
        z: { a: 1, b: {} },
    }
}

/// Result of the default-policy merge.
#[must_use]
pub fn expected_default_merge() -> AttrMap {
    attr_map! {
        class: "a b c d",
        style: "color: red; color: blue;",
        data: { a: 1, b: 3, d: "x y e", e: "z", deep: { a: "aa b", x: "a" }, c: 4, f: "zz" },
        id: "test2",
        unmergeable: { x: "2", y: 3, z: false },
        z: { a: 1, b: {} },
    }
}

/// [`caller_overrides`] with a nested mapping under `unmergeable.z`, so the
/// entry can merge when `unmergeable` is made mergeable.
#[must_use]
pub fn caller_overrides_with_nested_z() -> AttrMap {
    let mut overrides = caller_overrides();
    overrides.insert("unmergeable", html_attrs::attrs!({ x: "2", y: 3, z: { a: 3 } }));
    overrides
}

/// Result of merging [`caller_overrides_with_nested_z`] with only `id` and
/// `unmergeable` mergeable.
#[must_use]
pub fn expected_custom_merge() -> AttrMap {
    attr_map! {
        class: "c d",
        style: "color: blue;",
        data: { b: 3, c: 4, d: "e", f: "zz", deep: { x: "a", a: "b" } },
        id: "test test2",
        unmergeable: { x: "1 2", y: 3, z: { a: 3 } },
        z: { a: 1, b: {} },
    }
}
