//! The smart-merge engine.
//!
//! [`merge`] combines two attribute structures. The `other` operand is the
//! structure already present and `target` is applied on top of it:
//!
//! - `Nil` on either side yields the other side unchanged.
//! - Mappings merge key by key. Keys eligible under the [`MergePolicy`] that
//!   already exist in `other` (in either key form) merge recursively with
//!   [`MergePolicy::All`]; every other target entry overwrites. Keys only in
//!   `other` are kept.
//! - Sequences concatenate, `other` first.
//! - Text joins with a single space, `other` first, dropping blank sides.
//! - Anything else is overwritten by `target`.
//!
//! When one side is a mapping, sequence, or text, the other must have the
//! same shape (or be `Nil`), otherwise the merge fails with
//! [`HtmlAttrsError::TypeMismatch`]. No partial result is returned.
//!
//! Inputs are borrowed and never modified; every call allocates a fresh
//! result.

use tracing::trace;

use crate::value::is_blank;
use crate::{AttrMap, AttrValue, HtmlAttrsError, HtmlAttrsResult, KeyPath, MergePolicy, ValueKind};

/// Merge `target` on top of `other` using `policy` for the top-level keys.
///
/// # Errors
///
/// Returns [`HtmlAttrsError::TypeMismatch`] when the operands, or any pair
/// of entries being merged recursively, disagree in shape.
///
/// # Examples
///
/// ```rust
/// use html_attrs::{MergePolicy, attrs, merge::merge};
///
/// let merged = merge(
///     &attrs!({ class: "a b", data: { a: 1, b: 2 } }),
///     &attrs!({ class: "c d", data: { b: 3, c: 4 } }),
///     &MergePolicy::default(),
/// )?;
/// assert_eq!(merged, attrs!({ class: "a b c d", data: { a: 1, b: 3, c: 4 } }));
/// # Ok::<_, html_attrs::HtmlAttrsError>(())
/// ```
pub fn merge(
    other: &AttrValue,
    target: &AttrValue,
    policy: &MergePolicy,
) -> HtmlAttrsResult<AttrValue> {
    merge_at(&mut KeyPath::root(), other, target, policy)
}

/// Merge with every key eligible for recursive merging.
///
/// # Errors
///
/// Same as [`merge`].
///
/// # Examples
///
/// ```rust
/// use html_attrs::{attrs, merge::merge_all};
///
/// let merged = merge_all(&attrs!({ id: "a" }), &attrs!({ id: "b" }))?;
/// assert_eq!(merged, attrs!({ id: "a b" }));
/// # Ok::<_, html_attrs::HtmlAttrsError>(())
/// ```
pub fn merge_all(other: &AttrValue, target: &AttrValue) -> HtmlAttrsResult<AttrValue> {
    merge(other, target, &MergePolicy::All)
}

/// Merge two mappings directly.
///
/// # Errors
///
/// Returns [`HtmlAttrsError::TypeMismatch`] when a mergeable entry disagrees
/// in shape with the entry it merges into.
pub fn merge_maps(
    other: &AttrMap,
    target: &AttrMap,
    policy: &MergePolicy,
) -> HtmlAttrsResult<AttrMap> {
    merge_map_entries(&mut KeyPath::root(), other, target, policy)
}

fn merge_at(
    path: &mut KeyPath,
    other: &AttrValue,
    target: &AttrValue,
    policy: &MergePolicy,
) -> HtmlAttrsResult<AttrValue> {
    if target.is_nil() {
        return Ok(other.clone());
    }
    if other.is_nil() {
        return Ok(target.clone());
    }

    match (other, target) {
        (AttrValue::Map(other_map), AttrValue::Map(target_map)) => {
            merge_map_entries(path, other_map, target_map, policy).map(AttrValue::Map)
        }
        (AttrValue::Map(_), _) | (_, AttrValue::Map(_)) => Err(
            HtmlAttrsError::type_mismatch(ValueKind::Map, other, target, path),
        ),
        (AttrValue::List(other_items), AttrValue::List(target_items)) => Ok(AttrValue::List(
            other_items.iter().chain(target_items).cloned().collect(),
        )),
        (AttrValue::List(_), _) | (_, AttrValue::List(_)) => Err(
            HtmlAttrsError::type_mismatch(ValueKind::List, other, target, path),
        ),
        (AttrValue::Text(other_text), AttrValue::Text(target_text)) => {
            Ok(AttrValue::Text(join_words(other_text, target_text)))
        }
        (AttrValue::Text(_), _) | (_, AttrValue::Text(_)) => Err(
            HtmlAttrsError::type_mismatch(ValueKind::Text, other, target, path),
        ),
        _ => Ok(target.clone()),
    }
}

/// Apply each target entry to a copy of `other`.
///
/// Lookups run against the copy being built, so a target holding both forms
/// of one key merges the second into the first.
fn merge_map_entries(
    path: &mut KeyPath,
    other: &AttrMap,
    target: &AttrMap,
    policy: &MergePolicy,
) -> HtmlAttrsResult<AttrMap> {
    let mut merged = other.clone();
    for (key, value) in target {
        let Some(stored_key) = merged.resolve_key(key).cloned() else {
            trace!(key = %key, path = %path, "adding attribute");
            merged.insert(key.clone(), value.clone());
            continue;
        };

        if !policy.is_mergeable(key) {
            trace!(key = %key, path = %path, "overwriting attribute");
            merged.insert(stored_key, value.clone());
            continue;
        }

        trace!(key = %key, path = %path, "merging attribute");
        let existing = merged.get(&stored_key).cloned().unwrap_or_default();
        path.push(key.canonical());
        let combined = merge_at(path, &existing, value, &MergePolicy::All);
        path.pop();
        merged.insert(stored_key, combined?);
    }
    Ok(merged)
}

fn join_words(other: &str, target: &str) -> String {
    [other, target]
        .into_iter()
        .filter(|words| !is_blank(words))
        .collect::<Vec<_>>()
        .join(" ")
}
