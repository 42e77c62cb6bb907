//! The `HtmlAttrs` value type and the `AsHtmlAttrs` extension trait.

use std::fmt;

use tracing::debug;

use crate::render::{AttributeRenderer, TagOptionsRenderer};
use crate::{
    AttrKey, AttrMap, AttrValue, HtmlAttrsError, HtmlAttrsResult, KeyPath, MergePolicy, ValueKind,
    merge,
};

/// Reserved target entry that selects the merge policy for one call.
pub const RESERVED_POLICY_KEY: &str = "mergeable_attributes";

/// An attribute mapping with smart-merge and rendering helpers.
///
/// The wrapped mapping is the "already present" side of every merge: calling
/// [`HtmlAttrs::smart_merge`] applies the argument on top of `self` and
/// returns a new value, leaving both inputs untouched.
///
/// # Examples
///
/// ```rust
/// use html_attrs::{HtmlAttrs, attr_map, attrs};
///
/// let base = HtmlAttrs::new(attr_map! {
///     class: "bg-primary-500",
///     data: { controller: "popover" },
/// });
/// let merged = base.smart_merge(attrs!({
///     class: "text-white",
///     data: { controller: "tooltip", title: "test" },
/// }))?;
/// assert_eq!(
///     merged.to_string(),
///     r#"class="bg-primary-500 text-white" data-controller="popover tooltip" data-title="test""#
/// );
/// # Ok::<_, html_attrs::HtmlAttrsError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlAttrs {
    map: AttrMap,
    default: Option<AttrValue>,
    policy: MergePolicy,
}

impl HtmlAttrs {
    /// Wrap `map` with the default merge policy and no fallback value.
    #[must_use]
    pub fn new(map: AttrMap) -> Self {
        Self {
            map,
            default: None,
            policy: MergePolicy::default(),
        }
    }

    /// Set the value [`HtmlAttrs::fetch`] returns for missing keys.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<AttrValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the policy used by [`HtmlAttrs::smart_merge`].
    #[must_use]
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fallback value for missing keys, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&AttrValue> {
        self.default.as_ref()
    }

    /// Policy used by [`HtmlAttrs::smart_merge`].
    #[must_use]
    pub const fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    /// Look up `key` in either form.
    #[must_use]
    pub fn get(&self, key: &AttrKey) -> Option<&AttrValue> {
        self.map.get_indifferent(key)
    }

    /// Look up `key` in either form, falling back to the default value.
    #[must_use]
    pub fn fetch(&self, key: &AttrKey) -> Option<&AttrValue> {
        self.get(key).or(self.default.as_ref())
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<AttrKey>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.map.insert(key, value)
    }

    /// Remove the entry matching `key` in either form.
    pub fn remove(&mut self, key: &AttrKey) -> Option<AttrValue> {
        self.map.remove_indifferent(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &AttrKey> {
        self.map.keys()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
        self.map.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Borrow the wrapped mapping.
    #[must_use]
    pub const fn as_map(&self) -> &AttrMap {
        &self.map
    }

    /// Unwrap into the mapping.
    #[must_use]
    pub fn into_map(self) -> AttrMap {
        self.map
    }

    /// Merge `target` on top of `self` with this value's policy.
    ///
    /// `target` may be `nil` (a copy of `self` is returned) or a mapping. A
    /// [`RESERVED_POLICY_KEY`] entry in `target` is removed and, unless it is
    /// `nil`, replaces the policy for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlAttrsError::TypeMismatch`] when `target` is not a mapping
    /// or when mergeable entries disagree in shape, and
    /// [`HtmlAttrsError::InvalidMergePolicy`] when the reserved entry cannot
    /// be read as a policy.
    pub fn smart_merge(&self, target: impl Into<AttrValue>) -> HtmlAttrsResult<Self> {
        let (target, inline_policy) = split_policy(target.into())?;
        let policy = inline_policy.unwrap_or_else(|| self.policy.clone());
        self.merge_with(&target, &policy)
    }

    /// Merge `target` on top of `self` with every key mergeable.
    ///
    /// Any [`RESERVED_POLICY_KEY`] entry in `target` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlAttrsError::TypeMismatch`] when `target` is not a mapping
    /// or when entries disagree in shape.
    pub fn smart_merge_all(&self, target: impl Into<AttrValue>) -> HtmlAttrsResult<Self> {
        let target = strip_policy(target.into());
        self.merge_with(&target, &MergePolicy::All)
    }

    /// Render with the standard renderer.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render_with(&TagOptionsRenderer)
    }

    /// Render with a caller-supplied renderer.
    #[must_use]
    pub fn render_with<R: AttributeRenderer + ?Sized>(&self, renderer: &R) -> String {
        renderer.render(&self.map)
    }

    fn merge_with(&self, target: &AttrValue, policy: &MergePolicy) -> HtmlAttrsResult<Self> {
        let map = match target {
            AttrValue::Nil => self.map.clone(),
            AttrValue::Map(target_map) => merge::merge_maps(&self.map, target_map, policy)?,
            other => {
                return Err(HtmlAttrsError::TypeMismatch {
                    side: crate::Operand::Target,
                    expected: ValueKind::Map,
                    found: other.kind(),
                    path: KeyPath::root(),
                });
            }
        };
        Ok(Self {
            map,
            default: self.default.clone(),
            policy: self.policy.clone(),
        })
    }
}

/// Remove the reserved policy entry from a mapping target.
fn split_policy(target: AttrValue) -> HtmlAttrsResult<(AttrValue, Option<MergePolicy>)> {
    let AttrValue::Map(mut map) = target else {
        return Ok((target, None));
    };
    let policy = match take_reserved(&mut map) {
        None | Some(AttrValue::Nil) => None,
        Some(payload) => {
            let policy = MergePolicy::try_from(&payload)?;
            debug!(?policy, "using inline mergeable attributes");
            Some(policy)
        }
    };
    Ok((AttrValue::Map(map), policy))
}

/// Remove the reserved entry in both key forms. The identifier form's payload
/// wins when both are present.
fn take_reserved(map: &mut AttrMap) -> Option<AttrValue> {
    let key = AttrKey::name(RESERVED_POLICY_KEY);
    let text_payload = map.remove(&key.counterpart());
    map.remove(&key).or(text_payload)
}

fn strip_policy(target: AttrValue) -> AttrValue {
    match target {
        AttrValue::Map(mut map) => {
            take_reserved(&mut map);
            AttrValue::Map(map)
        }
        other => other,
    }
}

/// Equality compares entries only, like comparing two plain mappings.
impl PartialEq for HtmlAttrs {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl PartialEq<AttrMap> for HtmlAttrs {
    fn eq(&self, other: &AttrMap) -> bool {
        &self.map == other
    }
}

impl PartialEq<AttrValue> for HtmlAttrs {
    fn eq(&self, other: &AttrValue) -> bool {
        other.as_map() == Some(&self.map)
    }
}

impl fmt::Display for HtmlAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl From<AttrMap> for HtmlAttrs {
    fn from(map: AttrMap) -> Self {
        Self::new(map)
    }
}

impl From<HtmlAttrs> for AttrMap {
    fn from(attrs: HtmlAttrs) -> Self {
        attrs.map
    }
}

impl From<HtmlAttrs> for AttrValue {
    fn from(attrs: HtmlAttrs) -> Self {
        Self::Map(attrs.map)
    }
}

impl From<&HtmlAttrs> for AttrValue {
    fn from(attrs: &HtmlAttrs) -> Self {
        Self::Map(attrs.map.clone())
    }
}

impl From<&AttrMap> for AttrValue {
    fn from(map: &AttrMap) -> Self {
        Self::Map(map.clone())
    }
}

/// `nil` wraps as an empty mapping; any other non-mapping is rejected.
impl TryFrom<AttrValue> for HtmlAttrs {
    type Error = HtmlAttrsError;

    fn try_from(value: AttrValue) -> Result<Self, Self::Error> {
        match value {
            AttrValue::Nil => Ok(Self::default()),
            AttrValue::Map(map) => Ok(Self::new(map)),
            other => Err(HtmlAttrsError::TypeMismatch {
                side: crate::Operand::Other,
                expected: ValueKind::Map,
                found: other.kind(),
                path: KeyPath::root(),
            }),
        }
    }
}

/// Smart-merge helpers directly on [`AttrMap`].
///
/// ```rust
/// use html_attrs::{AsHtmlAttrs, attr_map, attrs};
///
/// let merged = attr_map! { class: "a" }.smart_merge(attrs!({ class: "b" }))?;
/// assert_eq!(merged, attr_map! { class: "a b" });
/// # Ok::<_, html_attrs::HtmlAttrsError>(())
/// ```
pub trait AsHtmlAttrs {
    /// Wrap a copy of `self` as [`HtmlAttrs`].
    fn as_html_attrs(&self) -> HtmlAttrs;

    /// See [`HtmlAttrs::smart_merge`].
    ///
    /// # Errors
    ///
    /// Same as [`HtmlAttrs::smart_merge`].
    fn smart_merge(&self, target: impl Into<AttrValue>) -> HtmlAttrsResult<HtmlAttrs> {
        self.as_html_attrs().smart_merge(target)
    }

    /// See [`HtmlAttrs::smart_merge_all`].
    ///
    /// # Errors
    ///
    /// Same as [`HtmlAttrs::smart_merge_all`].
    fn smart_merge_all(&self, target: impl Into<AttrValue>) -> HtmlAttrsResult<HtmlAttrs> {
        self.as_html_attrs().smart_merge_all(target)
    }
}

impl AsHtmlAttrs for AttrMap {
    fn as_html_attrs(&self) -> HtmlAttrs {
        HtmlAttrs::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{AsHtmlAttrs, HtmlAttrs, RESERVED_POLICY_KEY};
    use crate::{AttrKey, AttrValue, HtmlAttrsError, MergePolicy, attr_map, attrs};
    use rstest::{fixture, rstest};

    #[fixture]
    fn base() -> HtmlAttrs {
        HtmlAttrs::new(attr_map! { class: "a", id: "x" })
    }

    #[rstest]
    fn fetch_falls_back_to_default(base: HtmlAttrs) {
        let attrs = base.with_default("fallback");
        assert_eq!(attrs.fetch(&AttrKey::text("id")), Some(&attrs!("x")));
        assert_eq!(attrs.fetch(&AttrKey::name("missing")), Some(&attrs!("fallback")));
        assert_eq!(attrs.get(&AttrKey::name("missing")), None);
    }

    #[rstest]
    fn merge_results_keep_default_and_policy(base: HtmlAttrs) {
        let attrs = base.with_default(0).with_policy(MergePolicy::only(["id"]));
        let merged = attrs.smart_merge(attrs!({ id: "y", class: "b" })).expect("merge");
        assert_eq!(merged, attr_map! { class: "b", id: "x y" });
        assert_eq!(merged.default_value(), Some(&attrs!(0)));
        assert_eq!(merged.policy(), &MergePolicy::only(["id"]));
    }

    #[rstest]
    fn nil_target_returns_a_copy(base: HtmlAttrs) {
        let merged = base.smart_merge(AttrValue::Nil).expect("merge");
        assert_eq!(merged, base);
    }

    #[rstest]
    fn non_map_target_is_rejected(base: HtmlAttrs) {
        let err = base.smart_merge(attrs!("class")).expect_err("text target");
        assert!(matches!(err, HtmlAttrsError::TypeMismatch { .. }));
    }

    #[rstest]
    #[case::identifier(AttrKey::name(RESERVED_POLICY_KEY))]
    #[case::text(AttrKey::text(RESERVED_POLICY_KEY))]
    fn reserved_entry_selects_policy_and_is_removed(base: HtmlAttrs, #[case] key: AttrKey) {
        let mut target = attr_map! { id: "y" };
        target.insert(key, attrs!(["id"]));
        let merged = base.smart_merge(target).expect("merge");
        assert_eq!(merged, attr_map! { class: "a", id: "x y" });
    }

    #[rstest]
    fn reserved_entry_in_both_forms_is_fully_removed(base: HtmlAttrs) {
        let mut target = attr_map! { id: "y", class: "b", mergeable_attributes: ["id"] };
        target.insert(AttrKey::text(RESERVED_POLICY_KEY), attrs!("all"));

        let merged = base.smart_merge(target.clone()).expect("merge");
        assert_eq!(merged, attr_map! { class: "b", id: "x y" });
        assert!(!merged.to_html().contains(RESERVED_POLICY_KEY));

        let merged_all = base.smart_merge_all(target).expect("merge");
        assert_eq!(merged_all, attr_map! { class: "a b", id: "x y" });
        assert!(!merged_all.to_html().contains(RESERVED_POLICY_KEY));
    }

    #[rstest]
    fn nil_reserved_entry_keeps_configured_policy(base: HtmlAttrs) {
        let merged = base
            .smart_merge(attrs!({ mergeable_attributes: nil, class: "b", id: "y" }))
            .expect("merge");
        assert_eq!(merged, attr_map! { class: "a b", id: "y" });
    }

    #[rstest]
    fn invalid_reserved_entry_is_reported(base: HtmlAttrs) {
        let err = base
            .smart_merge(attrs!({ mergeable_attributes: 5 }))
            .expect_err("invalid policy");
        assert!(matches!(err, HtmlAttrsError::InvalidMergePolicy { .. }));
    }

    #[rstest]
    fn merge_all_ignores_reserved_entry(base: HtmlAttrs) {
        let merged = base
            .smart_merge_all(attrs!({ mergeable_attributes: ["class"], id: "y" }))
            .expect("merge");
        assert_eq!(merged, attr_map! { class: "a", id: "x y" });
    }

    #[rstest]
    fn caller_target_survives_merge_all(base: HtmlAttrs) {
        let target = attr_map! { id: "y" };
        let merged = base.smart_merge_all(&target).expect("merge");
        assert_eq!(merged, attr_map! { class: "a", id: "x y" });
        assert_eq!(target, attr_map! { id: "y" });
    }

    #[rstest]
    fn try_from_value_wraps_maps_and_nil() {
        let empty = HtmlAttrs::try_from(AttrValue::Nil).expect("nil wraps");
        assert!(empty.is_empty());
        let wrapped = HtmlAttrs::try_from(attrs!({ id: "a" })).expect("map wraps");
        assert_eq!(wrapped.len(), 1);
        assert!(HtmlAttrs::try_from(attrs!([1])).is_err());
    }

    #[rstest]
    fn extension_trait_wraps_plain_maps() {
        let map = attr_map! { class: "a" };
        let merged = map.smart_merge_all(attrs!({ class: "b" })).expect("merge");
        assert_eq!(merged.as_map(), &attr_map! { class: "a b" });
        assert_eq!(map.as_html_attrs(), map);
    }
}
