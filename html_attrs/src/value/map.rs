//! Insertion-ordered attribute mapping.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{AttrKey, AttrValue};

/// Ordered mapping from [`AttrKey`] to [`AttrValue`].
///
/// Iteration follows insertion order, which is the order attributes render
/// in. Equality ignores order, matching how two attribute sets compare
/// semantically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrMap {
    entries: IndexMap<AttrKey, AttrValue>,
}

impl AttrMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` exactly as written, form included.
    #[must_use]
    pub fn get(&self, key: &AttrKey) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Resolve the stored key matching `key`: the literal key first, then its
    /// counterpart form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use html_attrs::{AttrKey, attrs};
    ///
    /// let attrs = attrs!({ "id" => "main" });
    /// let map = attrs.as_map().expect("literal is a map");
    /// assert_eq!(map.resolve_key(&AttrKey::name("id")), Some(&AttrKey::text("id")));
    /// ```
    #[must_use]
    pub fn resolve_key(&self, key: &AttrKey) -> Option<&AttrKey> {
        self.entries
            .get_key_value(key)
            .or_else(|| self.entries.get_key_value(&key.counterpart()))
            .map(|(stored, _)| stored)
    }

    /// Look up `key` ignoring its form.
    #[must_use]
    pub fn get_indifferent(&self, key: &AttrKey) -> Option<&AttrValue> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&key.counterpart()))
    }

    /// Whether `key` is present exactly as written.
    #[must_use]
    pub fn contains_key(&self, key: &AttrKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `key` is present in either form.
    #[must_use]
    pub fn contains_key_indifferent(&self, key: &AttrKey) -> bool {
        self.resolve_key(key).is_some()
    }

    /// Insert or replace an entry, returning the previous value.
    ///
    /// Replacing keeps the entry's original position.
    pub fn insert(
        &mut self,
        key: impl Into<AttrKey>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove the entry stored under `key` exactly, preserving the order of
    /// the remaining entries.
    pub fn remove(&mut self, key: &AttrKey) -> Option<AttrValue> {
        self.entries.shift_remove(key)
    }

    /// Remove the entry matching `key` in either form (literal form first).
    pub fn remove_indifferent(&mut self, key: &AttrKey) -> Option<AttrValue> {
        self.entries
            .shift_remove(key)
            .or_else(|| self.entries.shift_remove(&key.counterpart()))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &AttrKey> {
        self.entries.keys()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, AttrKey, AttrValue> {
        self.entries.iter()
    }

    /// Alias for [`AttrMap::iter`].
    #[must_use]
    pub fn entries(&self) -> Iter<'_, AttrKey, AttrValue> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a AttrKey, &'a AttrValue);
    type IntoIter = Iter<'a, AttrKey, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for AttrMap {
    type Item = (AttrKey, AttrValue);
    type IntoIter = IntoIter<AttrKey, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AttrMap
where
    K: Into<AttrKey>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for AttrMap
where
    K: Into<AttrKey>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::AttrMap;
    use crate::{AttrKey, AttrValue};
    use rstest::{fixture, rstest};

    #[fixture]
    fn mixed() -> AttrMap {
        let mut map = AttrMap::new();
        map.insert(AttrKey::name("class"), "btn");
        map.insert(AttrKey::text("id"), "save");
        map.insert(AttrKey::name("title"), AttrValue::Nil);
        map
    }

    #[rstest]
    fn literal_lookup_respects_form(mixed: AttrMap) {
        assert!(mixed.get(&AttrKey::name("class")).is_some());
        assert!(mixed.get(&AttrKey::text("class")).is_none());
    }

    #[rstest]
    fn indifferent_lookup_falls_back_to_counterpart(mixed: AttrMap) {
        assert_eq!(
            mixed.get_indifferent(&AttrKey::text("class")),
            Some(&AttrValue::from("btn"))
        );
        assert_eq!(
            mixed.resolve_key(&AttrKey::name("id")),
            Some(&AttrKey::text("id"))
        );
        assert!(mixed.contains_key_indifferent(&AttrKey::text("title")));
        assert!(!mixed.contains_key_indifferent(&AttrKey::name("style")));
    }

    #[rstest]
    fn literal_key_wins_when_both_forms_exist() {
        let mut map = AttrMap::new();
        map.insert(AttrKey::text("d"), "text");
        map.insert(AttrKey::name("d"), "name");
        assert_eq!(map.resolve_key(&AttrKey::text("d")), Some(&AttrKey::text("d")));
        assert_eq!(map.resolve_key(&AttrKey::name("d")), Some(&AttrKey::name("d")));
    }

    #[rstest]
    fn replacing_keeps_position_and_removal_keeps_order(mut mixed: AttrMap) {
        mixed.insert(AttrKey::name("class"), "btn-lg");
        let order: Vec<&str> = mixed.keys().map(AttrKey::canonical).collect();
        assert_eq!(order, ["class", "id", "title"]);

        assert_eq!(
            mixed.remove_indifferent(&AttrKey::name("id")),
            Some(AttrValue::from("save"))
        );
        let remaining: Vec<&str> = mixed.keys().map(AttrKey::canonical).collect();
        assert_eq!(remaining, ["class", "title"]);
    }

    #[rstest]
    fn equality_ignores_order() {
        let forward: AttrMap = [("a", 1), ("b", 2)].into_iter().collect();
        let reverse: AttrMap = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(forward, reverse);
    }
}
