//! Mergeability policy: which top-level keys merge recursively.
//!
//! The policy gates only the top level of a merge call. Once a key is found
//! mergeable, its whole subtree merges with [`MergePolicy::All`].

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{AttrKey, AttrValue, HtmlAttrsError};

/// Attributes merged by default: `class`, `style`, and `data`.
pub const DEFAULT_MERGEABLE_ATTRIBUTES: [&str; 3] = ["class", "style", "data"];

/// Spelling of the merge-everything policy in data and configuration.
const ALL: &str = "all";

/// Decides whether an entry merges recursively or is overwritten.
///
/// # Examples
///
/// ```rust
/// use html_attrs::{AttrKey, MergePolicy};
///
/// let policy = MergePolicy::default();
/// assert!(policy.is_mergeable(&AttrKey::text("class")));
/// assert!(!policy.is_mergeable(&AttrKey::name("id")));
/// assert!(MergePolicy::All.is_mergeable(&AttrKey::name("id")));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MergePolicy {
    /// Every key merges.
    All,
    /// Only the listed canonical names merge.
    Only(BTreeSet<String>),
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::only(DEFAULT_MERGEABLE_ATTRIBUTES)
    }
}

impl MergePolicy {
    /// Build a policy from a list of attribute names.
    #[must_use]
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    /// Whether `key` merges under this policy. Key form is ignored.
    #[must_use]
    pub fn is_mergeable(&self, key: &AttrKey) -> bool {
        self.is_mergeable_name(key.canonical())
    }

    /// Whether the canonical `name` merges under this policy.
    #[must_use]
    pub fn is_mergeable_name(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(name),
        }
    }

    /// Whether this is [`MergePolicy::All`].
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Parse `"all"` or a comma/whitespace separated list of names.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        let trimmed = list.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            return Self::All;
        }
        Self::only(
            trimmed
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|name| !name.is_empty()),
        )
    }
}

/// Interpret the payload of the reserved `mergeable_attributes` entry.
impl TryFrom<&AttrValue> for MergePolicy {
    type Error = HtmlAttrsError;

    fn try_from(value: &AttrValue) -> Result<Self, Self::Error> {
        match value {
            AttrValue::Text(list) => Ok(Self::parse_list(list)),
            AttrValue::List(items) => items
                .iter()
                .map(|item| match item {
                    AttrValue::Text(name) => Ok(name.clone()),
                    other => Err(HtmlAttrsError::InvalidMergePolicy {
                        found: other.kind(),
                    }),
                })
                .collect::<Result<BTreeSet<_>, _>>()
                .map(Self::Only),
            other => Err(HtmlAttrsError::InvalidMergePolicy {
                found: other.kind(),
            }),
        }
    }
}

impl Serialize for MergePolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(names) => serializer.collect_seq(names),
        }
    }
}

struct MergePolicyVisitor;

impl<'de> Visitor<'de> for MergePolicyVisitor {
    type Value = MergePolicy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"all\", a list of attribute names, or a comma-separated string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(MergePolicy::parse_list(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut names = BTreeSet::new();
        while let Some(name) = seq.next_element::<String>()? {
            names.insert(name);
        }
        Ok(MergePolicy::Only(names))
    }
}

impl<'de> Deserialize<'de> for MergePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MergePolicyVisitor)
    }
}
