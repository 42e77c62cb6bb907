//! The attribute structure: a recursive value of mappings, sequences, text,
//! and opaque scalars.
//!
//! Values are owned trees. They cannot form cycles, so recursion over a value
//! is bounded by its nesting depth.

mod convert;
mod key;
mod map;

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

pub use key::{AttrKey, KeyForm};
pub use map::AttrMap;

/// A node in an attribute structure.
///
/// `Nil` doubles as the "absent" operand of a merge: merging anything with
/// `Nil` returns the other side untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AttrValue {
    /// Nested mapping, e.g. the `data` attribute.
    Map(AttrMap),
    /// Ordered sequence.
    List(Vec<AttrValue>),
    /// Text scalar such as a class list.
    Text(String),
    /// Opaque numeric scalar.
    Number(serde_json::Number),
    /// Opaque boolean scalar.
    Bool(bool),
    /// Absent value.
    #[default]
    Nil,
}

/// Variant tag of an [`AttrValue`], used in diagnostics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// [`AttrValue::Map`].
    Map,
    /// [`AttrValue::List`].
    List,
    /// [`AttrValue::Text`].
    Text,
    /// [`AttrValue::Number`].
    Number,
    /// [`AttrValue::Bool`].
    Bool,
    /// [`AttrValue::Nil`].
    Nil,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Map => "a mapping",
            Self::List => "a sequence",
            Self::Text => "text",
            Self::Number => "a number",
            Self::Bool => "a boolean",
            Self::Nil => "nil",
        })
    }
}

impl AttrValue {
    /// Variant tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Map(_) => ValueKind::Map,
            Self::List(_) => ValueKind::List,
            Self::Text(_) => ValueKind::Text,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::Nil => ValueKind::Nil,
        }
    }

    /// Whether this is [`AttrValue::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Whether this is text containing only whitespace, or no characters.
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(text) if is_blank(text))
    }

    /// Borrow the mapping, if this is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the sequence, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Take the mapping out of this value.
    ///
    /// # Errors
    ///
    /// Returns the value unchanged when it is not a mapping.
    pub fn into_map(self) -> Result<AttrMap, Self> {
        match self {
            Self::Map(map) => Ok(map),
            other => Err(other),
        }
    }

    /// Index into a mapping ignoring key form. Returns `None` for non-maps.
    #[must_use]
    pub fn get(&self, key: &AttrKey) -> Option<&Self> {
        self.as_map().and_then(|map| map.get_indifferent(key))
    }

    /// Encode as JSON. Keys collapse to their canonical spelling; when a map
    /// holds both forms of a key, the later entry wins.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.canonical().to_owned(), value.to_json()))
                    .collect(),
            ),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Text(text) => Value::String(text.clone()),
            Self::Number(number) => Value::Number(number.clone()),
            Self::Bool(flag) => Value::Bool(*flag),
            Self::Nil => Value::Null,
        }
    }
}

/// Text counts as blank when it is empty or whitespace only.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Map(map) => map.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => number.serialize(serializer),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Nil => serializer.serialize_unit(),
        }
    }
}
