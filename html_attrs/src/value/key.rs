//! Attribute keys with indifferent lookup semantics.
//!
//! Keys remember the form they were written in. Identifier-form keys come from
//! literal `name: value` entries, text-form keys from `"name" => value`
//! entries and other string sources. Both forms share one canonical spelling,
//! which is what merge policies and lookups compare.

use std::fmt;

use serde::{Serialize, Serializer};

/// The spelling form an [`AttrKey`] was created with.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyForm {
    /// Identifier form, e.g. `class: "btn"` in [`crate::attrs!`].
    Name,
    /// Text form, e.g. `"class" => "btn"` in [`crate::attrs!`].
    Text,
}

/// A key in an [`crate::AttrMap`].
///
/// Storage distinguishes the two forms, so a map may hold both `class` and
/// `"class"`. Use [`AttrKey::indifferent_eq`] or
/// [`crate::AttrMap::get_indifferent`] when the form should not matter.
///
/// # Examples
///
/// ```rust
/// use html_attrs::AttrKey;
///
/// let name = AttrKey::name("class");
/// let text = AttrKey::text("class");
/// assert_ne!(name, text);
/// assert!(name.indifferent_eq(&text));
/// assert_eq!(name.counterpart(), text);
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AttrKey {
    /// Identifier-form key.
    Name(String),
    /// Text-form key.
    Text(String),
}

impl AttrKey {
    /// Build an identifier-form key.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Build a text-form key.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Canonical spelling used for lookups, policies, and rendering.
    #[must_use]
    pub fn canonical(&self) -> &str {
        match self {
            Self::Name(spelling) | Self::Text(spelling) => spelling,
        }
    }

    /// Form this key was written in.
    #[must_use]
    pub const fn form(&self) -> KeyForm {
        match self {
            Self::Name(_) => KeyForm::Name,
            Self::Text(_) => KeyForm::Text,
        }
    }

    /// The same spelling in the opposite form.
    #[must_use]
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Name(spelling) => Self::Text(spelling.clone()),
            Self::Text(spelling) => Self::Name(spelling.clone()),
        }
    }

    /// Whether both keys share a canonical spelling, regardless of form.
    #[must_use]
    pub fn indifferent_eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    /// Consume the key and return its spelling.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Name(spelling) | Self::Text(spelling) => spelling,
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

impl Serialize for AttrKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

impl From<&str> for AttrKey {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for AttrKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&AttrKey> for AttrKey {
    fn from(key: &Self) -> Self {
        key.clone()
    }
}
