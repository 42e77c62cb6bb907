//! Locations inside an attribute structure.

use std::fmt;

/// Dotted path of canonical key names from the root of a merge.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from outermost to innermost.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_owned());
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
