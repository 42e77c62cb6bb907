//! Constructors for `HtmlAttrsError`.

use figment::Error as FigmentError;

use super::{HtmlAttrsError, KeyPath, Operand};
use crate::{AttrValue, ValueKind};

impl HtmlAttrsError {
    /// Describe a shape disagreement between two operands.
    ///
    /// The target is blamed first: if it does not have the `expected` shape
    /// the error names the target, otherwise it names `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use html_attrs::{HtmlAttrsError, KeyPath, Operand, ValueKind, attrs};
    ///
    /// let err = HtmlAttrsError::type_mismatch(
    ///     ValueKind::Map,
    ///     &attrs!([1]),
    ///     &attrs!({ a: 1 }),
    ///     &KeyPath::root(),
    /// );
    /// assert!(matches!(
    ///     err,
    ///     HtmlAttrsError::TypeMismatch { side: Operand::Other, found: ValueKind::List, .. }
    /// ));
    /// ```
    #[must_use]
    pub fn type_mismatch(
        expected: ValueKind,
        other: &AttrValue,
        target: &AttrValue,
        path: &KeyPath,
    ) -> Self {
        let (side, found) = if target.kind() == expected {
            (Operand::Other, other.kind())
        } else {
            (Operand::Target, target.kind())
        };
        Self::TypeMismatch {
            side,
            expected,
            found,
            path: path.clone(),
        }
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use html_attrs::HtmlAttrsError;
    /// let e = HtmlAttrsError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, HtmlAttrsError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }
}
