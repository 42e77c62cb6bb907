//! Conversions between external error types and `HtmlAttrsError`.

use figment::Error as FigmentError;

use super::HtmlAttrsError;

impl From<FigmentError> for HtmlAttrsError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}

impl From<HtmlAttrsError> for FigmentError {
    /// Allow using `?` in tests that return `figment::Error`.
    fn from(e: HtmlAttrsError) -> Self {
        match e {
            // Keep the original Figment error with its metadata.
            HtmlAttrsError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
