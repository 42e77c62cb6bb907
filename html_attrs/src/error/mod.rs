//! Error types produced by merging, policy extraction, and configuration.

mod constructors;
mod conversions;
mod path;
mod types;

pub use path::KeyPath;
pub use types::{HtmlAttrsError, Operand};

/// Result alias used throughout the crate.
pub type HtmlAttrsResult<T> = Result<T, HtmlAttrsError>;

#[cfg(test)]
mod tests;
