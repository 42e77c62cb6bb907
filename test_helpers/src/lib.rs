//! Test helpers shared across the `html_attrs` suites.
//!
//! The crate provides a figment jail wrapper for configuration tests, text
//! helpers for behavioural step placeholders, and canonical attribute
//! fixtures.

pub mod figment;
pub mod fixtures;
pub mod text;
