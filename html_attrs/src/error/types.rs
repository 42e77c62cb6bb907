//! Primary error enum for attribute merging.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

use super::KeyPath;
use crate::ValueKind;

/// Which merge operand a diagnostic refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operand {
    /// The structure already present.
    Other,
    /// The structure being applied on top.
    Target,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Other => "other",
            Self::Target => "target",
        })
    }
}

/// Errors that can occur while merging or configuring attributes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HtmlAttrsError {
    /// The operands of a mapping, sequence, or text merge disagree in shape.
    #[error("expected {side} to be {expected} or nil, found {found} at {path}")]
    TypeMismatch {
        /// Operand whose shape was wrong.
        side: Operand,
        /// Shape the merge branch required.
        expected: ValueKind,
        /// Shape actually supplied.
        found: ValueKind,
        /// Location of the mismatch inside the structure.
        path: KeyPath,
    },

    /// The reserved `mergeable_attributes` entry held an unusable value.
    #[error("mergeable attributes must be \"all\" or a list of names, found {found}")]
    InvalidMergePolicy {
        /// Shape of the rejected payload.
        found: ValueKind,
    },

    /// Configuration could not be extracted.
    #[error("failed to load attribute configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}
