//! Error types for the rule codec.

use polycube_core::RuleError;
use polycube_geometry::GeometryError;
use std::fmt;

/// Errors from parsing or encoding a genotype string.
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
    /// One cube type in the string could not be decoded.
    MalformedRule {
        /// Zero-based index of the offending cube type.
        cube_type: usize,
        /// Human-readable description of what went wrong.
        reason: String,
    },
    /// A colour does not fit the five magnitude bits of the hex format.
    ColorOutOfRange {
        /// The colour that was too large.
        color: i32,
    },
    /// The decoded rules do not form a valid genotype.
    Rule(RuleError),
    /// An orientation could not be converted to or from its index.
    Geometry(GeometryError),
}

impl CodecError {
    pub(crate) fn malformed(cube_type: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            cube_type,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRule { cube_type, reason } => {
                write!(f, "malformed rule for cube type {cube_type}: {reason}")
            }
            Self::ColorOutOfRange { color } => {
                write!(f, "colour {color} does not fit the hex encoding")
            }
            Self::Rule(e) => write!(f, "invalid genotype: {e}"),
            Self::Geometry(e) => write!(f, "orientation: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for CodecError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<GeometryError> for CodecError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
