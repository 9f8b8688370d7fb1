//! Error types for geometry operations.

use polycube_core::RuleError;
use std::error::Error;
use std::fmt;

/// Errors from rotating faces or registering point sets.
///
/// `OffLattice` and `NotAPermutation` mean a rotation was not a cube
/// symmetry; they indicate a modelling bug rather than bad user input.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A rotated vector is not within tolerance of a lattice direction.
    OffLattice {
        /// The vector that failed to snap.
        vector: [f64; 3],
    },
    /// A rotation sent two faces of a rule onto the same side.
    NotAPermutation,
    /// Point sets passed to registration have different lengths.
    LengthMismatch {
        /// Number of points in the first set.
        left: usize,
        /// Number of points in the second set.
        right: usize,
    },
    /// Registration needs at least one point.
    EmptyPointSet,
    /// The singular value decomposition did not produce both factors.
    SvdFailed,
    /// A rotated rule failed validation.
    Rule(RuleError),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffLattice { vector } => write!(
                f,
                "vector ({}, {}, {}) does not snap to a lattice direction",
                vector[0], vector[1], vector[2]
            ),
            Self::NotAPermutation => write!(f, "rotation does not permute the six faces"),
            Self::LengthMismatch { left, right } => {
                write!(f, "point sets differ in length: {left} vs {right}")
            }
            Self::EmptyPointSet => write!(f, "point set is empty"),
            Self::SvdFailed => write!(f, "singular value decomposition failed"),
            Self::Rule(e) => write!(f, "rule: {e}"),
        }
    }
}

impl Error for GeometryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for GeometryError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
