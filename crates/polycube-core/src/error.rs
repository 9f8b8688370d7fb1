//! Error types for constructing rules and genotypes.

use crate::direction::Direction;
use std::error::Error;
use std::fmt;

/// Errors from building a [`Rule`](crate::Rule) or [`Genotype`](crate::Genotype).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A genotype must contain at least one cube type.
    EmptyGenotype,
    /// A face orientation vector is parallel to the face normal.
    OrientationNotInPlane {
        /// The face whose orientation is invalid.
        direction: Direction,
        /// The offending orientation.
        orientation: Direction,
    },
    /// A cube-type index does not exist in the genotype.
    UnknownCubeType {
        /// The requested index.
        index: u32,
        /// Number of cube types in the genotype.
        cube_types: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGenotype => write!(f, "genotype has no cube types"),
            Self::OrientationNotInPlane {
                direction,
                orientation,
            } => write!(
                f,
                "face {direction} has orientation {orientation} outside the face plane"
            ),
            Self::UnknownCubeType { index, cube_types } => write!(
                f,
                "cube type {index} out of range (genotype has {cube_types} cube types)"
            ),
        }
    }
}

impl Error for RuleError {}
