//! Error types for the assembly engine.

use crate::config::ConfigError;
use polycube_core::{Pos, RuleError};
use polycube_geometry::GeometryError;
use std::error::Error;
use std::fmt;

/// Errors from driving an [`Assembler`](crate::Assembler).
///
/// Unbounded growth is an [`AssemblyOutcome`](crate::AssemblyOutcome),
/// not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum AssemblyError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A rotation left the lattice while fitting a rule.
    Geometry(GeometryError),
    /// A cube type lookup failed.
    Rule(RuleError),
    /// [`seed`](crate::Assembler::seed) was called twice.
    AlreadySeeded,
    /// A step was requested before [`seed`](crate::Assembler::seed).
    NotSeeded,
    /// A cube was placed on a position that is already occupied.
    Occupied {
        /// The occupied position.
        pos: Pos,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid assembly config: {e}"),
            Self::Geometry(e) => write!(f, "geometry: {e}"),
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::AlreadySeeded => write!(f, "assembly has already been seeded"),
            Self::NotSeeded => write!(f, "assembly has not been seeded"),
            Self::Occupied { pos } => write!(f, "position {pos} is already occupied"),
        }
    }
}

impl Error for AssemblyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Geometry(e) => Some(e),
            Self::Rule(e) => Some(e),
            Self::AlreadySeeded | Self::NotSeeded | Self::Occupied { .. } => None,
        }
    }
}

impl From<ConfigError> for AssemblyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GeometryError> for AssemblyError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<RuleError> for AssemblyError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
