//! Strongly-typed cube-type identifier.

use std::fmt;

/// Identifies a cube type within a genotype.
///
/// `CubeTypeId(n)` corresponds to the n-th rule of the genotype string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeTypeId(pub u32);

impl CubeTypeId {
    /// Position of this cube type in the genotype's rule list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CubeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CubeTypeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
