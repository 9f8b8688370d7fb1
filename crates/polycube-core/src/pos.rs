//! Integer lattice positions.

use crate::direction::Direction;
use std::fmt;
use std::ops::{Add, Sub};

/// A cell of the integer 3D lattice.
///
/// Used directly as the key of occupancy and frontier maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// x coordinate.
    pub x: i32,
    /// y coordinate.
    pub y: i32,
    /// z coordinate.
    pub z: i32,
}

impl Pos {
    /// The lattice origin, where every assembly is seeded.
    pub const ORIGIN: Pos = Pos { x: 0, y: 0, z: 0 };

    /// Construct a position from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array, `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// The adjacent cell one step along `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Pos {
        self + Pos::from(dir.offset())
    }

    /// Largest absolute component (L∞ norm).
    pub fn max_abs(self) -> u32 {
        self.x
            .unsigned_abs()
            .max(self.y.unsigned_abs())
            .max(self.z.unsigned_abs())
    }
}

impl From<[i32; 3]> for Pos {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}
