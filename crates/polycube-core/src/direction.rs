//! The six axis-aligned lattice directions.

use std::fmt;

/// One of the six canonical unit vectors of the cubic lattice.
///
/// The discriminant is the direction index used everywhere in the
/// workspace (rule face order, constraint slots, hex encoding):
/// `0:-x, 1:+x, 2:-y, 3:+y, 4:-z, 5:+z`. Opposite directions differ only
/// in the lowest bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `(-1, 0, 0)`
    NegX = 0,
    /// `(1, 0, 0)`
    PosX = 1,
    /// `(0, -1, 0)`
    NegY = 2,
    /// `(0, 1, 0)`
    PosY = 3,
    /// `(0, 0, -1)`
    NegZ = 4,
    /// `(0, 0, 1)`
    PosZ = 5,
}

impl Direction {
    /// All six directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Direction index in `0..6`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a direction by index. Returns `None` for `i >= 6`.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// The direction pointing the other way along the same axis.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::ALL[self.index() ^ 1]
    }

    /// Axis number: 0 for x, 1 for y, 2 for z.
    #[inline]
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    /// `-1` for the negative half-axis, `+1` for the positive one.
    #[inline]
    pub fn sign(self) -> i32 {
        if self.index() % 2 == 0 {
            -1
        } else {
            1
        }
    }

    /// Integer unit vector of this direction.
    pub fn offset(self) -> [i32; 3] {
        let mut v = [0; 3];
        v[self.axis()] = self.sign();
        v
    }

    /// Inverse of [`offset`](Self::offset). Returns `None` unless `v` is
    /// exactly one of the six unit vectors.
    pub fn from_offset(v: [i32; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == v)
    }

    /// Whether `other` lies in the plane of a face with this normal.
    #[inline]
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.axis() != other.axis()
    }

    /// Orientation vector of a face on this side at rotation state 0.
    ///
    /// Every other rotation state is this vector turned in quarter steps
    /// about the face normal.
    pub fn default_orientation(self) -> Direction {
        match self {
            Self::NegX => Self::NegY,
            Self::PosX => Self::PosY,
            Self::NegY => Self::NegZ,
            Self::PosY => Self::PosZ,
            Self::NegZ => Self::NegX,
            Self::PosZ => Self::PosX,
        }
    }

    /// Integer cross product `self × other`, as a direction.
    ///
    /// Returns `None` for parallel inputs, whose cross product is zero.
    pub fn cross(self, other: Direction) -> Option<Direction> {
        let a = self.offset();
        let b = other.offset();
        Self::from_offset([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NegX => "-x",
            Self::PosX => "+x",
            Self::NegY => "-y",
            Self::PosY => "+y",
            Self::NegZ => "-z",
            Self::PosZ => "+z",
        };
        f.write_str(s)
    }
}
