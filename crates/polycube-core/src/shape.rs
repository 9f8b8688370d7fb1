//! Assembled shapes and their coarse signatures.

use crate::pos::Pos;
use std::fmt;

/// Size and sorted bounding-box dimensions of a shape.
///
/// Two shapes can only be equal up to rotation if their signatures
/// match, so phenotype maps bucket by signature before running the full
/// equality test. Displays as `"{size}_{d0}.{d1}.{d2}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeSignature {
    /// Number of cubes.
    pub size: usize,
    /// Bounding-box extents, sorted ascending.
    pub dims: [i32; 3],
}

impl fmt::Display for ShapeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}.{}.{}",
            self.size, self.dims[0], self.dims[1], self.dims[2]
        )
    }
}

/// The occupied cells of one finished assembly.
///
/// Cells keep the order in which they were placed; equality tests treat
/// them as an unordered set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Pos>,
}

impl Shape {
    /// Wrap a list of cells. Callers guarantee there are no duplicates.
    pub fn new(cells: Vec<Pos>) -> Self {
        Self { cells }
    }

    /// The cells in placement order.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Consume the shape, returning its cells.
    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }

    /// Number of cubes.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Minimum and maximum corner of the bounding box.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let first = *self.cells.first()?;
        Some(self.cells.iter().fold((first, first), |(lo, hi), p| {
            (
                Pos::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Pos::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }

    /// Bounding-box extents, sorted ascending. `[0, 0, 0]` when empty.
    pub fn dims(&self) -> [i32; 3] {
        let Some((lo, hi)) = self.bounds() else {
            return [0; 3];
        };
        let mut dims = [hi.x - lo.x + 1, hi.y - lo.y + 1, hi.z - lo.z + 1];
        dims.sort_unstable();
        dims
    }

    /// Size and sorted dims.
    pub fn signature(&self) -> ShapeSignature {
        ShapeSignature {
            size: self.size(),
            dims: self.dims(),
        }
    }

    /// Translate so the bounding box's minimum corner is the origin.
    pub fn normalized(&self) -> Shape {
        let Some((lo, _)) = self.bounds() else {
            return Shape::default();
        };
        Shape::new(self.cells.iter().map(|&p| p - lo).collect())
    }

    /// Cells sorted lexicographically.
    pub fn sorted_cells(&self) -> Vec<Pos> {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        cells
    }
}

impl From<Vec<Pos>> for Shape {
    fn from(cells: Vec<Pos>) -> Self {
        Self::new(cells)
    }
}

impl FromIterator<Pos> for Shape {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
