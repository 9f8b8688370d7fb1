//! Test fixtures for polycube development.
//!
//! [`fixtures`] holds small genotypes with known assembly behaviour. The
//! free functions here build shapes and rotate them for equality tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use polycube_core::{Pos, Shape};

/// Build a shape from coordinate triples.
pub fn shape(cells: &[[i32; 3]]) -> Shape {
    cells.iter().copied().map(Pos::from).collect()
}

/// A straight rod of `n` cubes along x.
pub fn rod(n: i32) -> Shape {
    (0..n).map(|x| Pos::new(x, 0, 0)).collect()
}

/// Three cubes bent at a right angle.
pub fn l_tromino() -> Shape {
    shape(&[[0, 0, 0], [1, 0, 0], [0, 1, 0]])
}

/// A chiral four-cube shape with no rotational symmetry.
///
/// Its mirror image is not a rotation of it, which makes it the standard
/// probe for reflection bugs in equality tests.
pub fn chiral_tetracube() -> Shape {
    shape(&[[0, 0, 0], [1, 0, 0], [1, 1, 0], [1, 1, 1]])
}

/// Mirror a shape through the `x = 0` plane.
pub fn mirror_x(s: &Shape) -> Shape {
    s.cells().iter().map(|p| Pos::new(-p.x, p.y, p.z)).collect()
}

/// Translate every cell by `offset`.
pub fn translate(s: &Shape, offset: [i32; 3]) -> Shape {
    let d = Pos::from(offset);
    s.cells().iter().map(|&p| p + d).collect()
}

/// Reverse the cell order, which must not affect equality.
pub fn reversed(s: &Shape) -> Shape {
    s.cells().iter().rev().copied().collect()
}
