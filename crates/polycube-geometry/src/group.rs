//! The rotation group of the cube as exact integer matrices.

use nalgebra::{Matrix3, Rotation3, UnitQuaternion};
use polycube_core::{Direction, Pos};

use crate::error::GeometryError;

/// A proper rotation of the cubic lattice.
///
/// Stored as a signed permutation matrix with determinant `+1`, so
/// applying it to integer coordinates is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeRotation {
    m: [[i32; 3]; 3],
}

impl LatticeRotation {
    /// The identity rotation.
    pub const IDENTITY: LatticeRotation = LatticeRotation {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Row-major matrix entries.
    pub fn matrix(&self) -> [[i32; 3]; 3] {
        self.m
    }

    /// Rotate a lattice position about the origin.
    pub fn apply(&self, p: Pos) -> Pos {
        let [x, y, z] = self.apply_i64([p.x.into(), p.y.into(), p.z.into()]);
        // Signed permutations only reorder and negate components.
        Pos::new(x as i32, y as i32, z as i32)
    }

    /// Rotate a wide integer vector about the origin.
    pub fn apply_i64(&self, v: [i64; 3]) -> [i64; 3] {
        let row = |r: [i32; 3]| {
            i64::from(r[0]) * v[0] + i64::from(r[1]) * v[1] + i64::from(r[2]) * v[2]
        };
        [row(self.m[0]), row(self.m[1]), row(self.m[2])]
    }

    /// Rotate a lattice direction.
    ///
    /// Fails with [`GeometryError::OffLattice`] if the matrix does not map
    /// the unit offset onto another unit offset.
    pub fn apply_direction(&self, d: Direction) -> Result<Direction, GeometryError> {
        let o = d.offset();
        let v = self.apply_i64([o[0].into(), o[1].into(), o[2].into()]);
        let mapped = v.map(|c| i32::try_from(c).unwrap_or(i32::MAX));
        Direction::from_offset(mapped).ok_or(GeometryError::OffLattice {
            vector: v.map(|c| c as f64),
        })
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &LatticeRotation) -> LatticeRotation {
        let mut m = [[0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        LatticeRotation { m }
    }

    /// The inverse rotation (the transpose).
    pub fn inverse(&self) -> LatticeRotation {
        let mut m = [[0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[j][i];
            }
        }
        LatticeRotation { m }
    }

    /// Matrix determinant; `+1` for every group element.
    pub fn determinant(&self) -> i32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// The same rotation as a floating-point matrix.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_fn(|i, j| f64::from(self.m[i][j]))
    }

    /// The same rotation as a unit quaternion.
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.to_matrix()))
    }
}

impl Default for LatticeRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// All 24 proper rotations of the cube, identity first.
///
/// Built by enumerating the 48 signed permutation matrices and keeping
/// those with determinant `+1`.
pub fn rotation_group() -> Vec<LatticeRotation> {
    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut group = Vec::with_capacity(24);
    for perm in PERMUTATIONS {
        for signs in 0u8..8 {
            let mut m = [[0; 3]; 3];
            for (row, &col) in perm.iter().enumerate() {
                m[row][col] = if signs & (1 << row) == 0 { 1 } else { -1 };
            }
            let r = LatticeRotation { m };
            if r.determinant() == 1 {
                group.push(r);
            }
        }
    }
    group
}
