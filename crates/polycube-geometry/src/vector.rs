//! Direction vectors, lattice snapping and signed angles.

use crate::error::GeometryError;
use nalgebra::Vector3;
use polycube_core::Direction;
use std::f64::consts::PI;

/// Maximum distance a rotated vector may sit from a lattice direction
/// and still snap onto it.
pub const SNAP_TOLERANCE: f64 = 1e-4;

/// Unit vector of a lattice direction.
pub fn direction_vector(dir: Direction) -> Vector3<f64> {
    let [x, y, z] = dir.offset();
    Vector3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Snap a near-unit vector onto the nearest lattice direction.
///
/// Rounds each component and accepts the result only if it is one of the
/// six unit vectors and the rounding moved the vector by at most
/// [`SNAP_TOLERANCE`].
pub fn snap_direction(v: &Vector3<f64>) -> Result<Direction, GeometryError> {
    let off_lattice = || GeometryError::OffLattice {
        vector: [v.x, v.y, v.z],
    };
    let rounded = v.map(f64::round);
    if (v - rounded).norm() > SNAP_TOLERANCE {
        return Err(off_lattice());
    }
    // Rounded components are exact small integers; `as` cannot truncate.
    let offset = [rounded.x as i32, rounded.y as i32, rounded.z as i32];
    Direction::from_offset(offset).ok_or_else(off_lattice)
}

/// Angle of the rotation about `axis` that carries `v1` onto `v2`.
///
/// Computed as `atan2(axis·(v1×v2), v1·v2)`, normalised into `(-π, π]`.
pub fn signed_angle(v1: &Vector3<f64>, v2: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let a = axis.dot(&v1.cross(v2)).atan2(v1.dot(v2));
    if a <= -PI {
        a + 2.0 * PI
    } else {
        a
    }
}
