//! Similarity-invariant equality for point sets with known correspondence.

use nalgebra::Vector3;
use polycube_core::Shape;
use polycube_geometry::{best_fit_transform, GeometryError};

/// Relative tolerance on the worst per-point residual.
pub const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Cell positions as floating-point vectors, in cell order.
pub fn to_points(shape: &Shape) -> Vec<Vector3<f64>> {
    shape
        .cells()
        .iter()
        .map(|p| Vector3::new(f64::from(p.x), f64::from(p.y), f64::from(p.z)))
        .collect()
}

/// Whether `b[i]` is the image of `a[i]` under one similarity transform
/// (uniform scale, proper rotation, translation).
///
/// Unlike [`lattice_equal`](crate::lattice_equal) this relies on index
/// correspondence and accepts arbitrary rotation angles and scales. Sets
/// of different length are never equal; two empty sets are.
pub fn continuous_equal(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> Result<bool, GeometryError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    if a.is_empty() {
        return Ok(true);
    }
    let transform = best_fit_transform(a, b)?;
    let scale = a
        .iter()
        .chain(b)
        .flat_map(|v| v.iter().map(|c| c.abs()))
        .fold(1.0_f64, f64::max);
    let worst = a
        .iter()
        .zip(b)
        .map(|(p, q)| (transform.apply(p) - q).norm())
        .fold(0.0_f64, f64::max);
    Ok(worst < RESIDUAL_TOLERANCE * scale)
}
