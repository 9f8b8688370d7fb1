//! Least-squares similarity registration (Kabsch with Umeyama scaling).

use crate::error::GeometryError;
use nalgebra::{Matrix3, Vector3};

/// `x ↦ scale · rotation · x + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Proper rotation matrix.
    pub rotation: Matrix3<f64>,
    /// Translation applied after scaling and rotating.
    pub translation: Vector3<f64>,
}

impl SimilarityTransform {
    /// The transform that leaves every point in place.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Map one point.
    pub fn apply(&self, p: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * p * self.scale + self.translation
    }
}

fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    points.iter().sum::<Vector3<f64>>() / points.len() as f64
}

/// Best similarity transform carrying `from[i]` onto `to[i]`.
///
/// Minimises `Σ |s·R·from[i] + t − to[i]|²` over proper rotations `R`,
/// scales `s` and translations `t`. When `from` has no spread at all the
/// result is the pure translation between centroids.
pub fn best_fit_transform(
    from: &[Vector3<f64>],
    to: &[Vector3<f64>],
) -> Result<SimilarityTransform, GeometryError> {
    if from.len() != to.len() {
        return Err(GeometryError::LengthMismatch {
            left: from.len(),
            right: to.len(),
        });
    }
    if from.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }

    let ca = centroid(from);
    let cb = centroid(to);
    let var_a: f64 = from.iter().map(|p| (p - ca).norm_squared()).sum();
    if var_a <= f64::EPSILON {
        return Ok(SimilarityTransform {
            translation: cb - ca,
            ..SimilarityTransform::identity()
        });
    }

    let h: Matrix3<f64> = from
        .iter()
        .zip(to)
        .map(|(p, q)| (p - ca) * (q - cb).transpose())
        .sum();
    let svd = h.svd(true, true);
    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return Err(GeometryError::SvdFailed);
    };
    let v = v_t.transpose();

    // Flip the weakest axis if the unconstrained optimum is a reflection.
    let mut correction = Vector3::new(1.0, 1.0, 1.0);
    if (v * u.transpose()).determinant() < 0.0 {
        correction[svd.singular_values.imin()] = -1.0;
    }
    let rotation = v * Matrix3::from_diagonal(&correction) * u.transpose();
    let scale = svd.singular_values.dot(&correction) / var_a;
    let translation = cb - rotation * ca * scale;

    Ok(SimilarityTransform {
        scale,
        rotation,
        translation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};

    fn cloud() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(0.0, 1.0, 3.0),
            Vector3::new(-1.0, 0.5, 1.0),
        ]
    }

    #[test]
    fn recovers_known_similarity() {
        let rotation = *Rotation3::from_euler_angles(0.3, -1.1, 2.0).matrix();
        let truth = SimilarityTransform {
            scale: 2.5,
            rotation,
            translation: Vector3::new(4.0, -2.0, 0.5),
        };
        let from = cloud();
        let to: Vec<_> = from.iter().map(|p| truth.apply(p)).collect();

        let fit = best_fit_transform(&from, &to).unwrap();
        assert!((fit.scale - truth.scale).abs() < 1e-9);
        assert!((fit.rotation - truth.rotation).norm() < 1e-9);
        assert!((fit.translation - truth.translation).norm() < 1e-9);
        for (p, q) in from.iter().zip(&to) {
            assert!((fit.apply(p) - q).norm() < 1e-9);
        }
    }

    #[test]
    fn never_returns_a_reflection() {
        let from = cloud();
        let to: Vec<_> = from.iter().map(|p| Vector3::new(-p.x, p.y, p.z)).collect();
        let fit = best_fit_transform(&from, &to).unwrap();
        assert!((fit.rotation.determinant() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_a_translation() {
        let from = [Vector3::new(1.0, 2.0, 3.0)];
        let to = [Vector3::new(0.0, 0.0, 1.0)];
        let fit = best_fit_transform(&from, &to).unwrap();
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.rotation, Matrix3::identity());
        assert!((fit.apply(&from[0]) - to[0]).norm() < 1e-12);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            best_fit_transform(&[], &[]),
            Err(GeometryError::EmptyPointSet)
        );
        assert_eq!(
            best_fit_transform(&cloud(), &cloud()[..2]),
            Err(GeometryError::LengthMismatch { left: 5, right: 2 })
        );
    }
}
