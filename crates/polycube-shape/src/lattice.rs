//! Exact equality and canonical forms under the cube rotation group.

use polycube_core::{Pos, Shape};
use polycube_geometry::{rotation_group, LatticeRotation};

/// Cells centred on their centroid, scaled by the cell count so the
/// result stays integral: `n·p − Σp`.
fn centred(shape: &Shape) -> Vec<[i64; 3]> {
    let n = shape.size() as i64;
    let sum = shape.cells().iter().fold([0i64; 3], |acc, p| {
        [
            acc[0] + i64::from(p.x),
            acc[1] + i64::from(p.y),
            acc[2] + i64::from(p.z),
        ]
    });
    shape
        .cells()
        .iter()
        .map(|p| {
            [
                n * i64::from(p.x) - sum[0],
                n * i64::from(p.y) - sum[1],
                n * i64::from(p.z) - sum[2],
            ]
        })
        .collect()
}

/// Whether `b` is a translated and properly rotated copy of `a`.
///
/// Cell order is ignored. Mirror images are not equal unless the shape
/// is achiral.
pub fn lattice_equal(a: &Shape, b: &Shape) -> bool {
    if a.size() != b.size() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    if a.dims() != b.dims() {
        return false;
    }
    let from = centred(a);
    let mut to = centred(b);
    to.sort_unstable();
    rotation_group().iter().any(|r| {
        let mut rotated: Vec<[i64; 3]> = from.iter().map(|&v| r.apply_i64(v)).collect();
        rotated.sort_unstable();
        rotated == to
    })
}

/// Rotate every cell about the origin.
pub fn rotate_shape(shape: &Shape, rotation: &LatticeRotation) -> Shape {
    shape.cells().iter().map(|&p| rotation.apply(p)).collect()
}

/// The representative of `shape`'s rotation class.
///
/// For each of the 24 rotations the shape is rotated, translated so its
/// minimum corner is the origin, and sorted; the lexicographically
/// smallest cell list wins. Two shapes are [`lattice_equal`] exactly
/// when their canonical forms are equal.
pub fn canonical_form(shape: &Shape) -> Shape {
    rotation_group()
        .iter()
        .map(|r| rotate_shape(shape, r).normalized().sorted_cells())
        .min()
        .map(Shape::new)
        .unwrap_or_default()
}

/// Canonical form as a compact string, suitable as a map key.
pub fn canonical_key(shape: &Shape) -> String {
    canonical_form(shape)
        .cells()
        .iter()
        .map(|p: &Pos| format!("{},{},{}", p.x, p.y, p.z))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_test_utils::{chiral_tetracube, l_tromino, mirror_x, rod, shape, translate};

    #[test]
    fn empty_shapes_are_equal() {
        assert!(lattice_equal(&Shape::default(), &Shape::default()));
        assert!(!lattice_equal(&Shape::default(), &rod(1)));
    }

    #[test]
    fn size_and_dims_mismatch() {
        assert!(!lattice_equal(&rod(3), &rod(4)));
        assert!(!lattice_equal(&rod(3), &l_tromino()));
    }

    #[test]
    fn rod_along_any_axis_is_the_same() {
        let along_z = shape(&[[5, 5, 0], [5, 5, 1], [5, 5, 2]]);
        assert!(lattice_equal(&rod(3), &along_z));
    }

    #[test]
    fn mirror_image_of_chiral_shape_differs() {
        let s = chiral_tetracube();
        assert!(!lattice_equal(&s, &mirror_x(&s)));
        assert_ne!(canonical_form(&s), canonical_form(&mirror_x(&s)));
    }

    #[test]
    fn mirror_image_of_achiral_shape_matches() {
        let s = l_tromino();
        assert!(lattice_equal(&s, &mirror_x(&s)));
    }

    #[test]
    fn canonical_form_is_translation_invariant() {
        let s = chiral_tetracube();
        assert_eq!(canonical_form(&s), canonical_form(&translate(&s, [-4, 9, 2])));
        assert_eq!(canonical_key(&rod(2)), "0,0,0;0,0,1");
    }
}
