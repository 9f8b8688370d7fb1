//! Quaternion rotation of faces and rules.
//!
//! Rotations here are always quarter or half turns about lattice axes, so
//! every rotated normal and orientation vector lands back on the lattice
//! up to floating-point error. [`snap_direction`] absorbs that error and
//! reports anything larger as [`GeometryError::OffLattice`].

use crate::error::GeometryError;
use crate::vector::{direction_vector, signed_angle, snap_direction};
use nalgebra::{Unit, UnitQuaternion};
use polycube_core::{Direction, Face, Rule};
use std::f64::consts::{FRAC_PI_2, PI};

/// Rotation by `angle` radians about a lattice axis (right-hand rule).
pub fn rotation_about(axis: Direction, angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(direction_vector(axis)), angle)
}

/// Shortest-arc rotation carrying direction `from` onto `to`.
///
/// Antiparallel directions have no unique shortest arc; they get a half
/// turn about `from`'s default orientation axis, which is perpendicular
/// to both.
pub fn rotation_from_to(from: Direction, to: Direction) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(&direction_vector(from), &direction_vector(to))
        .unwrap_or_else(|| rotation_about(from.default_orientation(), PI))
}

/// Rotate the face sitting on side `dir`.
///
/// Returns the side the face lands on and the face with its orientation
/// vector rotated. The colour is carried unchanged.
pub fn rotate_face(
    dir: Direction,
    face: Face,
    q: &UnitQuaternion<f64>,
) -> Result<(Direction, Face), GeometryError> {
    let normal = snap_direction(&q.transform_vector(&direction_vector(dir)))?;
    let orientation = snap_direction(&q.transform_vector(&direction_vector(face.orientation)))?;
    Ok((normal, Face::new(face.color, orientation)))
}

/// Rotate every face of a rule, producing the permuted rule.
pub fn rotate_rule(rule: &Rule, q: &UnitQuaternion<f64>) -> Result<Rule, GeometryError> {
    let mut faces = Direction::ALL.map(Face::inert);
    let mut filled = [false; 6];
    for dir in Direction::ALL {
        let (to, face) = rotate_face(dir, rule.face(dir), q)?;
        if std::mem::replace(&mut filled[to.index()], true) {
            return Err(GeometryError::NotAPermutation);
        }
        faces[to.index()] = face;
    }
    Ok(Rule::new(faces)?)
}

/// Orientation vector of a face on side `dir` at rotation state `index`.
///
/// State `k` is [`Direction::default_orientation`] turned `k` quarter
/// turns about the face normal. Only the low two bits of `index` matter.
pub fn face_orientation(dir: Direction, index: u8) -> Result<Direction, GeometryError> {
    let q = rotation_about(dir, f64::from(index % 4) * FRAC_PI_2);
    snap_direction(&q.transform_vector(&direction_vector(dir.default_orientation())))
}

/// Inverse of [`face_orientation`]: the rotation state in `0..4` of an
/// in-plane orientation vector.
pub fn orientation_index(dir: Direction, orientation: Direction) -> u8 {
    let angle = signed_angle(
        &direction_vector(dir.default_orientation()),
        &direction_vector(orientation),
        &direction_vector(dir),
    );
    let quarter_turns = (angle / FRAC_PI_2).round() as i32;
    quarter_turns.rem_euclid(4) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        (0usize..6).prop_map(|i| Direction::ALL[i])
    }

    fn arb_rule() -> impl Strategy<Value = Rule> {
        (
            prop::array::uniform6(-31i32..=31),
            prop::array::uniform6(0u8..4),
        )
            .prop_map(|(colors, orients)| {
                let mut faces = Direction::ALL.map(Face::inert);
                for dir in Direction::ALL {
                    let i = dir.index();
                    faces[i] = Face::new(colors[i], face_orientation(dir, orients[i]).unwrap());
                }
                Rule::new(faces).unwrap()
            })
    }

    #[test]
    fn from_to_lands_on_target() {
        for from in Direction::ALL {
            for to in Direction::ALL {
                let q = rotation_from_to(from, to);
                let landed = snap_direction(&q.transform_vector(&direction_vector(from)));
                assert_eq!(landed, Ok(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn face_orientation_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(face_orientation(dir, 0), Ok(dir.default_orientation()));
            for k in 0..4u8 {
                let v = face_orientation(dir, k).unwrap();
                assert!(dir.is_perpendicular(v));
                assert_eq!(orientation_index(dir, v), k);
            }
        }
    }

    #[test]
    fn quarter_turn_is_cross_product() {
        // Turning v by +90° about a perpendicular axis a gives a × v.
        for axis in Direction::ALL {
            for v in Direction::ALL.into_iter().filter(|v| axis.is_perpendicular(*v)) {
                let turned = rotation_about(axis, FRAC_PI_2).transform_vector(&direction_vector(v));
                assert_eq!(snap_direction(&turned).ok(), axis.cross(v));
            }
        }
    }

    #[test]
    fn rotate_rule_moves_face_with_colour() {
        let rule = Rule::from_colors([7, 0, 0, 0, 0, 0]);
        let q = rotation_from_to(Direction::NegX, Direction::PosZ);
        let rotated = rotate_rule(&rule, &q).unwrap();
        assert_eq!(rotated.face(Direction::PosZ).color, 7);
        assert_eq!(rotated.active_directions().len(), 1);
    }

    #[test]
    fn non_lattice_rotation_is_reported() {
        let rule = Rule::from_colors([1, 0, 0, 0, 0, 0]);
        let q = rotation_about(Direction::PosZ, 0.3);
        assert!(matches!(
            rotate_rule(&rule, &q),
            Err(GeometryError::OffLattice { .. })
        ));
    }

    proptest! {
        #[test]
        fn four_quarter_turns_restore_rule(rule in arb_rule(), axis in arb_direction()) {
            let q = rotation_about(axis, FRAC_PI_2);
            let mut r = rule;
            for _ in 0..4 {
                r = rotate_rule(&r, &q).unwrap();
            }
            prop_assert_eq!(r, rule);
        }

        #[test]
        fn rotation_preserves_colour_multiset(rule in arb_rule(), from in arb_direction(), to in arb_direction()) {
            let r = rotate_rule(&rule, &rotation_from_to(from, to)).unwrap();
            let mut before: Vec<i32> = rule.faces().iter().map(|f| f.color).collect();
            let mut after: Vec<i32> = r.faces().iter().map(|f| f.color).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
            prop_assert_eq!(r.face(to).color, rule.face(from).color);
        }
    }
}
