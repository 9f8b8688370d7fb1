//! Algebraic properties of lattice equality.

use polycube_core::{Pos, Shape};
use polycube_geometry::rotation_group;
use polycube_shape::{canonical_form, lattice_equal, rotate_shape};
use polycube_test_utils::{reversed, translate};
use proptest::prelude::*;

/// Random connected-ish polycubes built as a random walk of unit steps.
fn arb_shape() -> impl Strategy<Value = Shape> {
    prop::collection::vec(0usize..6, 0..12).prop_map(|steps| {
        let mut cells = vec![Pos::ORIGIN];
        let mut at = Pos::ORIGIN;
        for s in steps {
            at = at.step(polycube_core::Direction::ALL[s]);
            if !cells.contains(&at) {
                cells.push(at);
            }
        }
        Shape::new(cells)
    })
}

proptest! {
    #[test]
    fn equal_under_every_rotation(s in arb_shape()) {
        for r in rotation_group() {
            prop_assert!(lattice_equal(&s, &rotate_shape(&s, &r)));
        }
    }

    #[test]
    fn reflexive_and_order_free(s in arb_shape(), dx in -5i32..5, dy in -5i32..5) {
        prop_assert!(lattice_equal(&s, &s));
        prop_assert!(lattice_equal(&s, &reversed(&s)));
        prop_assert!(lattice_equal(&s, &translate(&s, [dx, dy, 0])));
    }

    #[test]
    fn symmetric(a in arb_shape(), b in arb_shape()) {
        prop_assert_eq!(lattice_equal(&a, &b), lattice_equal(&b, &a));
    }

    #[test]
    fn canonical_form_decides_equality(a in arb_shape(), b in arb_shape(), r in 0usize..24) {
        let b_rot = rotate_shape(&b, &rotation_group()[r]);
        prop_assert_eq!(
            lattice_equal(&a, &b_rot),
            canonical_form(&a) == canonical_form(&b_rot)
        );
        prop_assert_eq!(canonical_form(&b), canonical_form(&b_rot));
    }
}
