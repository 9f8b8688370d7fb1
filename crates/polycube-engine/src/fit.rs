//! Matching a cube type against a candidate's constraint slots.

use crate::frontier::Slots;
use polycube_core::{Direction, Rule};
use polycube_geometry::{
    direction_vector, rotate_rule, rotation_about, rotation_from_to, signed_angle, GeometryError,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

/// Try to bind `rule` into a candidate.
///
/// Constrained slots are visited in random order. For the first slot `i`
/// that some face `j` of the rule binds to (faces also visited in random
/// order), the rule is turned so `j` lands on `i`, then spun about `i`.
/// With `torsion` the spin aligns the two orientation vectors; without
/// it the spin is a random quarter-turn multiple.
///
/// Only the first binding slot is checked. Other constrained slots may
/// end up mismatched, which the assembler records as bond mismatches.
///
/// Returns the rotated rule, or `None` if no face binds any slot.
pub fn rule_fits<R: Rng + ?Sized>(
    slots: &Slots,
    rule: &Rule,
    torsion: bool,
    rng: &mut R,
) -> Result<Option<Rule>, GeometryError> {
    let mut slot_order = Direction::ALL;
    slot_order.shuffle(rng);
    for i in slot_order {
        let Some(slot) = slots[i.index()].filter(|s| s.is_active()) else {
            continue;
        };
        let mut face_order = Direction::ALL;
        face_order.shuffle(rng);
        let Some(j) = face_order
            .into_iter()
            .find(|&j| slot.binds(&rule.face(j)))
        else {
            continue;
        };

        let turned = rotate_rule(rule, &rotation_from_to(j, i))?;
        let spin = if torsion {
            -signed_angle(
                &direction_vector(slot.orientation),
                &direction_vector(turned.face(i).orientation),
                &direction_vector(i),
            )
        } else {
            f64::from(rng.random_range(0..4u8)) * FRAC_PI_2
        };
        return rotate_rule(&turned, &rotation_about(i, spin)).map(Some);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_core::Face;
    use polycube_geometry::face_orientation;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn arb_rule() -> impl Strategy<Value = Rule> {
        (
            prop::array::uniform6(-3i32..=3),
            prop::array::uniform6(0u8..4),
        )
            .prop_map(|(colors, orients)| {
                let faces = Direction::ALL.map(|d| {
                    Face::new(colors[d.index()], face_orientation(d, orients[d.index()]).unwrap())
                });
                Rule::new(faces).unwrap()
            })
    }

    #[test]
    fn empty_slots_never_fit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let rule = Rule::from_colors([1, -1, 2, -2, 3, -3]);
        assert_eq!(rule_fits(&[None; 6], &rule, true, &mut rng), Ok(None));
    }

    #[test]
    fn same_colour_does_not_bind() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut slots = [None; 6];
        slots[Direction::PosX.index()] = Some(Face::new(1, Direction::PosY));
        let rule = Rule::from_colors([1, 1, 1, 1, 1, 1]);
        assert_eq!(rule_fits(&slots, &rule, true, &mut rng), Ok(None));
    }

    #[test]
    fn complementary_face_is_turned_onto_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut slots = [None; 6];
        slots[Direction::PosZ.index()] = Some(Face::new(5, Direction::NegX));
        let rule = Rule::from_colors([-5, 0, 0, 0, 0, 0]);
        let fitted = rule_fits(&slots, &rule, true, &mut rng).unwrap().unwrap();
        let face = fitted.face(Direction::PosZ);
        assert_eq!(face.color, -5);
        assert_eq!(face.orientation, Direction::NegX);
        assert_eq!(fitted.active_directions().as_slice(), &[Direction::PosZ]);
    }

    proptest! {
        #[test]
        fn fitted_rule_binds_and_aligns(
            rule in arb_rule(),
            slot_dir in 0usize..6,
            slot_color in prop_oneof![-3i32..=-1, 1i32..=3],
            slot_orient in 0u8..4,
            torsion in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let i = Direction::ALL[slot_dir];
            let slot = Face::new(slot_color, face_orientation(i, slot_orient).unwrap());
            let mut slots = [None; 6];
            slots[i.index()] = Some(slot);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let result = rule_fits(&slots, &rule, torsion, &mut rng).unwrap();
            let can_bind = rule.faces().iter().any(|f| slot.binds(f));
            prop_assert_eq!(result.is_some(), can_bind);
            if let Some(fitted) = result {
                prop_assert!(slot.binds(&fitted.face(i)));
                if torsion {
                    prop_assert_eq!(fitted.face(i).orientation, slot.orientation);
                }
                let mut before: Vec<i32> = rule.faces().iter().map(|f| f.color).collect();
                let mut after: Vec<i32> = fitted.faces().iter().map(|f| f.color).collect();
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);
            }
        }
    }
}
