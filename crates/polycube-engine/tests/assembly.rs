//! End-to-end assembly from genotype strings.

use polycube_codec::parse;
use polycube_core::{Direction, Pos};
use polycube_engine::{Assembler, AssemblyConfig, AssemblyOutcome, SchedulingPolicy};
use polycube_test_utils::fixtures;
use proptest::prelude::*;

fn run(hex: &str, config: AssemblyConfig, seed: u64) -> (AssemblyOutcome, usize) {
    let g = parse(hex).unwrap();
    let report = Assembler::new(&g, config, seed).unwrap().run().unwrap();
    (report.outcome, report.shape.size())
}

#[test]
fn lone_positive_face_assembles_to_one_cube() {
    let g = parse("100000000000").unwrap();
    assert_eq!(g.rules()[0].face(Direction::NegX).color, 4);
    let report = Assembler::new(&g, AssemblyConfig::default(), 0)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.outcome, AssemblyOutcome::Bounded { cubes: 1 });
    assert_eq!(report.shape.cells(), &[Pos::ORIGIN]);
    assert_eq!(report.metrics.discarded_candidates, 1);
}

#[test]
fn every_policy_agrees_on_the_dimer() {
    for policy in [
        SchedulingPolicy::Stochastic,
        SchedulingPolicy::Seeded,
        SchedulingPolicy::Ordered,
    ] {
        let cfg = AssemblyConfig {
            policy,
            ..AssemblyConfig::default()
        };
        for seed in 0..10 {
            assert_eq!(
                run(fixtures::DIMER_HEX, cfg.clone(), seed),
                (AssemblyOutcome::Bounded { cubes: 2 }, 2),
                "{policy} seed {seed}"
            );
        }
    }
}

#[test]
fn trimer_is_a_straight_rod() {
    let g = fixtures::trimer();
    for seed in 0..10 {
        let report = Assembler::new(&g, AssemblyConfig::default(), seed)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.outcome, AssemblyOutcome::Bounded { cubes: 3 });
        assert_eq!(report.shape.dims(), [1, 1, 3]);
    }
}

#[test]
fn l_tromino_bends() {
    let g = fixtures::l_tromino();
    for seed in 0..10 {
        let report = Assembler::new(&g, AssemblyConfig::default(), seed)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.shape.dims(), [1, 2, 2]);
    }
}

#[test]
fn torsion_off_still_terminates() {
    let cfg = AssemblyConfig {
        torsion: false,
        ..AssemblyConfig::default()
    };
    for seed in 0..10 {
        let (outcome, size) = run(fixtures::TRIMER_HEX, cfg.clone(), seed);
        assert_eq!(outcome, AssemblyOutcome::Bounded { cubes: 3 });
        assert_eq!(size, 3);
    }
}

proptest! {
    #[test]
    fn self_complementary_chain_never_terminates(max_cubes in 2usize..200, seed in any::<u64>()) {
        let cfg = AssemblyConfig { max_cubes, ..AssemblyConfig::default() };
        let (outcome, size) = run(fixtures::INFINITE_CHAIN_HEX, cfg, seed);
        prop_assert_eq!(outcome, AssemblyOutcome::Unbounded);
        prop_assert_eq!(outcome.sentinel(), -1);
        prop_assert_eq!(size, max_cubes);
    }
}
