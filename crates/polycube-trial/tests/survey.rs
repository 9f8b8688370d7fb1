//! Sequential and parallel surveys must agree exactly.

use polycube_test_utils::fixtures;
use polycube_trial::{survey, survey_parallel, Classification, TrialConfig};

fn batch() -> Vec<String> {
    let mut v: Vec<String> = fixtures::all().into_iter().map(|(hex, _)| hex.to_owned()).collect();
    // Same phenotypes written differently: decimal forms and repeats.
    v.push("|1:0||||_-1:0|||||".to_owned());
    v.push("1:0|1:0||||_-1:0|||||".to_owned());
    v.push("not a genotype".to_owned());
    v.push(fixtures::DIMER_HEX.to_owned());
    v
}

#[test]
fn clusters_equivalent_genotypes() {
    let report = survey(&batch(), &TrialConfig::default()).unwrap();
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].index, 8);
    assert_eq!(report.tally.unbounded, 1);
    assert_eq!(report.tally.non_deterministic, 1);
    assert_eq!(report.tally.deterministic, 7);

    // monomer, dimer, rod of three, L: four phenotypes.
    assert_eq!(report.phenotypes.len(), 4);
    let dimer = report
        .phenotypes
        .iter()
        .find(|p| p.signature.size == 2)
        .unwrap();
    assert_eq!(dimer.members.len(), 3);
    let rod = report
        .phenotypes
        .iter()
        .find(|p| p.signature.to_string() == "3_1.1.3")
        .unwrap();
    assert_eq!(rod.members.len(), 2);
}

#[test]
fn parallel_matches_sequential() {
    let input = batch();
    let cfg = TrialConfig::default();
    let seq = survey(&input, &cfg).unwrap();
    for workers in [1, 2, 3, 16] {
        let par = survey_parallel(&input, &cfg, workers).unwrap();
        assert_eq!(par.tally, seq.tally);
        assert_eq!(par.entries, seq.entries);
        assert_eq!(par.rejected, seq.rejected);
        let a: Vec<_> = seq.phenotypes.iter().collect();
        let b: Vec<_> = par.phenotypes.iter().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn entries_keep_input_order() {
    let report = survey_parallel(&batch(), &TrialConfig::default(), 4).unwrap();
    assert_eq!(report.entries[0].classification.to_string(), "deterministic (1 cubes, 1x1x1)");
    assert_eq!(report.entries[1].classification, Classification::Unbounded);
    assert!(report.entries[1].cluster.is_none());
    assert_eq!(report.entries.last().unwrap().genotype, fixtures::DIMER_HEX);
}
