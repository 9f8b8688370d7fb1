//! Sampling helpers built on repeated trials.

use polycube_core::{Genotype, Shape};
use polycube_shape::lattice_equal;

use crate::classify::TrialConfig;
use crate::error::TrialError;

/// Fraction of trials that assemble `target`, up to rotation.
///
/// Unbounded trials count as misses.
pub fn assemble_ratio(
    genotype: &Genotype,
    target: &Shape,
    config: &TrialConfig,
) -> Result<f64, TrialError> {
    config.validate()?;
    let mut hits = 0usize;
    for t in 0..config.trials {
        let report = config.run_trial(genotype, t)?;
        if report.outcome.is_bounded() && lattice_equal(&report.shape, target) {
            hits += 1;
        }
    }
    Ok(hits as f64 / config.trials as f64)
}

/// Distinct bounded shapes seen over `config.trials` runs, in the order
/// they first appeared.
pub fn sample_shapes(genotype: &Genotype, config: &TrialConfig) -> Result<Vec<Shape>, TrialError> {
    config.validate()?;
    let mut seen: Vec<Shape> = Vec::new();
    for t in 0..config.trials {
        let report = config.run_trial(genotype, t)?;
        if report.outcome.is_bounded() && !seen.iter().any(|s| lattice_equal(s, &report.shape)) {
            seen.push(report.shape);
        }
    }
    Ok(seen)
}

/// Assemble each genotype once with `config.seed` and compare the shapes.
///
/// Returns `false` if either run is unbounded.
pub fn same_phenotype(a: &Genotype, b: &Genotype, config: &TrialConfig) -> Result<bool, TrialError> {
    config.validate()?;
    let ra = config.run_trial(a, 0)?;
    let rb = config.run_trial(b, 0)?;
    Ok(ra.outcome.is_bounded() && rb.outcome.is_bounded() && lattice_equal(&ra.shape, &rb.shape))
}
