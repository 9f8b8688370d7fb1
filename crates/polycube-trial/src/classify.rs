//! Bounded / deterministic classification from repeated trials.

use std::fmt;

use polycube_core::{Genotype, Shape, ShapeSignature};
use polycube_engine::{Assembler, AssemblyConfig, AssemblyReport};
use polycube_shape::lattice_equal;
use tracing::debug;

use crate::error::TrialError;

// ── TrialConfig ────────────────────────────────────────────────────

/// How many trials to run, and how to seed them.
///
/// Trial `t` seeds its assembler with `seed ^ t`, so a classification is
/// reproducible from `seed` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialConfig {
    /// Number of assembly runs per genotype. Default: 15.
    pub trials: usize,
    /// Base RNG seed. Default: 0.
    pub seed: u64,
    /// Parameters for every run.
    pub assembly: AssemblyConfig,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 15,
            seed: 0,
            assembly: AssemblyConfig::default(),
        }
    }
}

impl TrialConfig {
    /// Check the trial count and the assembly config.
    pub fn validate(&self) -> Result<(), TrialError> {
        if self.trials == 0 {
            return Err(TrialError::NoTrials);
        }
        self.assembly.validate()?;
        Ok(())
    }

    /// RNG seed for trial `t`.
    pub fn trial_seed(&self, t: usize) -> u64 {
        self.seed ^ t as u64
    }

    /// Run trial `t` of `genotype` to completion.
    pub fn run_trial(&self, genotype: &Genotype, t: usize) -> Result<AssemblyReport, TrialError> {
        let assembler = Assembler::new(genotype, self.assembly.clone(), self.trial_seed(t))?;
        Ok(assembler.run()?)
    }
}

// ── Classification ─────────────────────────────────────────────────

/// The verdict on one genotype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Some trial reached the cube limit.
    Unbounded,
    /// Every trial terminated, but not always in the same shape.
    NonDeterministic,
    /// Every trial terminated in the same shape, up to rotation.
    Deterministic {
        /// Number of cubes.
        size: usize,
        /// Bounding-box extents, ascending.
        dims: [i32; 3],
        /// The shape from the first trial.
        shape: Shape,
    },
}

impl Classification {
    /// Whether the genotype always assembles the same shape.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic { .. })
    }

    /// The shape of a deterministic genotype.
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Self::Deterministic { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// Size and dims of a deterministic genotype.
    pub fn signature(&self) -> Option<ShapeSignature> {
        match self {
            Self::Deterministic { size, dims, .. } => Some(ShapeSignature {
                size: *size,
                dims: *dims,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::NonDeterministic => f.write_str("non-deterministic"),
            Self::Deterministic { size, dims, .. } => write!(
                f,
                "deterministic ({size} cubes, {}x{}x{})",
                dims[0], dims[1], dims[2]
            ),
        }
    }
}

/// Classify `genotype` by running `config.trials` assemblies.
///
/// Stops at the first unbounded trial, or at the first bounded trial
/// whose shape differs from the first one.
pub fn classify(genotype: &Genotype, config: &TrialConfig) -> Result<Classification, TrialError> {
    config.validate()?;
    let mut reference: Option<Shape> = None;
    for t in 0..config.trials {
        let report = config.run_trial(genotype, t)?;
        if !report.outcome.is_bounded() {
            debug!(trial = t, "classified unbounded");
            return Ok(Classification::Unbounded);
        }
        let Some(first) = &reference else {
            reference = Some(report.shape);
            continue;
        };
        if first.signature() != report.shape.signature() || !lattice_equal(first, &report.shape) {
            debug!(
                trial = t,
                first = %first.signature(),
                got = %report.shape.signature(),
                "classified non-deterministic"
            );
            return Ok(Classification::NonDeterministic);
        }
    }
    let Some(shape) = reference else {
        return Err(TrialError::NoTrials);
    };
    debug!(signature = %shape.signature(), trials = config.trials, "classified deterministic");
    Ok(Classification::Deterministic {
        size: shape.size(),
        dims: shape.dims(),
        shape,
    })
}

// ── ClassificationTally ────────────────────────────────────────────

/// Running counts of classification verdicts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassificationTally {
    /// Genotypes classified unbounded.
    pub unbounded: u64,
    /// Genotypes classified non-deterministic.
    pub non_deterministic: u64,
    /// Genotypes classified deterministic.
    pub deterministic: u64,
}

impl ClassificationTally {
    /// Count one verdict.
    pub fn record(&mut self, classification: &Classification) {
        match classification {
            Classification::Unbounded => self.unbounded += 1,
            Classification::NonDeterministic => self.non_deterministic += 1,
            Classification::Deterministic { .. } => self.deterministic += 1,
        }
    }

    /// Total verdicts counted.
    pub fn total(&self) -> u64 {
        self.unbounded + self.non_deterministic + self.deterministic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_test_utils::fixtures;

    #[test]
    fn zero_trials_rejected() {
        let cfg = TrialConfig {
            trials: 0,
            ..TrialConfig::default()
        };
        assert_eq!(
            classify(&fixtures::inert_monomer(), &cfg),
            Err(TrialError::NoTrials)
        );
    }

    #[test]
    fn trial_seeds_xor_index() {
        let cfg = TrialConfig {
            seed: 0b1010,
            ..TrialConfig::default()
        };
        assert_eq!(cfg.trial_seed(0), 0b1010);
        assert_eq!(cfg.trial_seed(3), 0b1001);
    }

    #[test]
    fn inert_monomer_is_deterministic_single_cube() {
        let c = classify(&fixtures::inert_monomer(), &TrialConfig::default()).unwrap();
        assert_eq!(c.signature().map(|s| s.to_string()).as_deref(), Some("1_1.1.1"));
        assert!(matches!(
            c,
            Classification::Deterministic { size: 1, dims: [1, 1, 1], .. }
        ));
    }

    #[test]
    fn tally_counts_each_kind() {
        let mut tally = ClassificationTally::default();
        tally.record(&Classification::Unbounded);
        tally.record(&Classification::NonDeterministic);
        tally.record(&Classification::NonDeterministic);
        assert_eq!(tally.unbounded, 1);
        assert_eq!(tally.non_deterministic, 2);
        assert_eq!(tally.deterministic, 0);
        assert_eq!(tally.total(), 3);
    }
}
