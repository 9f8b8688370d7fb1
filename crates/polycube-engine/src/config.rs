//! Assembly configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use polycube_core::{CubeTypeId, Genotype};

// ── SchedulingPolicy ───────────────────────────────────────────────

/// How the assembler picks the next candidate and cube type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// Random candidate, random cube-type order, random seed type.
    #[default]
    Stochastic,
    /// As [`Stochastic`](Self::Stochastic), but the seed type is
    /// [`AssemblyConfig::seed_cube_type`].
    Seeded,
    /// Cube types are tried one at a time, in genotype order, against
    /// every pending candidate.
    Ordered,
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stochastic => f.write_str("stochastic"),
            Self::Seeded => f.write_str("seeded"),
            Self::Ordered => f.write_str("ordered"),
        }
    }
}

// ── AssemblyConfig ─────────────────────────────────────────────────

/// Per-run assembly parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Cube count at which a run is declared unbounded. Default: 100.
    pub max_cubes: usize,
    /// Scheduling policy. Default: stochastic.
    pub policy: SchedulingPolicy,
    /// Seed type for the seeded policy. `None` means type 0. Ignored by
    /// the other policies.
    pub seed_cube_type: Option<CubeTypeId>,
    /// Align face orientations when binding. When `false` the bound cube
    /// is turned by a random quarter-turn multiple instead. Default: true.
    pub torsion: bool,
    /// Maximum `|coordinate|` of any candidate position. Neighbours past
    /// the bound are dropped. Default: unbounded.
    pub lattice_bound: Option<u32>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_cubes: 100,
            policy: SchedulingPolicy::Stochastic,
            seed_cube_type: None,
            torsion: true,
            lattice_bound: None,
        }
    }
}

impl AssemblyConfig {
    /// Check structural invariants that do not depend on a genotype.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cubes == 0 {
            return Err(ConfigError::ZeroMaxCubes);
        }
        Ok(())
    }

    /// [`validate`](Self::validate), plus checks against `genotype`.
    pub fn validate_for(&self, genotype: &Genotype) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(id) = self.seed_cube_type {
            if id.index() >= genotype.len() {
                return Err(ConfigError::SeedOutOfRange {
                    seed: id,
                    cube_types: genotype.len(),
                });
            }
        }
        Ok(())
    }

    /// The seed type the seeded policy starts from.
    pub fn resolved_seed_cube_type(&self) -> CubeTypeId {
        self.seed_cube_type.unwrap_or_default()
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`AssemblyConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_cubes` is zero, so no run could ever place its seed.
    ZeroMaxCubes,
    /// `seed_cube_type` names a type the genotype does not have.
    SeedOutOfRange {
        /// The configured seed type.
        seed: CubeTypeId,
        /// Number of cube types in the genotype.
        cube_types: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxCubes => write!(f, "max_cubes must be at least 1"),
            Self::SeedOutOfRange { seed, cube_types } => write!(
                f,
                "seed cube type {seed} out of range for a genotype with {cube_types} types"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_core::Rule;

    #[test]
    fn defaults() {
        let c = AssemblyConfig::default();
        assert_eq!(c.max_cubes, 100);
        assert_eq!(c.policy, SchedulingPolicy::Stochastic);
        assert!(c.torsion);
        assert_eq!(c.lattice_bound, None);
        assert_eq!(c.resolved_seed_cube_type(), CubeTypeId(0));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn zero_max_cubes_rejected() {
        let c = AssemblyConfig {
            max_cubes: 0,
            ..AssemblyConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroMaxCubes));
    }

    #[test]
    fn seed_must_exist_in_genotype() {
        let g = Genotype::new(vec![Rule::inert(), Rule::inert()]).unwrap();
        let mut c = AssemblyConfig {
            policy: SchedulingPolicy::Seeded,
            seed_cube_type: Some(CubeTypeId(1)),
            ..AssemblyConfig::default()
        };
        assert_eq!(c.validate_for(&g), Ok(()));
        c.seed_cube_type = Some(CubeTypeId(2));
        assert_eq!(
            c.validate_for(&g),
            Err(ConfigError::SeedOutOfRange {
                seed: CubeTypeId(2),
                cube_types: 2,
            })
        );
    }
}
