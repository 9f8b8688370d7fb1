//! Per-run counters for the assembly engine.
//!
//! [`AssemblyMetrics`] is filled in by the
//! [`Assembler`](crate::Assembler) as it runs and can be read at any
//! point, including after termination.

use smallvec::SmallVec;

/// Counters collected over one assembly run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyMetrics {
    /// Cubes placed, including the seed.
    pub placements: u64,
    /// Calls to the fit test, one per (candidate, cube type) pair tried.
    pub fit_attempts: u64,
    /// Fit tests that found no binding face.
    pub fit_failures: u64,
    /// Candidates removed without any cube type fitting.
    pub discarded_candidates: u64,
    /// Neighbour positions skipped for lying past the lattice bound.
    pub out_of_bound_drops: u64,
    /// Cubes placed per cube type, indexed by type.
    pub per_type: SmallVec<[u64; 8]>,
    /// Constrained slots whose placed face bound with matching orientation.
    pub bond_matches: u64,
    /// Constrained slots whose placed face did not bind, or bound with a
    /// different orientation.
    pub bond_mismatches: u64,
}

impl AssemblyMetrics {
    /// Fresh counters for a genotype with `cube_types` types.
    pub fn new(cube_types: usize) -> Self {
        Self {
            per_type: SmallVec::from_elem(0, cube_types),
            ..Self::default()
        }
    }

    /// Fraction of constrained slots that did not match, in `[0, 1]`.
    /// Zero when no slot has been checked.
    pub fn mismatch_ratio(&self) -> f64 {
        let total = self.bond_matches + self.bond_mismatches;
        if total == 0 {
            0.0
        } else {
            self.bond_mismatches as f64 / total as f64
        }
    }

    pub(crate) fn record_placement(&mut self, cube_type: usize) {
        self.placements += 1;
        if let Some(n) = self.per_type.get_mut(cube_type) {
            *n += 1;
        }
    }
}
