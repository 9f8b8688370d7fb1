//! The per-run assembly state machine.
//!
//! An [`Assembler`] grows one shape from a seed cube at the origin:
//!
//! ```text
//! Uninitialized --seed()--> Seeded --step()--> Running --step()--> Terminated
//! ```
//!
//! Each [`step`](Assembler::step) resolves one frontier candidate (or, for
//! the ordered policy, advances the current round). A run terminates
//! bounded when the frontier empties and unbounded once the cube count
//! reaches [`AssemblyConfig::max_cubes`] with candidates still pending.
//! The count never exceeds the limit.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use polycube_core::{CubeTypeId, Direction, Genotype, Pos, Rule, Shape};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{AssemblyConfig, SchedulingPolicy};
use crate::error::AssemblyError;
use crate::fit::rule_fits;
use crate::frontier::Frontier;
use crate::metrics::AssemblyMetrics;

// ── Outcome and state ──────────────────────────────────────────────

/// How an assembly run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssemblyOutcome {
    /// The frontier emptied; the shape has `cubes` cubes.
    Bounded {
        /// Final cube count.
        cubes: usize,
    },
    /// The cube count reached the configured maximum.
    Unbounded,
}

impl AssemblyOutcome {
    /// Whether the run terminated on its own.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded { .. })
    }

    /// Final cube count, or `-1` for an unbounded run.
    pub fn sentinel(&self) -> i64 {
        match self {
            // Cube counts are bounded by `max_cubes`, far below i64::MAX.
            Self::Bounded { cubes } => *cubes as i64,
            Self::Unbounded => -1,
        }
    }
}

impl fmt::Display for AssemblyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded { cubes } => write!(f, "bounded ({cubes} cubes)"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Lifecycle state of an [`Assembler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssemblyState {
    /// Created, no cube placed yet.
    Uninitialized,
    /// The seed cube is placed.
    Seeded,
    /// At least one step has run.
    Running,
    /// Finished; further steps return the same outcome.
    Terminated(AssemblyOutcome),
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct AssemblyReport {
    /// How the run ended.
    pub outcome: AssemblyOutcome,
    /// Occupied cells in placement order.
    pub shape: Shape,
    /// Counters for the run.
    pub metrics: AssemblyMetrics,
}

// ── Assembler ──────────────────────────────────────────────────────

/// Grows one polycube from a genotype.
///
/// Owns its RNG, so two assemblers built with the same genotype, config
/// and seed produce identical shapes.
pub struct Assembler<'g> {
    genotype: &'g Genotype,
    config: AssemblyConfig,
    rng: ChaCha8Rng,
    occupied: IndexMap<Pos, CubeTypeId>,
    frontier: Frontier,
    state: AssemblyState,
    /// Cube type being tried in the current ordered round.
    order_index: usize,
    /// Candidates already tried in the current ordered round.
    tried: HashSet<Pos>,
    /// Whether the current ordered pass over all types placed a cube.
    placed_this_pass: bool,
    metrics: AssemblyMetrics,
}

impl<'g> Assembler<'g> {
    /// Validate `config` against `genotype` and create an unseeded
    /// assembler whose RNG is seeded from `seed`.
    pub fn new(
        genotype: &'g Genotype,
        config: AssemblyConfig,
        seed: u64,
    ) -> Result<Self, AssemblyError> {
        config.validate_for(genotype)?;
        Ok(Self {
            genotype,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            occupied: IndexMap::new(),
            frontier: Frontier::new(),
            state: AssemblyState::Uninitialized,
            order_index: 0,
            tried: HashSet::new(),
            placed_this_pass: false,
            metrics: AssemblyMetrics::new(genotype.len()),
        })
    }

    /// Place the seed cube at the origin.
    ///
    /// The seeded policy uses [`AssemblyConfig::seed_cube_type`]; the
    /// others pick a type uniformly at random. The seed keeps its
    /// unrotated orientation.
    pub fn seed(&mut self) -> Result<CubeTypeId, AssemblyError> {
        if self.state != AssemblyState::Uninitialized {
            return Err(AssemblyError::AlreadySeeded);
        }
        let cube_type = match self.config.policy {
            SchedulingPolicy::Seeded => self.config.resolved_seed_cube_type(),
            SchedulingPolicy::Stochastic | SchedulingPolicy::Ordered => {
                CubeTypeId(self.rng.random_range(0..self.genotype.len()) as u32)
            }
        };
        let rule = *self.genotype.rule(cube_type)?;
        self.add_cube(Pos::ORIGIN, rule, cube_type)?;
        self.state = AssemblyState::Seeded;
        Ok(cube_type)
    }

    /// Run one scheduling step.
    ///
    /// Returns `Some(outcome)` once the run has terminated, and keeps
    /// returning it on later calls.
    pub fn step(&mut self) -> Result<Option<AssemblyOutcome>, AssemblyError> {
        match self.state {
            AssemblyState::Uninitialized => return Err(AssemblyError::NotSeeded),
            AssemblyState::Terminated(outcome) => return Ok(Some(outcome)),
            AssemblyState::Seeded | AssemblyState::Running => {}
        }
        self.state = AssemblyState::Running;

        if self.frontier.is_empty() {
            return Ok(Some(self.terminate(AssemblyOutcome::Bounded {
                cubes: self.occupied.len(),
            })));
        }
        // Catches a seed cube that already fills the budget.
        if self.occupied.len() >= self.config.max_cubes {
            return Ok(Some(self.terminate(AssemblyOutcome::Unbounded)));
        }

        match self.config.policy {
            SchedulingPolicy::Stochastic | SchedulingPolicy::Seeded => self.step_stochastic()?,
            SchedulingPolicy::Ordered => {
                if let Some(outcome) = self.step_ordered()? {
                    return Ok(Some(outcome));
                }
            }
        }

        if self.occupied.len() >= self.config.max_cubes {
            return Ok(Some(self.terminate(AssemblyOutcome::Unbounded)));
        }
        Ok(None)
    }

    /// Step until the run terminates.
    pub fn process_moves(&mut self) -> Result<AssemblyOutcome, AssemblyError> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Seed if needed, run to termination, and hand back the results.
    pub fn run(mut self) -> Result<AssemblyReport, AssemblyError> {
        if self.state == AssemblyState::Uninitialized {
            self.seed()?;
        }
        let outcome = self.process_moves()?;
        Ok(AssemblyReport {
            outcome,
            shape: self.shape(),
            metrics: self.metrics,
        })
    }

    /// Place `rule` (already rotated) as `cube_type` at `pos`.
    ///
    /// Every active face opens or constrains a candidate on its
    /// neighbour, unless the neighbour is occupied or lies past the
    /// lattice bound.
    pub fn add_cube(
        &mut self,
        pos: Pos,
        rule: Rule,
        cube_type: CubeTypeId,
    ) -> Result<(), AssemblyError> {
        if self.occupied.contains_key(&pos) {
            return Err(AssemblyError::Occupied { pos });
        }
        if let Some(slots) = self.frontier.remove(pos) {
            for dir in Direction::ALL {
                let Some(slot) = slots[dir.index()] else {
                    continue;
                };
                let face = rule.face(dir);
                if slot.binds(&face) && slot.orientation == face.orientation {
                    self.metrics.bond_matches += 1;
                } else {
                    self.metrics.bond_mismatches += 1;
                }
            }
        }

        for dir in rule.active_directions() {
            let neighbour = pos.step(dir);
            if self.occupied.contains_key(&neighbour) {
                continue;
            }
            if let Some(bound) = self.config.lattice_bound {
                if neighbour.max_abs() > bound {
                    self.metrics.out_of_bound_drops += 1;
                    trace!(%neighbour, bound, "neighbour past lattice bound dropped");
                    continue;
                }
            }
            self.frontier.constrain(neighbour, dir.opposite(), rule.face(dir));
        }

        self.occupied.insert(pos, cube_type);
        self.metrics.record_placement(cube_type.index());
        trace!(%pos, %cube_type, frontier = self.frontier.len(), "cube placed");
        Ok(())
    }

    fn step_stochastic(&mut self) -> Result<(), AssemblyError> {
        let Some(pos) = self.frontier.pick(&mut self.rng) else {
            return Ok(());
        };
        let mut order: SmallVec<[CubeTypeId; 8]> =
            self.genotype.iter().map(|(id, _)| id).collect();
        order.shuffle(&mut self.rng);
        for cube_type in order {
            if self.try_place(pos, cube_type)? {
                return Ok(());
            }
        }
        self.frontier.remove(pos);
        self.metrics.discarded_candidates += 1;
        trace!(%pos, "no cube type fits, candidate discarded");
        Ok(())
    }

    /// One candidate of the current ordered round.
    ///
    /// Candidates created during the round join it. When every pending
    /// candidate has been tried, the round advances to the next cube
    /// type. After the last type the rounds start over from type 0 if the
    /// pass placed anything; a pass that placed nothing ends the run and
    /// drops the remaining frontier.
    fn step_ordered(&mut self) -> Result<Option<AssemblyOutcome>, AssemblyError> {
        let untried: Vec<Pos> = self
            .frontier
            .positions()
            .filter(|p| !self.tried.contains(p))
            .collect();

        if untried.is_empty() {
            self.order_index += 1;
            self.tried.clear();
            if self.order_index >= self.genotype.len() {
                if !self.placed_this_pass {
                    self.metrics.discarded_candidates += self.frontier.len() as u64;
                    self.frontier.clear();
                    return Ok(Some(self.terminate(AssemblyOutcome::Bounded {
                        cubes: self.occupied.len(),
                    })));
                }
                self.order_index = 0;
                self.placed_this_pass = false;
            }
            debug!(round = self.order_index, cubes = self.occupied.len(), "ordered round advanced");
            return Ok(None);
        }

        let pos = untried[self.rng.random_range(0..untried.len())];
        self.tried.insert(pos);
        // Bounded by genotype length, which fits in u32.
        let cube_type = CubeTypeId(self.order_index as u32);
        if self.try_place(pos, cube_type)? {
            self.placed_this_pass = true;
        }
        Ok(None)
    }

    fn try_place(&mut self, pos: Pos, cube_type: CubeTypeId) -> Result<bool, AssemblyError> {
        let Some(slots) = self.frontier.slots(pos).copied() else {
            return Ok(false);
        };
        let rule = *self.genotype.rule(cube_type)?;
        self.metrics.fit_attempts += 1;
        match rule_fits(&slots, &rule, self.config.torsion, &mut self.rng)? {
            Some(rotated) => {
                self.add_cube(pos, rotated, cube_type)?;
                Ok(true)
            }
            None => {
                self.metrics.fit_failures += 1;
                Ok(false)
            }
        }
    }

    fn terminate(&mut self, outcome: AssemblyOutcome) -> AssemblyOutcome {
        self.state = AssemblyState::Terminated(outcome);
        debug!(
            %outcome,
            cubes = self.occupied.len(),
            policy = %self.config.policy,
            fit_attempts = self.metrics.fit_attempts,
            "assembly terminated"
        );
        outcome
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Current lifecycle state.
    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// The configuration this assembler runs with.
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Number of cubes placed so far.
    pub fn cube_count(&self) -> usize {
        self.occupied.len()
    }

    /// Occupied positions and their cube types, in placement order.
    pub fn occupancy(&self) -> &IndexMap<Pos, CubeTypeId> {
        &self.occupied
    }

    /// Pending candidates.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// The shape grown so far.
    pub fn shape(&self) -> Shape {
        self.occupied.keys().copied().collect()
    }

    /// Counters collected so far.
    pub fn metrics(&self) -> &AssemblyMetrics {
        &self.metrics
    }
}
