//! Frontier-driven stochastic assembly of polycubes.
//!
//! An [`Assembler`] borrows a [`Genotype`](polycube_core::Genotype),
//! places a seed cube at the origin and grows the shape one frontier
//! candidate at a time until either the frontier empties (bounded) or
//! the cube count reaches [`AssemblyConfig::max_cubes`] (unbounded).
//!
//! # Modules
//!
//! - [`config`]: [`AssemblyConfig`], [`SchedulingPolicy`] and validation.
//! - [`frontier`]: candidate positions and their constraint slots.
//! - [`fit`]: the face-binding and torsion-alignment test.
//! - [`assembler`]: the per-run state machine.
//! - [`metrics`]: per-run counters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembler;
pub mod config;
pub mod error;
pub mod fit;
pub mod frontier;
pub mod metrics;

pub use assembler::{Assembler, AssemblyOutcome, AssemblyReport, AssemblyState};
pub use config::{AssemblyConfig, ConfigError, SchedulingPolicy};
pub use error::AssemblyError;
pub use fit::rule_fits;
pub use frontier::{Frontier, Slots};
pub use metrics::AssemblyMetrics;
