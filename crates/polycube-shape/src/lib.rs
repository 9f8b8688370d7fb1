//! Rotation-invariant shape equality.
//!
//! Two notions of "same shape" are provided:
//!
//! - [`lattice_equal`] / [`canonical_form`]: exact, order-free comparison
//!   of lattice cell sets under translation and the 24 proper rotations
//!   of the cube. This is what phenotype clustering uses.
//! - [`continuous_equal`]: least-squares similarity fit of two point
//!   lists with index correspondence, for callers that already know
//!   which point maps to which.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod continuous;
pub mod lattice;

pub use continuous::{continuous_equal, to_points, RESIDUAL_TOLERANCE};
pub use lattice::{canonical_form, canonical_key, lattice_equal, rotate_shape};
