//! Core types for polycube self-assembly.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by every other crate in the workspace: lattice
//! directions and positions, coloured faces, cube-type rules, genotypes,
//! assembled shapes, and the error types for constructing them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod genotype;
pub mod id;
pub mod pos;
pub mod rule;
pub mod shape;

pub use direction::Direction;
pub use error::RuleError;
pub use genotype::Genotype;
pub use id::CubeTypeId;
pub use pos::Pos;
pub use rule::{Face, Rule};
pub use shape::{Shape, ShapeSignature};
