//! Geometry kernel for polycube assembly.
//!
//! Everything that needs floating-point rotation maths lives here, so the
//! rest of the workspace can work with exact lattice values:
//!
//! - [`vector`]: direction vectors, snapping back onto the lattice, and
//!   signed angles about an axis.
//! - [`rotate`]: quaternion rotation of faces and whole rules, and the
//!   orientation-index conversion used by the rule codec.
//! - [`group`]: the 24 proper rotations of the cube as exact integer
//!   matrices.
//! - [`kabsch`]: least-squares similarity registration for continuous
//!   point sets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod group;
pub mod kabsch;
pub mod rotate;
pub mod vector;

pub use error::GeometryError;
pub use group::{rotation_group, LatticeRotation};
pub use kabsch::{best_fit_transform, SimilarityTransform};
pub use rotate::{
    face_orientation, orientation_index, rotate_face, rotate_rule, rotation_about,
    rotation_from_to,
};
pub use vector::{direction_vector, signed_angle, snap_direction, SNAP_TOLERANCE};
