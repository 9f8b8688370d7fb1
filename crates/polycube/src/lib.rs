//! Polycube: stochastic self-assembly of 3D lattice shapes from rule genotypes.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! polycube sub-crates. For most users, adding `polycube` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use polycube::prelude::*;
//!
//! // Two cube types with complementary colours on opposite faces.
//! let genotype = parse("000400000000840000000000").unwrap();
//!
//! // One assembly run.
//! let report = Assembler::new(&genotype, AssemblyConfig::default(), 7)
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(report.outcome, AssemblyOutcome::Bounded { cubes: 2 });
//!
//! // Repeated trials decide boundedness and determinism.
//! let verdict = classify(&genotype, &TrialConfig::default()).unwrap();
//! assert!(verdict.is_deterministic());
//! assert_eq!(verdict.to_string(), "deterministic (2 cubes, 1x1x2)");
//!
//! // Shapes compare up to rotation and translation.
//! let rotated: Shape = [[0, 0, 0], [0, 5, 0]].map(Pos::from).into_iter().collect();
//! assert!(!lattice_equal(&report.shape, &rotated));
//! let rotated: Shape = [[0, 0, 0], [0, 1, 0]].map(Pos::from).into_iter().collect();
//! assert!(lattice_equal(&report.shape, &rotated));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `polycube-core` | Directions, faces, rules, genotypes, shapes |
//! | [`geometry`] | `polycube-geometry` | Rotations, rotation group, point-set registration |
//! | [`codec`] | `polycube-codec` | Hex and decimal genotype strings |
//! | [`engine`] | `polycube-engine` | The frontier-driven assembler |
//! | [`shape`] | `polycube-shape` | Rotation-invariant shape equality |
//! | [`trial`] | `polycube-trial` | Classification, phenotype clustering, surveys |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`polycube-core`).
///
/// [`types::Direction`], [`types::Face`], [`types::Rule`],
/// [`types::Genotype`] and [`types::Shape`].
pub use polycube_core as types;

/// Lattice geometry (`polycube-geometry`).
///
/// Quaternion rotation of faces and rules, the 24-element
/// [`geometry::rotation_group`], and [`geometry::best_fit_transform`] for
/// continuous point sets.
pub use polycube_geometry as geometry;

/// Genotype string formats (`polycube-codec`).
pub use polycube_codec as codec;

/// The assembler (`polycube-engine`).
///
/// [`engine::Assembler`] grows one polycube from a genotype under an
/// [`engine::AssemblyConfig`].
pub use polycube_engine as engine;

/// Shape equality and canonical forms (`polycube-shape`).
pub use polycube_shape as shape;

/// Repeated trials and phenotype clustering (`polycube-trial`).
///
/// [`trial::classify`] for a single genotype, [`trial::survey`] and
/// [`trial::survey_parallel`] for batches.
pub use polycube_trial as trial;

/// Common imports for typical polycube usage.
///
/// ```rust
/// use polycube::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use polycube_core::{
        CubeTypeId, Direction, Face, Genotype, Pos, Rule, RuleError, Shape, ShapeSignature,
    };

    // Codec
    pub use polycube_codec::{encode, parse, CodecError, RuleFormat};

    // Engine
    pub use polycube_engine::{
        Assembler, AssemblyConfig, AssemblyError, AssemblyOutcome, AssemblyReport,
        SchedulingPolicy,
    };

    // Shape equality
    pub use polycube_shape::{canonical_form, continuous_equal, lattice_equal};

    // Trials and clustering
    pub use polycube_trial::{
        classify, survey, survey_parallel, Classification, PhenotypeMap, SurveyReport,
        TrialConfig, TrialError,
    };
}
