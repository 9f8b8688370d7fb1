//! Classification and phenotype clustering for polycube genotypes.
//!
//! A genotype is classified by assembling it repeatedly:
//!
//! - any run hitting the cube limit makes it **unbounded**;
//! - bounded runs that disagree on the final shape make it
//!   **non-deterministic**;
//! - otherwise it is **deterministic** and has a single phenotype.
//!
//! Deterministic genotypes are then grouped by shape in a
//! [`PhenotypeMap`]. [`survey`] and [`survey_parallel`] run the whole
//! pipeline over a batch of genotype strings.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod phenotype;
pub mod sampling;
pub mod survey;

pub use classify::{classify, Classification, ClassificationTally, TrialConfig};
pub use error::TrialError;
pub use phenotype::{ClusterOutcome, Phenotype, PhenotypeMap};
pub use sampling::{assemble_ratio, same_phenotype, sample_shapes};
pub use survey::{classify_str, survey, survey_parallel, Rejected, SurveyEntry, SurveyReport};
