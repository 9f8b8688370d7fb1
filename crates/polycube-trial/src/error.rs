//! Error types for trials and surveys.

use polycube_codec::CodecError;
use polycube_engine::{AssemblyError, ConfigError};
use std::error::Error;
use std::fmt;

/// Errors from classifying or surveying genotypes.
#[derive(Clone, Debug, PartialEq)]
pub enum TrialError {
    /// `trials` is zero, so nothing could be classified.
    NoTrials,
    /// An assembly run failed.
    Assembly(AssemblyError),
    /// A genotype string could not be parsed.
    Codec(CodecError),
}

impl fmt::Display for TrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTrials => write!(f, "trial count must be at least 1"),
            Self::Assembly(e) => write!(f, "assembly failed: {e}"),
            Self::Codec(e) => write!(f, "bad genotype: {e}"),
        }
    }
}

impl Error for TrialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoTrials => None,
            Self::Assembly(e) => Some(e),
            Self::Codec(e) => Some(e),
        }
    }
}

impl From<AssemblyError> for TrialError {
    fn from(e: AssemblyError) -> Self {
        Self::Assembly(e)
    }
}

impl From<ConfigError> for TrialError {
    fn from(e: ConfigError) -> Self {
        Self::Assembly(AssemblyError::Config(e))
    }
}

impl From<CodecError> for TrialError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}
