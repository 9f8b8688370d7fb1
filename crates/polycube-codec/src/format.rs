//! Format detection and format-generic entry points.

use crate::dec::{encode_dec, parse_dec};
use crate::error::CodecError;
use crate::hex::{encode_hex, parse_hex};
use polycube_core::Genotype;
use std::fmt;

/// The two genotype string encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleFormat {
    /// Two hex digits per face.
    Hex,
    /// `color:orientation` fields joined by `|` and `_`.
    Decimal,
}

impl RuleFormat {
    /// Guess the format of `s`: any `|`, `:` or `_` means decimal.
    pub fn detect(s: &str) -> Self {
        if s.contains(['|', ':', '_']) {
            Self::Decimal
        } else {
            Self::Hex
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Decimal => f.write_str("decimal"),
        }
    }
}

/// Parse a genotype in whichever format [`RuleFormat::detect`] picks.
pub fn parse(s: &str) -> Result<Genotype, CodecError> {
    match RuleFormat::detect(s) {
        RuleFormat::Hex => parse_hex(s),
        RuleFormat::Decimal => parse_dec(s),
    }
}

/// Encode a genotype in the given format.
pub fn encode(genotype: &Genotype, format: RuleFormat) -> Result<String, CodecError> {
    match format {
        RuleFormat::Hex => encode_hex(genotype),
        RuleFormat::Decimal => Ok(encode_dec(genotype)),
    }
}
