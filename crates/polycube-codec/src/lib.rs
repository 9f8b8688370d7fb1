//! Text encodings of polycube genotypes.
//!
//! Two formats are understood:
//!
//! ```text
//! hex:     12 hex digits per cube type, 2 per face in direction order
//!          byte = [sign:1][magnitude:5][orientation:2]
//! decimal: cube types joined by '_', faces joined by '|',
//!          each face "color:orientation", "color", or "" (inert)
//! ```
//!
//! [`parse`] picks the format with [`RuleFormat::detect`]. Parsing is
//! all-or-nothing: a malformed cube type rejects the whole string.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dec;
pub mod error;
pub mod format;
pub mod hex;

pub use dec::{encode_dec, parse_dec};
pub use error::CodecError;
pub use format::{encode, parse, RuleFormat};
pub use hex::{encode_hex, parse_hex, MAX_HEX_COLOR};
