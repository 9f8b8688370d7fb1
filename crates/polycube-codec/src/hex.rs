//! The compact hex encoding.
//!
//! Each face is one byte, written as two hex digits:
//!
//! ```text
//!   bit 7     sign (1 = negative)
//!   bits 6-2  colour magnitude (0..=31)
//!   bits 1-0  orientation index
//! ```
//!
//! Six bytes make one cube type, so a genotype of `n` types is `12n`
//! digits long.

use crate::error::CodecError;
use polycube_core::{Direction, Face, Genotype, Rule};
use polycube_geometry::{face_orientation, orientation_index};
use std::fmt::Write;

/// Largest colour magnitude the hex format can carry.
pub const MAX_HEX_COLOR: u32 = 31;

const DIGITS_PER_RULE: usize = 12;

fn decode_face(dir: Direction, byte: u8) -> Result<Face, CodecError> {
    let magnitude = i32::from((byte >> 2) & 0x1f);
    let color = if byte & 0x80 != 0 { -magnitude } else { magnitude };
    let orientation = face_orientation(dir, byte & 0b11)?;
    Ok(Face::new(color, orientation))
}

fn decode_rule(cube_type: usize, digits: &[u8]) -> Result<Rule, CodecError> {
    if digits.len() != DIGITS_PER_RULE {
        return Err(CodecError::malformed(
            cube_type,
            format!(
                "expected {DIGITS_PER_RULE} hex digits, found {}",
                digits.len()
            ),
        ));
    }
    let mut faces = Direction::ALL.map(Face::inert);
    for (dir, pair) in Direction::ALL.into_iter().zip(digits.chunks_exact(2)) {
        let nibble = |b: u8| {
            char::from(b).to_digit(16).ok_or_else(|| {
                CodecError::malformed(cube_type, format!("invalid hex digit {:?}", char::from(b)))
            })
        };
        // Two nibbles always fit a byte.
        let byte = (nibble(pair[0])? << 4 | nibble(pair[1])?) as u8;
        faces[dir.index()] = decode_face(dir, byte)?;
    }
    Ok(Rule::new(faces)?)
}

/// Parse a hex genotype string.
///
/// Surrounding whitespace is ignored; digits may be either case. An
/// empty string is [`RuleError::EmptyGenotype`](polycube_core::RuleError).
pub fn parse_hex(s: &str) -> Result<Genotype, CodecError> {
    let rules = s
        .trim()
        .as_bytes()
        .chunks(DIGITS_PER_RULE)
        .enumerate()
        .map(|(i, digits)| decode_rule(i, digits))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Genotype::new(rules)?)
}

fn encode_face(dir: Direction, face: Face) -> Result<u8, CodecError> {
    let magnitude = face.color.unsigned_abs();
    if magnitude > MAX_HEX_COLOR {
        return Err(CodecError::ColorOutOfRange { color: face.color });
    }
    let sign = u8::from(face.color < 0) << 7;
    // Checked against MAX_HEX_COLOR above.
    let magnitude = (magnitude as u8) << 2;
    Ok(sign | magnitude | orientation_index(dir, face.orientation))
}

/// Encode a genotype as lowercase hex.
///
/// Fails with [`CodecError::ColorOutOfRange`] if any colour magnitude
/// exceeds [`MAX_HEX_COLOR`].
pub fn encode_hex(genotype: &Genotype) -> Result<String, CodecError> {
    let mut out = String::with_capacity(genotype.len() * DIGITS_PER_RULE);
    for rule in genotype.rules() {
        for dir in Direction::ALL {
            let byte = encode_face(dir, rule.face(dir))?;
            // Writing to a String cannot fail.
            let _ = write!(out, "{byte:02x}");
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_core::RuleError;

    #[test]
    fn single_positive_face() {
        let g = parse_hex("100000000000").unwrap();
        assert_eq!(g.len(), 1);
        let rule = g.rules()[0];
        assert_eq!(rule.face(Direction::NegX).color, 4);
        assert_eq!(
            rule.face(Direction::NegX).orientation,
            Direction::NegX.default_orientation()
        );
        for dir in &Direction::ALL[1..] {
            assert_eq!(rule.face(*dir).color, 0);
        }
    }

    #[test]
    fn sign_bit_and_orientation_bits() {
        // 0x85 = 1_00001_01: colour -1, one quarter turn.
        let g = parse_hex("0085000000000000000000FF").unwrap();
        assert_eq!(g.len(), 2);
        let first = g.rules()[0].face(Direction::PosX);
        assert_eq!(first.color, -1);
        assert_eq!(first.orientation, face_orientation(Direction::PosX, 1).unwrap());
        // 0xff = 1_11111_11 on +z of the second type.
        let last = g.rules()[1].face(Direction::PosZ);
        assert_eq!(last.color, -31);
        assert_eq!(orientation_index(Direction::PosZ, last.orientation), 3);
    }

    #[test]
    fn encode_is_lowercase_and_canonical() {
        let g = parse_hex("  0085000000000000000000FF\n").unwrap();
        assert_eq!(encode_hex(&g).unwrap(), "0085000000000000000000ff");
    }

    #[test]
    fn rejects_truncated_rule() {
        let err = parse_hex("1000000000000000").unwrap_err();
        assert!(matches!(err, CodecError::MalformedRule { cube_type: 1, .. }));
    }

    #[test]
    fn rejects_non_hex_digit() {
        let err = parse_hex("10000000000g").unwrap_err();
        assert!(matches!(err, CodecError::MalformedRule { cube_type: 0, .. }));
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(
            parse_hex("   ").unwrap_err(),
            CodecError::Rule(RuleError::EmptyGenotype)
        );
    }

    #[test]
    fn colour_too_large_for_hex() {
        let g = Genotype::new(vec![Rule::from_colors([32, 0, 0, 0, 0, 0])]).unwrap();
        assert_eq!(
            encode_hex(&g).unwrap_err(),
            CodecError::ColorOutOfRange { color: 32 }
        );
    }
}
