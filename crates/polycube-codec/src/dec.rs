//! The human-readable decimal encoding: `"1:0|-1:2|||| _ |||||"`.

use crate::error::CodecError;
use polycube_core::{Direction, Face, Genotype, Rule, RuleError};
use polycube_geometry::{face_orientation, orientation_index};

const RULE_SEPARATOR: char = '_';
const FACE_SEPARATOR: char = '|';
const FIELD_SEPARATOR: char = ':';

fn parse_face(cube_type: usize, dir: Direction, field: &str) -> Result<Face, CodecError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(Face::inert(dir));
    }
    let (color, orientation) = match field.split_once(FIELD_SEPARATOR) {
        Some((c, o)) => (c.trim(), o.trim()),
        None => (field, "0"),
    };
    let color: i32 = color.parse().map_err(|_| {
        CodecError::malformed(cube_type, format!("bad colour {color:?} on face {dir}"))
    })?;
    let orientation: u8 = orientation
        .parse()
        .ok()
        .filter(|o| *o < 4)
        .ok_or_else(|| {
            CodecError::malformed(
                cube_type,
                format!("orientation {orientation:?} on face {dir} is not in 0..4"),
            )
        })?;
    Ok(Face::new(color, face_orientation(dir, orientation)?))
}

fn parse_rule(cube_type: usize, s: &str) -> Result<Rule, CodecError> {
    let fields: Vec<&str> = s.split(FACE_SEPARATOR).collect();
    if fields.len() != Direction::ALL.len() {
        return Err(CodecError::malformed(
            cube_type,
            format!("expected 6 faces, found {}", fields.len()),
        ));
    }
    let mut faces = Direction::ALL.map(Face::inert);
    for (dir, field) in Direction::ALL.into_iter().zip(fields) {
        faces[dir.index()] = parse_face(cube_type, dir, field)?;
    }
    Ok(Rule::new(faces)?)
}

/// Parse a decimal genotype string.
pub fn parse_dec(s: &str) -> Result<Genotype, CodecError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RuleError::EmptyGenotype.into());
    }
    let rules = s
        .split(RULE_SEPARATOR)
        .enumerate()
        .map(|(i, r)| parse_rule(i, r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Genotype::new(rules)?)
}

/// Encode a genotype in the decimal format. Inert faces become empty
/// fields.
pub fn encode_dec(genotype: &Genotype) -> String {
    genotype
        .rules()
        .iter()
        .map(|rule| {
            Direction::ALL
                .map(|dir| {
                    let face = rule.face(dir);
                    if face.is_active() {
                        format!("{}:{}", face.color, orientation_index(dir, face.orientation))
                    } else {
                        String::new()
                    }
                })
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("_")
}
