//! Coloured faces and cube-type rules.

use crate::direction::Direction;
use crate::error::RuleError;
use smallvec::SmallVec;
use std::fmt;

/// One face of a cube type.
///
/// `color == 0` is inert. A nonzero colour binds only to its exact
/// negation. `orientation` is a lattice unit vector in the face plane and
/// encodes the face's rotation state for torsion matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    /// Signed binding colour.
    pub color: i32,
    /// In-plane orientation vector.
    pub orientation: Direction,
}

impl Face {
    /// Construct a face.
    pub fn new(color: i32, orientation: Direction) -> Self {
        Self { color, orientation }
    }

    /// An inert face on side `dir` at rotation state 0.
    pub fn inert(dir: Direction) -> Self {
        Self::new(0, dir.default_orientation())
    }

    /// Whether this face takes part in binding at all.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.color != 0
    }

    /// Two faces bind iff both are nonzero and their colours sum to zero.
    #[inline]
    pub fn binds(&self, other: &Face) -> bool {
        self.color != 0 && self.color.checked_neg() == Some(other.color)
    }
}

/// A cube type: exactly one [`Face`] per [`Direction`], in index order.
///
/// Rules are immutable values. Rotating one (see `polycube-geometry`)
/// yields a new rule with the faces permuted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    faces: [Face; 6],
}

impl Rule {
    /// Build a rule, checking every orientation lies in its face plane.
    pub fn new(faces: [Face; 6]) -> Result<Self, RuleError> {
        for dir in Direction::ALL {
            let orientation = faces[dir.index()].orientation;
            if !dir.is_perpendicular(orientation) {
                return Err(RuleError::OrientationNotInPlane {
                    direction: dir,
                    orientation,
                });
            }
        }
        Ok(Self { faces })
    }

    /// A rule with six inert faces.
    pub fn inert() -> Self {
        Self {
            faces: Direction::ALL.map(Face::inert),
        }
    }

    /// Build a rule from colours alone, every face at rotation state 0.
    pub fn from_colors(colors: [i32; 6]) -> Self {
        let mut faces = Direction::ALL.map(Face::inert);
        for (face, color) in faces.iter_mut().zip(colors) {
            face.color = color;
        }
        Self { faces }
    }

    /// The face on side `dir`.
    #[inline]
    pub fn face(&self, dir: Direction) -> Face {
        self.faces[dir.index()]
    }

    /// All six faces in direction order.
    #[inline]
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Directions carrying a nonzero colour.
    pub fn active_directions(&self) -> SmallVec<[Direction; 6]> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.faces[d.index()].is_active())
            .collect()
    }

    /// Whether every face is inert.
    pub fn is_inert(&self) -> bool {
        self.faces.iter().all(|f| !f.is_active())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", face.color, face.orientation)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_nonzero_inverse_colours() {
        let a = Face::new(3, Direction::PosY);
        let b = Face::new(-3, Direction::NegZ);
        let c = Face::new(3, Direction::PosY);
        let zero = Face::new(0, Direction::PosY);
        assert!(a.binds(&b));
        assert!(b.binds(&a));
        assert!(!a.binds(&c));
        assert!(!zero.binds(&zero));
    }

    #[test]
    fn extreme_colour_never_binds() {
        let a = Face::new(i32::MIN, Direction::PosY);
        assert!(!a.binds(&a));
    }

    #[test]
    fn rejects_orientation_along_normal() {
        let mut faces = Direction::ALL.map(Face::inert);
        faces[Direction::PosZ.index()].orientation = Direction::NegZ;
        let err = Rule::new(faces).unwrap_err();
        assert_eq!(
            err,
            RuleError::OrientationNotInPlane {
                direction: Direction::PosZ,
                orientation: Direction::NegZ,
            }
        );
    }

    #[test]
    fn active_directions_lists_coloured_faces() {
        let r = Rule::from_colors([1, 0, 0, -2, 0, 5]);
        assert_eq!(
            r.active_directions().as_slice(),
            &[Direction::NegX, Direction::PosY, Direction::PosZ]
        );
        assert!(!r.is_inert());
        assert!(Rule::inert().is_inert());
    }
}
