//! Frontier candidates: empty positions next to the growing shape.

use indexmap::IndexMap;
use polycube_core::{Direction, Face, Pos};
use rand::Rng;

/// Constraint slots of one candidate, indexed by [`Direction`].
///
/// Slot `d` holds the face the neighbour across `d` committed, as that
/// neighbour presents it. A cube placed here must show the negated colour
/// on side `d`.
pub type Slots = [Option<Face>; 6];

/// Candidate positions in insertion order.
///
/// Backed by an [`IndexMap`] so a uniformly random candidate can be
/// picked by index in O(1).
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    candidates: IndexMap<Pos, Slots>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no candidates are pending.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether `pos` is a pending candidate.
    pub fn contains(&self, pos: Pos) -> bool {
        self.candidates.contains_key(&pos)
    }

    /// The slots of the candidate at `pos`.
    pub fn slots(&self, pos: Pos) -> Option<&Slots> {
        self.candidates.get(&pos)
    }

    /// Record that the neighbour across `dir` committed `face` to the
    /// candidate at `pos`, creating the candidate if needed.
    ///
    /// Returns `true` if the candidate was newly created.
    pub fn constrain(&mut self, pos: Pos, dir: Direction, face: Face) -> bool {
        let fresh = !self.candidates.contains_key(&pos);
        let slots = self.candidates.entry(pos).or_insert([None; 6]);
        debug_assert!(slots[dir.index()].is_none(), "slot {dir} at {pos} written twice");
        slots[dir.index()] = Some(face);
        fresh
    }

    /// Remove a candidate, returning its slots.
    pub fn remove(&mut self, pos: Pos) -> Option<Slots> {
        self.candidates.swap_remove(&pos)
    }

    /// A uniformly random candidate position.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Pos> {
        if self.candidates.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.candidates.len());
        self.candidates.get_index(i).map(|(pos, _)| *pos)
    }

    /// Candidate positions in frontier order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.candidates.keys().copied()
    }

    /// Drop every candidate.
    pub fn clear(&mut self) {
        self.candidates.clear();
    }
}
