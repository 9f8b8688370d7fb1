//! Ordered lists of cube types.

use crate::error::RuleError;
use crate::id::CubeTypeId;
use crate::rule::Rule;

/// A non-empty, ordered sequence of cube-type rules.
///
/// Ordering matters: it fixes each type's [`CubeTypeId`], the seed type
/// in seeded assembly, and the round order in ordered assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Genotype {
    rules: Vec<Rule>,
}

impl Genotype {
    /// Wrap a rule list. Returns `Err(RuleError::EmptyGenotype)` for an
    /// empty list.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyGenotype);
        }
        Ok(Self { rules })
    }

    /// Number of cube types. Always at least 1.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always returns `false`: construction rejects empty genotypes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The rule for `id`, if it exists.
    pub fn get(&self, id: CubeTypeId) -> Option<&Rule> {
        self.rules.get(id.index())
    }

    /// The rule for `id`, or `RuleError::UnknownCubeType`.
    pub fn rule(&self, id: CubeTypeId) -> Result<&Rule, RuleError> {
        self.get(id).ok_or(RuleError::UnknownCubeType {
            index: id.0,
            cube_types: self.rules.len(),
        })
    }

    /// All rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate `(id, rule)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeTypeId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, r)| (CubeTypeId(i as u32), r))
    }

    /// Largest colour magnitude used by any face.
    pub fn max_color(&self) -> u32 {
        self.rules
            .iter()
            .flat_map(|r| r.faces().iter())
            .map(|f| f.color.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}
