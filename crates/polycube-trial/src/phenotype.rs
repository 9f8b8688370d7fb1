//! Clustering genotypes by the shape they assemble.

use indexmap::IndexMap;
use polycube_core::{Shape, ShapeSignature};
use polycube_shape::lattice_equal;

/// One distinct shape and the genotypes that produce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phenotype {
    /// Index within its signature bucket.
    pub id: usize,
    /// Representative shape (from the first member).
    pub shape: Shape,
    /// Size and dims shared by every member.
    pub signature: ShapeSignature,
    /// Genotype strings in insertion order.
    pub members: Vec<String>,
}

/// Where [`PhenotypeMap::insert`] put a genotype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClusterOutcome {
    /// Bucket the shape fell into.
    pub signature: ShapeSignature,
    /// Phenotype id within the bucket.
    pub phenotype_id: usize,
    /// `true` if an existing phenotype matched; `false` if a new one was
    /// created.
    pub matched: bool,
}

/// Phenotypes bucketed by [`ShapeSignature`].
///
/// Only shapes with equal signatures can be rotations of each other, so
/// the full equality test runs against one bucket only.
#[derive(Clone, Debug, Default)]
pub struct PhenotypeMap {
    buckets: IndexMap<ShapeSignature, Vec<Phenotype>>,
}

impl PhenotypeMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `genotype` under the phenotype of `shape`.
    pub fn insert(&mut self, genotype: impl Into<String>, shape: Shape) -> ClusterOutcome {
        let signature = shape.signature();
        let bucket = self.buckets.entry(signature).or_default();
        if let Some(p) = bucket.iter_mut().find(|p| lattice_equal(&p.shape, &shape)) {
            p.members.push(genotype.into());
            return ClusterOutcome {
                signature,
                phenotype_id: p.id,
                matched: true,
            };
        }
        let id = bucket.len();
        bucket.push(Phenotype {
            id,
            shape,
            signature,
            members: vec![genotype.into()],
        });
        ClusterOutcome {
            signature,
            phenotype_id: id,
            matched: false,
        }
    }

    /// A phenotype by bucket and id.
    pub fn get(&self, signature: &ShapeSignature, id: usize) -> Option<&Phenotype> {
        self.buckets.get(signature)?.get(id)
    }

    /// All phenotypes in one bucket.
    pub fn bucket(&self, signature: &ShapeSignature) -> &[Phenotype] {
        self.buckets.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Signatures in first-seen order.
    pub fn signatures(&self) -> impl Iterator<Item = &ShapeSignature> {
        self.buckets.keys()
    }

    /// Every phenotype, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Phenotype> {
        self.buckets.values().flatten()
    }

    /// Number of distinct phenotypes.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no phenotype has been recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
