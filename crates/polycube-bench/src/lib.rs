//! Benchmark workloads for the polycube workspace.
//!
//! - [`rod_genotype`]: an `n`-type genotype that always assembles a rod of `n`
//! - [`random_polycube`]: a connected random shape, reproducible from a seed
//! - [`survey_batch`]: a mixed batch of genotype strings

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use polycube_core::{Direction, Genotype, Pos, Rule, Shape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A genotype of `n` cube types that chain into a rod along one axis.
///
/// Type `k` carries colour `k + 1` on `+x` and `-k` on `-x`, so every bond
/// is unique and the result is deterministic. `n` is clamped to at least 1.
pub fn rod_genotype(n: usize) -> Genotype {
    let n = n.max(1) as i32;
    let rules = (0..n)
        .map(|k| {
            let minus_x = if k == 0 { 0 } else { -k };
            let plus_x = if k == n - 1 { 0 } else { k + 1 };
            Rule::from_colors([minus_x, plus_x, 0, 0, 0, 0])
        })
        .collect();
    Genotype::new(rules).unwrap()
}

/// A connected polycube of `cells` cubes grown by random accretion.
pub fn random_polycube(cells: usize, seed: u64) -> Shape {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grown = vec![Pos::ORIGIN];
    while grown.len() < cells {
        let from = grown[rng.random_range(0..grown.len())];
        let step = Direction::ALL[rng.random_range(0..6)];
        let next = from.step(step);
        if !grown.contains(&next) {
            grown.push(next);
        }
    }
    Shape::new(grown)
}

/// `copies` repetitions of a mix of bounded, unbounded and random genotypes.
pub fn survey_batch(copies: usize) -> Vec<String> {
    const MIX: [&str; 6] = [
        "000000000000",
        "048400000000",
        "000400000000840000000000",
        "040400000000840000000000",
        "000400040000840000000000",
        "040400000000840000000000840400000000",
    ];
    MIX.iter()
        .cycle()
        .take(MIX.len() * copies)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rod_genotype_links_neighbours() {
        let g = rod_genotype(4);
        assert_eq!(g.len(), 4);
        assert_eq!(g.max_color(), 3);
        assert!(g.rules()[0].faces()[0].color == 0);
        assert!(g.rules()[3].faces()[1].color == 0);
    }

    #[test]
    fn random_polycube_has_requested_size() {
        let s = random_polycube(12, 3);
        assert_eq!(s.size(), 12);
        assert_eq!(random_polycube(12, 3), s);
    }
}
