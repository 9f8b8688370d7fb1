//! Genotypes with known assembly outcomes.
//!
//! Each fixture comes with its hex string so codec tests and assembly
//! tests share the same inputs:
//!
//! - [`inert_monomer`]: one inert cube; always a single cube.
//! - [`infinite_chain`]: self-complementary on ±x; never terminates.
//! - [`dimer`]: two complementary types; always two cubes.
//! - [`trimer`]: a two-armed centre plus a cap; a straight rod of three.
//! - [`l_tromino`]: arms on +x and +y plus a cap; an L of three.
//! - [`random_rod`]: centre, cap and an extender; rods of random length.
//! - [`linear_chain`]: three types with one partner each; a rod of three
//!   that the ordered policy only finishes by revisiting earlier types.

use polycube_core::{Genotype, Rule};

fn genotype(colors: &[[i32; 6]]) -> Genotype {
    Genotype::new(colors.iter().copied().map(Rule::from_colors).collect())
        .expect("fixture genotypes are non-empty")
}

pub const INERT_MONOMER_HEX: &str = "000000000000";
pub const INFINITE_CHAIN_HEX: &str = "048400000000";
pub const DIMER_HEX: &str = "000400000000840000000000";
pub const TRIMER_HEX: &str = "040400000000840000000000";
pub const L_TROMINO_HEX: &str = "000400040000840000000000";
pub const RANDOM_ROD_HEX: &str = "040400000000840000000000840400000000";
pub const LINEAR_CHAIN_HEX: &str = "880000000000000400000000840800000000";

/// `[0, 0, 0, 0, 0, 0]`
pub fn inert_monomer() -> Genotype {
    genotype(&[[0; 6]])
}

/// `[1, -1, 0, 0, 0, 0]`
pub fn infinite_chain() -> Genotype {
    genotype(&[[1, -1, 0, 0, 0, 0]])
}

/// `[0, 1, 0, 0, 0, 0]` and `[-1, 0, 0, 0, 0, 0]`.
pub fn dimer() -> Genotype {
    genotype(&[[0, 1, 0, 0, 0, 0], [-1, 0, 0, 0, 0, 0]])
}

/// `[1, 1, 0, 0, 0, 0]` and the cap `[-1, 0, 0, 0, 0, 0]`.
pub fn trimer() -> Genotype {
    genotype(&[[1, 1, 0, 0, 0, 0], [-1, 0, 0, 0, 0, 0]])
}

/// `[0, 1, 0, 1, 0, 0]` and the cap `[-1, 0, 0, 0, 0, 0]`.
pub fn l_tromino() -> Genotype {
    genotype(&[[0, 1, 0, 1, 0, 0], [-1, 0, 0, 0, 0, 0]])
}

/// Centre `[1, 1, 0, 0, 0, 0]`, cap `[-1, 0, 0, 0, 0, 0]`, extender
/// `[-1, 1, 0, 0, 0, 0]`. Every open end is capped or extended at
/// random, so repeated runs give rods of different lengths.
pub fn random_rod() -> Genotype {
    genotype(&[
        [1, 1, 0, 0, 0, 0],
        [-1, 0, 0, 0, 0, 0],
        [-1, 1, 0, 0, 0, 0],
    ])
}

/// `[-2, 0, 0, 0, 0, 0]`, `[0, 1, 0, 0, 0, 0]` and `[-1, 2, 0, 0, 0, 0]`:
/// type 1 binds type 2, which binds type 0. Not part of [`all`].
pub fn linear_chain() -> Genotype {
    genotype(&[
        [-2, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0],
        [-1, 2, 0, 0, 0, 0],
    ])
}

/// Every fixture paired with its hex string.
pub fn all() -> Vec<(&'static str, Genotype)> {
    vec![
        (INERT_MONOMER_HEX, inert_monomer()),
        (INFINITE_CHAIN_HEX, infinite_chain()),
        (DIMER_HEX, dimer()),
        (TRIMER_HEX, trimer()),
        (L_TROMINO_HEX, l_tromino()),
        (RANDOM_ROD_HEX, random_rod()),
    ]
}
