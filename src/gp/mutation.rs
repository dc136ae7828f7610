//! Mutation operators.
//!
//! Each locus is mutated independently with a small probability. A
//! mutation complements both bits of the direction's 2-bit encoding:
//!
//! ```text
//! 0 (00) North <-> 3 (11) West
//! 1 (01) South <-> 2 (10) East
//! ```
//!
//! Unfilled loci (`None`) are left as they are.

use crate::gp::genome::{Allele, Genome};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for mutation operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Per-locus probability of flipping the allele.
    pub mutation_rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.001,
        }
    }
}

/// Flip an allele's bits. `None` stays `None`.
#[must_use]
pub fn flip_allele(allele: Allele) -> Allele {
    allele.map(crate::maze::Direction::flipped)
}

/// Mutate a genome in place and return the number of flipped loci.
///
/// A fresh uniform value is drawn for every locus; the locus is flipped
/// when the draw falls below `mutation_rate`.
pub fn mutate<R: Rng>(genome: &mut Genome, config: &MutationConfig, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genome.genes_mut() {
        if rng.r#gen::<f64>() < config.mutation_rate {
            *gene = flip_allele(*gene);
            flipped += 1;
        }
    }
    flipped
}
