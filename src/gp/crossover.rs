//! Crossover operators.
//!
//! Single-point crossover: two parents are spliced at a random locus to
//! form two complementary children.

use crate::gp::genome::Genome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for crossover operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossoverConfig {
    /// Probability that recombination happens at all. Otherwise each child
    /// is a copy of one parent.
    pub crossover_rate: f64,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
        }
    }
}

/// Produce two children from two parents.
///
/// With probability `1 - crossover_rate` the children are plain copies
/// (`child1 <- parent1`, `child2 <- parent2`). Otherwise a crossover
/// point is drawn uniformly from `[0, len)` and the parents are spliced
/// there with [`crossover_at`].
///
/// # Panics
///
/// Panics if the parents differ in length or `crossover_rate` is outside
/// `[0, 1]`.
#[must_use]
pub fn crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    config: &CrossoverConfig,
    rng: &mut R,
) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have the same genome length"
    );

    if parent1.is_empty() || !rng.gen_bool(config.crossover_rate) {
        let mut child1 = Genome::empty(parent1.len());
        let mut child2 = Genome::empty(parent2.len());
        child1.clone_genes_from(parent1);
        child2.clone_genes_from(parent2);
        return (child1, child2);
    }

    let point = rng.gen_range(0..parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Splice two parents at `point`.
///
/// `child1` takes `parent1`'s genes below `point` and `parent2`'s from
/// `point` on; `child2` takes the complement. Children carry no score.
///
/// # Panics
///
/// Panics if the parents differ in length or `point > len`.
#[must_use]
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have the same genome length"
    );

    let len = parent1.len();
    let mut child1 = Genome::empty(len);
    let mut child2 = Genome::empty(len);

    for locus in 0..point {
        child1.set_gene(locus, parent1.gene(locus));
        child2.set_gene(locus, parent2.gene(locus));
    }
    for locus in point..len {
        child1.set_gene(locus, parent2.gene(locus));
        child2.set_gene(locus, parent1.gene(locus));
    }

    (child1, child2)
}
