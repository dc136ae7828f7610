//! Genome representation.
//!
//! A genome is a fixed-length sequence of alleles. Each allele is one
//! single-cell move attempt; walking the sequence from the maze start
//! and measuring how close the walk ends to the finish gives the fitness.

use crate::maze::{Direction, Grid, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of genes per genome in the reference configuration.
pub const GENOME_LENGTH: usize = 70;

/// One gene value: a move direction, or `None` for an unfilled locus.
///
/// `None` only appears in empty shells awaiting crossover and always
/// walks as a no-op.
pub type Allele = Option<Direction>;

/// Outcome of walking a genome through a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// `1 / (distance_to_finish + 1)`, in `(0, 1]`.
    pub fitness: f64,
    /// Whether the walk ended exactly on the finish.
    pub found_exit: bool,
    /// Where the walk ended.
    pub final_position: Position,
}

impl Evaluation {
    /// Score a walk that ended at `position` against `finish`.
    #[must_use]
    pub fn at(position: Position, finish: Position) -> Self {
        let distance = position.manhattan(finish);
        Self {
            fitness: 1.0 / (f64::from(distance) + 1.0),
            found_exit: distance == 0,
            final_position: position,
        }
    }
}

/// A candidate path through the maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Genes in walk order. Length is fixed at construction.
    genes: Box<[Allele]>,
    /// Fitness from the most recent evaluation.
    fitness: f64,
    /// Exit flag from the most recent evaluation.
    found_exit: bool,
}

impl Genome {
    /// Create a genome of `len` random directions.
    #[must_use]
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_genes((0..len).map(|_| Some(Direction::random(rng))).collect())
    }

    /// Create an empty shell of `len` unfilled loci.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self::from_genes(vec![None; len])
    }

    /// Create a genome from an explicit gene sequence.
    #[must_use]
    pub fn from_genes(genes: Vec<Allele>) -> Self {
        Self {
            genes: genes.into_boxed_slice(),
            fitness: 0.0,
            found_exit: false,
        }
    }

    /// Create a genome from a sequence of directions.
    #[must_use]
    pub fn from_directions(directions: &[Direction]) -> Self {
        Self::from_genes(directions.iter().copied().map(Some).collect())
    }

    /// Number of loci.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Check whether the genome has no loci.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene sequence, read-only.
    #[must_use]
    pub fn genes(&self) -> &[Allele] {
        &self.genes
    }

    /// The allele at `locus`.
    ///
    /// # Panics
    ///
    /// Panics if `locus >= self.len()`.
    #[must_use]
    pub fn gene(&self, locus: usize) -> Allele {
        self.genes[locus]
    }

    /// Overwrite the allele at `locus`.
    ///
    /// # Panics
    ///
    /// Panics if `locus >= self.len()`.
    pub fn set_gene(&mut self, locus: usize, allele: Allele) {
        self.genes[locus] = allele;
    }

    /// Mutable access to the gene sequence. The length cannot change.
    pub(crate) fn genes_mut(&mut self) -> &mut [Allele] {
        &mut self.genes
    }

    /// Overwrite every gene with the donor's.
    ///
    /// Fitness and the exit flag are left alone; they are re-derived on the
    /// next evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the donor has a different length.
    pub fn clone_genes_from(&mut self, donor: &Self) {
        self.genes.copy_from_slice(&donor.genes);
    }

    /// Fitness from the most recent evaluation (0 before any).
    #[must_use]
    pub const fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Exit flag from the most recent evaluation.
    #[must_use]
    pub const fn found_exit(&self) -> bool {
        self.found_exit
    }

    /// Walk the genome through `grid` and store the resulting score.
    ///
    /// The visited overlay is cleared first, then every position the walk
    /// occupies is marked. Each call starts fresh from the grid's start.
    pub fn evaluate(&mut self, grid: &mut Grid) -> Evaluation {
        grid.clear_visited();
        let start = grid.start();
        grid.mark_visited(start.row, start.col);

        let mut pos = start;
        for allele in &self.genes {
            pos = advance(grid, pos, *allele);
            grid.mark_visited(pos.row, pos.col);
        }

        let evaluation = Evaluation::at(pos, grid.finish());
        self.fitness = evaluation.fitness;
        self.found_exit = evaluation.found_exit;
        evaluation
    }

    /// The positions occupied by the walk, start first, one entry per
    /// gene after that. Does not touch the grid or the stored score.
    #[must_use]
    pub fn trace(&self, grid: &Grid) -> Vec<Position> {
        let mut pos = grid.start();
        let mut path = Vec::with_capacity(self.genes.len() + 1);
        path.push(pos);
        for allele in &self.genes {
            pos = advance(grid, pos, *allele);
            path.push(pos);
        }
        path
    }
}

/// Apply one move attempt: step if the neighbour is passable, stay put
/// otherwise.
fn advance(grid: &Grid, pos: Position, allele: Allele) -> Position {
    match allele {
        Some(direction) => {
            let next = pos.step(direction);
            if grid.passable(next.row, next.col) {
                next
            } else {
                pos
            }
        }
        None => pos,
    }
}
