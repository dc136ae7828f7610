//! A generation: a fixed-size population bred together in one step.

use crate::error::{EvolutionError, EvolutionResult};
use crate::gp::crossover::{CrossoverConfig, crossover};
use crate::gp::genome::Genome;
use crate::gp::mutation::{MutationConfig, mutate};
use crate::gp::selection::{SelectionStats, is_valid_total, roulette_select};
use crate::maze::Grid;
use rand::Rng;

/// Number of genomes per generation in the reference configuration.
pub const POPULATION_SIZE: usize = 140;

/// A population of genomes.
///
/// Membership is fixed after construction; only the members' scores
/// change, on [`Generation::evaluate`].
#[derive(Debug, Clone)]
pub struct Generation {
    /// Members in insertion order.
    genomes: Vec<Genome>,
    /// Sum of member fitness from the last evaluation.
    total_fitness: f64,
    /// Index of the fittest member from the last evaluation.
    fittest: Option<usize>,
    /// Whether `evaluate` has run.
    evaluated: bool,
}

impl Generation {
    /// Create a generation of `size` random genomes of `genome_length`.
    #[must_use]
    pub fn random<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Self {
        Self::from_genomes(
            (0..size)
                .map(|_| Genome::random(genome_length, rng))
                .collect(),
        )
    }

    /// Create an unevaluated generation from existing genomes.
    #[must_use]
    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        Self {
            genomes,
            total_fitness: 0.0,
            fittest: None,
            evaluated: false,
        }
    }

    /// Members in insertion order.
    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Check whether the generation has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Sum of member fitness from the last evaluation.
    #[must_use]
    pub const fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Whether [`Generation::evaluate`] has run.
    #[must_use]
    pub const fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// The best member of the last evaluation, `None` before any.
    ///
    /// Ties go to the earliest member reaching the top score.
    #[must_use]
    pub fn fittest(&self) -> Option<&Genome> {
        self.fittest.map(|idx| &self.genomes[idx])
    }

    /// Score every member against `grid`.
    ///
    /// Resets the total and the fittest member first, so repeated calls
    /// never carry anything over.
    pub fn evaluate(&mut self, grid: &mut Grid) {
        self.total_fitness = 0.0;
        self.fittest = None;

        let mut top_score = 0.0;
        for (idx, genome) in self.genomes.iter_mut().enumerate() {
            let evaluation = genome.evaluate(grid);
            self.total_fitness += evaluation.fitness;

            if evaluation.fitness > top_score {
                top_score = evaluation.fitness;
                self.fittest = Some(idx);
            }
        }

        self.evaluated = true;
    }

    /// Fitness summary of the last evaluation.
    #[must_use]
    pub fn stats(&self) -> SelectionStats {
        let fitness: Vec<f64> = self.genomes.iter().map(Genome::fitness).collect();
        SelectionStats::from_fitness(&fitness)
    }

    /// Breed the next generation.
    ///
    /// Repeatedly draws two parents by roulette-wheel selection, crosses
    /// them into two children and mutates both. Children are appended
    /// until the new generation has as many members as this one; with an
    /// odd size the second child of the final pair is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::NotEvaluated`] before the first
    /// evaluation and [`EvolutionError::EmptyPopulation`] with no members.
    pub fn next_generation<R: Rng>(
        &self,
        crossover_config: &CrossoverConfig,
        mutation_config: &MutationConfig,
        rng: &mut R,
    ) -> EvolutionResult<Self> {
        if self.genomes.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if !self.evaluated {
            return Err(EvolutionError::NotEvaluated);
        }

        if !is_valid_total(self.total_fitness) {
            log::warn!(
                "total fitness is {}, falling back to uniform selection",
                self.total_fitness
            );
        }

        let fitness: Vec<f64> = self.genomes.iter().map(Genome::fitness).collect();
        let target = self.genomes.len();
        let mut children = Vec::with_capacity(target);
        let mut mutations = 0;

        while children.len() < target {
            let parent1 = &self.genomes[roulette_select(&fitness, self.total_fitness, rng)];
            let parent2 = &self.genomes[roulette_select(&fitness, self.total_fitness, rng)];

            let (mut child1, mut child2) = crossover(parent1, parent2, crossover_config, rng);
            mutations += mutate(&mut child1, mutation_config, rng);
            mutations += mutate(&mut child2, mutation_config, rng);

            children.push(child1);
            if children.len() < target {
                children.push(child2);
            }
        }

        log::trace!("bred {target} children with {mutations} mutations");
        Ok(Self::from_genomes(children))
    }
}
