//! Selection operators.
//!
//! Parents are drawn by roulette-wheel selection: each member's chance of
//! being picked is proportional to its share of the total fitness.

// Selection uses intentional casts for statistics
#![allow(clippy::cast_precision_loss)]

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pick an index by roulette-wheel selection.
///
/// Draws a value uniformly in `[0, total)` and returns the first index
/// whose running fitness sum strictly exceeds it, walking in insertion
/// order. `total` must be the sum of `fitness` in that same order.
///
/// If `total` is zero, negative or not finite the wheel is undefined and
/// a uniformly random index is returned instead. Callers drawing many
/// times from one wheel report that once.
///
/// # Panics
///
/// Panics if `fitness` is empty.
#[must_use]
pub fn roulette_select<R: Rng>(fitness: &[f64], total: f64, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from an empty population");

    if !is_valid_total(total) {
        return rng.gen_range(0..fitness.len());
    }

    let lucky = rng.gen_range(0.0..total);
    let mut sum = 0.0;
    for (idx, &f) in fitness.iter().enumerate() {
        sum += f;
        if sum > lucky {
            return idx;
        }
    }

    // Rounding can leave the running sum a hair under the draw when the
    // caller's total was accumulated differently.
    fitness
        .iter()
        .rposition(|&f| f > 0.0)
        .unwrap_or(fitness.len() - 1)
}

/// Check whether `total` defines a usable roulette wheel.
#[must_use]
pub fn is_valid_total(total: f64) -> bool {
    total.is_finite() && total > 0.0
}

/// Fitness summary for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Mean fitness of the population.
    pub mean_fitness: f64,
    /// Best fitness in the population.
    pub best_fitness: f64,
    /// Worst fitness in the population.
    pub worst_fitness: f64,
    /// Standard deviation of fitness.
    pub fitness_std: f64,
}

impl SelectionStats {
    /// Calculate statistics from fitness values.
    #[must_use]
    pub fn from_fitness(fitness: &[f64]) -> Self {
        if fitness.is_empty() {
            return Self {
                mean_fitness: 0.0,
                best_fitness: 0.0,
                worst_fitness: 0.0,
                fitness_std: 0.0,
            };
        }

        let sum: f64 = fitness.iter().sum();
        let mean = sum / fitness.len() as f64;

        let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);

        let variance: f64 =
            fitness.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / fitness.len() as f64;

        Self {
            mean_fitness: mean,
            best_fitness: best,
            worst_fitness: worst,
            fitness_std: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_roulette_is_fitness_proportional() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fitness = vec![0.1, 0.2, 0.3, 0.4];
        let total: f64 = fitness.iter().sum();

        let draws = 100_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[roulette_select(&fitness, total, &mut rng)] += 1;
        }

        for (count, f) in counts.iter().zip(&fitness) {
            let observed = *count as f64 / f64::from(draws);
            assert!(
                (observed - f / total).abs() < 0.01,
                "observed {observed}, expected {}",
                f / total
            );
        }
    }

    #[test]
    fn test_roulette_never_picks_zero_fitness() {
        let mut rng = SmallRng::seed_from_u64(1);
        let fitness = vec![0.0, 0.5, 0.0, 0.5, 0.0];

        for _ in 0..1000 {
            let idx = roulette_select(&fitness, 1.0, &mut rng);
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_roulette_zero_total_falls_back_to_uniform() {
        let mut rng = SmallRng::seed_from_u64(5);
        let fitness = vec![0.0; 4];

        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[roulette_select(&fitness, 0.0, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_valid_total() {
        assert!(is_valid_total(0.5));
        assert!(!is_valid_total(0.0));
        assert!(!is_valid_total(-1.0));
        assert!(!is_valid_total(f64::NAN));
        assert!(!is_valid_total(f64::INFINITY));
    }

    #[test]
    fn test_roulette_single_member() {
        let mut rng = SmallRng::seed_from_u64(9);
        assert_eq!(roulette_select(&[0.25], 0.25, &mut rng), 0);
    }

    #[test]
    fn test_selection_stats() {
        let fitness = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = SelectionStats::from_fitness(&fitness);

        assert!((stats.mean_fitness - 3.0).abs() < 0.001);
        assert!((stats.best_fitness - 5.0).abs() < 0.001);
        assert!((stats.worst_fitness - 1.0).abs() < 0.001);
        assert!((stats.fitness_std - 2.0_f64.sqrt()).abs() < 0.001);
    }

    #[test]
    fn test_selection_stats_empty() {
        let stats = SelectionStats::from_fitness(&[]);
        assert!(stats.best_fitness.abs() < f64::EPSILON);
    }
}
