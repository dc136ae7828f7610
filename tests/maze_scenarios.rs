//! End-to-end scenarios: genomes walking hand-built mazes, and full runs.
//!
//! Run with: cargo test --release maze_scenarios

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use maze_evo::gp::{CrossoverConfig, MutationConfig};
use maze_evo::{Direction, EvolutionConfig, Generation, Genome, Grid, Position, Simulation};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Start fully enclosed except for an opening to the south.
const ENCLOSED: &str = "
#####
#S#F#
#.#.#
#...#
#####
";

#[test]
fn test_adjacent_finish_first_gene_wins() {
    let mut grid = Grid::parse("
        .....
        .SF..
        .....
    ")
    .unwrap();

    // Only the first locus is filled; the rest are no-ops.
    let mut genome = Genome::empty(70);
    genome.set_gene(0, Some(Direction::East));
    let eval = genome.evaluate(&mut grid);
    assert!(eval.found_exit);
    assert!((eval.fitness - 1.0).abs() < f64::EPSILON);

    let mut single = Genome::from_directions(&[Direction::East]);
    assert!(single.evaluate(&mut grid).found_exit);

    // Any other first move ends one step further away or stays put.
    for direction in [Direction::North, Direction::South, Direction::West] {
        let mut genome = Genome::from_directions(&[direction]);
        let eval = genome.evaluate(&mut grid);
        assert!(!eval.found_exit);
        assert!(eval.fitness < 1.0);
    }
}

#[test]
fn test_enclosed_start_needs_the_exit_direction() {
    let mut grid = Grid::parse(ENCLOSED).unwrap();
    let start = grid.start();
    let finish = grid.finish();

    // Every move except South is blocked from the start cell.
    for direction in [Direction::North, Direction::East, Direction::West] {
        let mut genome = Genome::from_directions(&[direction; 8]);
        let eval = genome.evaluate(&mut grid);
        assert_eq!(eval.final_position, start);
        let expected = 1.0 / (f64::from(start.manhattan(finish)) + 1.0);
        assert!((eval.fitness - expected).abs() < 1e-12);
    }

    let mut solver = Genome::from_directions(&[
        Direction::South,
        Direction::South,
        Direction::East,
        Direction::East,
        Direction::North,
        Direction::North,
    ]);
    let eval = solver.evaluate(&mut grid);
    assert!(eval.found_exit);
    assert_eq!(eval.final_position, Position::new(1, 3));
}

#[test]
fn test_visited_overlay_follows_last_walk() {
    let mut grid = Grid::parse(ENCLOSED).unwrap();

    let mut first = Genome::from_directions(&[Direction::South, Direction::South]);
    first.evaluate(&mut grid);
    assert!(grid.is_visited(Position::new(3, 1)));

    let mut second = Genome::from_directions(&[Direction::North]);
    second.evaluate(&mut grid);
    assert!(!grid.is_visited(Position::new(3, 1)));
    assert_eq!(grid.visited_count(), 1);
}

#[test]
fn test_zero_mutation_breeds_only_parent_genes() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut grid = Grid::reference();
    let mut generation = Generation::random(16, 70, &mut rng);
    generation.evaluate(&mut grid);

    let next = generation
        .next_generation(
            &CrossoverConfig { crossover_rate: 1.0 },
            &MutationConfig { mutation_rate: 0.0 },
            &mut rng,
        )
        .unwrap();

    // Without mutation every child locus holds an allele some parent had
    // at that locus.
    for child in next.genomes() {
        for locus in 0..child.len() {
            assert!(
                generation
                    .genomes()
                    .iter()
                    .any(|parent| parent.gene(locus) == child.gene(locus))
            );
        }
    }
}

#[test]
fn test_reference_maze_run_reports_every_generation() {
    let config = EvolutionConfig {
        max_generations: 40,
        seed: 314,
        ..EvolutionConfig::default()
    };
    let mut sim = Simulation::new(config, Grid::reference()).unwrap();

    let mut reports = Vec::new();
    let outcome = sim.run(|report| reports.push(*report)).unwrap();

    assert_eq!(reports.len(), outcome.generations);
    assert!(outcome.generations <= 40);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.generation, i + 1);
        assert!(report.best_fitness > 0.0 && report.best_fitness <= 1.0);
    }

    let last = reports.last().unwrap();
    assert!((last.best_fitness - outcome.best.fitness()).abs() < 1e-12);
    assert_eq!(outcome.path.first(), Some(&Position::new(7, 14)));
    assert_eq!(outcome.path.len(), 71);
}

#[test]
fn test_reference_maze_is_solvable_by_a_hand_written_genome() {
    let mut grid = Grid::reference();
    // (7,14) -> west to (7,8), north to (3,8), west to (3,7), north to
    // (2,7), west to (2,0).
    let mut moves = vec![Direction::West; 6];
    moves.extend([Direction::North; 4]);
    moves.push(Direction::West);
    moves.push(Direction::North);
    moves.extend([Direction::West; 7]);

    let mut genome = Genome::from_directions(&moves);
    let eval = genome.evaluate(&mut grid);
    assert_eq!(eval.final_position, grid.finish());
    assert!(eval.found_exit);
}
