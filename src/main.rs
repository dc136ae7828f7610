//! Maze-evo CLI - evolve a path through a grid maze from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Maze-evo - genetic path search through a grid maze
#[derive(Parser, Debug)]
#[command(name = "maze-evo")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve genomes until one walks from start to finish
    Run {
        /// Maze layout file (default: built-in reference maze)
        #[arg(short, long)]
        maze: Option<PathBuf>,

        /// JSON evolution config (default: reference constants)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed (overrides the config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Genomes per generation (overrides the config)
        #[arg(short, long)]
        population: Option<usize>,

        /// Genes per genome (overrides the config)
        #[arg(short = 'l', long)]
        genome_length: Option<usize>,

        /// Stop after N generations (overrides the config). Defaults to
        /// 10000 when the config sets no limit; pass 0 to run until the
        /// exit is found, which never ends if the finish is unreachable
        #[arg(short = 'g', long)]
        max_generations: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show a progress spinner
        #[arg(long)]
        progress: bool,
    },

    /// Print a maze layout
    Show {
        /// Maze layout file (default: built-in reference maze)
        #[arg(short, long)]
        maze: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            maze,
            config,
            seed,
            population,
            genome_length,
            max_generations,
            format,
            progress,
        } => cli::run::execute(
            maze,
            config,
            cli::run::Overrides {
                seed,
                population,
                genome_length,
                max_generations,
            },
            format,
            progress,
        ),

        Commands::Show { maze } => cli::show::execute(maze),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
