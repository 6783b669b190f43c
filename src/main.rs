//! ASCII Art Guesser - CLI
//!
//! Quiz game with TUI and line-based modes, plus dataset tooling.

use anyhow::{Context, Result};
use ascii_guesser::{
    commands::{SimulateConfig, run_simple, run_simulation, validate_dataset},
    config::GameConfig,
    game::{GameSession, RandomSource},
    output::{print_dataset_summary, print_simulation_result},
    puzzles::{PuzzleSet, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ascii_guesser",
    about = "Guess what each piece of ASCII art represents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of rounds (clamped to 3..=min(15, puzzles))
    #[arg(short, long, global = true)]
    rounds: Option<usize>,

    /// Puzzle dataset (JSON); the bundled set is used by default
    #[arg(short, long, global = true)]
    puzzles: Option<PathBuf>,

    /// Config file (default: config.toml next to the binary or in the CWD)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a puzzle dataset and summarize it
    Validate,

    /// Play many sessions with a simulated player and report the results
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        sessions: usize,

        /// Seed for puzzle picks and player answers
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Chance the simulated player answers correctly (0.0-1.0)
        #[arg(short, long, default_value = "0.5")]
        accuracy: f64,
    },
}

/// Load the puzzle set from the flag, the config file, or the embedded copy
fn load_puzzles(path: Option<&Path>) -> Result<PuzzleSet> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("could not load puzzles from {}", path.display())),
        None => PuzzleSet::embedded().context("bundled puzzle dataset is invalid"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    // CLI flags win over the config file
    let puzzles_path = cli.puzzles.or(config.puzzles_path);
    let rounds = cli.rounds.unwrap_or(config.default_rounds);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let puzzles = load_puzzles(puzzles_path.as_deref())?;
            run_play_command(&puzzles, rounds)
        }
        Commands::Simple => {
            let puzzles = load_puzzles(puzzles_path.as_deref())?;
            run_simple_command(&puzzles, rounds)
        }
        Commands::Validate => {
            let summary = validate_dataset(puzzles_path.as_deref())?;
            print_dataset_summary(&summary);
            Ok(())
        }
        Commands::Simulate {
            sessions,
            seed,
            accuracy,
        } => {
            let puzzles = load_puzzles(puzzles_path.as_deref())?;
            run_simulate_command(&puzzles, rounds, sessions, seed, accuracy);
            Ok(())
        }
    }
}

fn run_play_command(puzzles: &PuzzleSet, rounds: usize) -> Result<()> {
    use ascii_guesser::interactive::{App, run_tui};

    let app = App::new(puzzles, GameSession::with_rounds(rounds, puzzles));
    run_tui(app)
}

fn run_simple_command(puzzles: &PuzzleSet, rounds: usize) -> Result<()> {
    let session = GameSession::with_rounds(rounds, puzzles);
    let mut source = RandomSource::thread();
    run_simple(puzzles, session, &mut source)?;
    Ok(())
}

fn run_simulate_command(
    puzzles: &PuzzleSet,
    rounds: usize,
    sessions: usize,
    seed: u64,
    accuracy: f64,
) {
    let mut config = SimulateConfig::new(sessions, rounds, seed, accuracy);
    config.show_progress = true;

    println!("Simulating {sessions} sessions of {rounds} rounds...");
    let result = run_simulation(puzzles, &config);
    print_simulation_result(&result);
}
