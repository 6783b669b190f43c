//! Simulation command
//!
//! Plays many sessions with a scripted player of fixed accuracy and reports
//! how scores and outcomes distribute. Sessions are independent and run in
//! parallel; each one is seeded, so a run is reproducible.

use crate::core::{Outcome, Puzzle};
use crate::game::{GamePhase, GameSession, RandomSource};
use crate::puzzles::PuzzleSet;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub sessions: usize,
    pub rounds: usize,
    pub seed: u64,
    /// Chance the simulated player answers correctly, in `[0, 1]`
    pub accuracy: f64,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub fn new(sessions: usize, rounds: usize, seed: u64, accuracy: f64) -> Self {
        Self {
            sessions,
            rounds,
            seed,
            accuracy: if accuracy.is_nan() {
                0.0
            } else {
                accuracy.clamp(0.0, 1.0)
            },
            show_progress: false,
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub sessions: usize,
    pub rounds: usize,
    pub accuracy: f64,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    pub score_distribution: BTreeMap<usize, usize>,
    pub outcomes: BTreeMap<Outcome, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Number of sessions that ended with `outcome`
    #[must_use]
    pub fn outcome_count(&self, outcome: Outcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }
}

/// Final state of one simulated session
struct SessionOutcome {
    score: usize,
    outcome: Outcome,
}

/// Run `config.sessions` independent sessions
pub fn run_simulation(puzzles: &PuzzleSet, config: &SimulateConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.sessions as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<SessionOutcome> = (0..config.sessions)
        .into_par_iter()
        .map(|i| {
            let session_seed = config.seed.wrapping_add(i as u64);
            let result = play_session(puzzles, config.rounds, config.accuracy, session_seed);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut score_distribution = BTreeMap::new();
    let mut outcomes = BTreeMap::new();
    let mut min_score = usize::MAX;
    let mut max_score = 0;
    let mut total = 0;

    for result in &results {
        *score_distribution.entry(result.score).or_insert(0) += 1;
        *outcomes.entry(result.outcome).or_insert(0) += 1;
        min_score = min_score.min(result.score);
        max_score = max_score.max(result.score);
        total += result.score;
    }

    let sessions = results.len();
    let rounds = GameSession::with_rounds(config.rounds, puzzles).round_count();
    let duration = start.elapsed();
    tracing::info!(sessions, rounds, ?duration, "simulation complete");

    SimulationResult {
        sessions,
        rounds,
        accuracy: config.accuracy,
        average_score: if sessions == 0 {
            0.0
        } else {
            total as f64 / sessions as f64
        },
        min_score: if sessions == 0 { 0 } else { min_score },
        max_score,
        score_distribution,
        outcomes,
        duration,
    }
}

fn play_session(puzzles: &PuzzleSet, rounds: usize, accuracy: f64, seed: u64) -> SessionOutcome {
    let mut source = RandomSource::seeded(seed);
    let mut player = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x5eed);

    let mut session = GameSession::with_rounds(rounds, puzzles).start(puzzles, &mut source);

    while session.phase() == GamePhase::Playing {
        let Some(puzzle) = session.current_puzzle(puzzles) else {
            break;
        };
        let answer = choose_answer(puzzle, accuracy, &mut player).to_string();
        session = session
            .select_answer(&answer, puzzles)
            .advance(puzzles, &mut source);
    }

    SessionOutcome {
        score: session.score(),
        outcome: Outcome::from_score(session.score(), session.round_count()),
    }
}

fn choose_answer<'a, R: Rng>(puzzle: &'a Puzzle, accuracy: f64, rng: &mut R) -> &'a str {
    if rng.random_bool(accuracy) {
        return puzzle.solution();
    }

    let wrong: Vec<&String> = puzzle
        .options()
        .iter()
        .filter(|o| !puzzle.is_solution(o))
        .collect();

    wrong
        .choose(rng)
        .copied()
        .map_or_else(|| puzzle.solution(), |o| o.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> PuzzleSet {
        PuzzleSet::embedded().unwrap()
    }

    #[test]
    fn simulation_runs() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(50, 5, 1, 0.5));

        assert_eq!(result.sessions, 50);
        assert_eq!(result.rounds, 5);
        assert!(result.min_score <= result.max_score);
        assert!(result.max_score <= 5);
        assert!(result.average_score >= result.min_score as f64);
        assert!(result.average_score <= result.max_score as f64);
    }

    #[test]
    fn distributions_sum_to_sessions() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(40, 7, 9, 0.6));

        let by_score: usize = result.score_distribution.values().sum();
        let by_outcome: usize = result.outcomes.values().sum();
        assert_eq!(by_score, 40);
        assert_eq!(by_outcome, 40);
    }

    #[test]
    fn perfect_player_always_perfect() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(20, 10, 3, 1.0));
        assert_eq!(result.outcome_count(Outcome::Perfect), 20);
        assert_eq!(result.min_score, 10);
    }

    #[test]
    fn hopeless_player_needs_practice() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(20, 4, 3, 0.0));
        assert_eq!(result.outcome_count(Outcome::NeedsPractice), 20);
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn same_seed_same_result() {
        let puzzles = embedded();
        let config = SimulateConfig::new(30, 6, 77, 0.5);
        let a = run_simulation(&puzzles, &config);
        let b = run_simulation(&puzzles, &config);
        assert_eq!(a.score_distribution, b.score_distribution);
        assert_eq!(a.outcomes, b.outcomes);
    }

    #[test]
    fn rounds_are_clamped() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(5, 1, 0, 0.5));
        assert_eq!(result.rounds, 3);
    }

    #[test]
    fn accuracy_is_clamped() {
        assert!((SimulateConfig::new(1, 3, 0, 2.0).accuracy - 1.0).abs() < f64::EPSILON);
        assert!(SimulateConfig::new(1, 3, 0, -1.0).accuracy.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_simulation() {
        let result = run_simulation(&embedded(), &SimulateConfig::new(0, 5, 0, 0.5));
        assert_eq!(result.sessions, 0);
        assert_eq!(result.min_score, 0);
        assert!(result.average_score.abs() < f64::EPSILON);
    }
}
