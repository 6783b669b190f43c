//! Game session state machine
//!
//! `GameSession` is a plain serializable value. Every transition takes the
//! session by value and returns the next one; transitions that do not apply
//! to the current state return the session unchanged.
//!
//! ```text
//! Setup --start--> Playing --advance (last round)--> Finished
//!   ^                                                   |
//!   +--------------------- restart ---------------------+
//! ```

use super::phase::GamePhase;
use super::rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, clamp_rounds, max_rounds};
use super::selector::{PuzzleSource, select_puzzle};
use crate::core::{Outcome, Puzzle};
use crate::puzzles::PuzzleSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record of one answered round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub puzzle_index: usize,
    pub chosen: String,
    pub correct: bool,
}

/// Complete state of one play-through
///
/// Deserializing checks the round bookkeeping, so a restored session is one
/// the transitions could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    phase: GamePhase,
    round_count: usize,
    current_round: usize,
    score: usize,
    used_indices: FxHashSet<usize>,
    current_puzzle: Option<usize>,
    selected_option: Option<String>,
    history: Vec<RoundResult>,
}

/// Error type for saved sessions that break the round bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("round count {0} is out of range")]
    RoundCount(usize),
    #[error("session in setup carries round state")]
    StaleSetup,
    #[error("round {round} is past the last of {rounds} rounds")]
    RoundOutOfRange { round: usize, rounds: usize },
    #[error("current puzzle is missing or not marked used")]
    MissingPuzzle,
    #[error("{used} puzzles used by round {round}")]
    UsedMismatch { used: usize, round: usize },
    #[error("answer history does not match round {round}")]
    HistoryMismatch { round: usize },
    #[error("score {score} does not match {correct} correct answers")]
    ScoreMismatch { score: usize, correct: usize },
}

/// Unchecked wire shape of a session
#[derive(Deserialize)]
struct SessionRecord {
    phase: GamePhase,
    round_count: usize,
    current_round: usize,
    score: usize,
    used_indices: FxHashSet<usize>,
    current_puzzle: Option<usize>,
    selected_option: Option<String>,
    history: Vec<RoundResult>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = SessionError;

    fn try_from(r: SessionRecord) -> Result<Self, Self::Error> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&r.round_count) {
            return Err(SessionError::RoundCount(r.round_count));
        }

        if r.phase == GamePhase::Setup {
            let clean = r.current_round == 0
                && r.score == 0
                && r.used_indices.is_empty()
                && r.current_puzzle.is_none()
                && r.selected_option.is_none()
                && r.history.is_empty();
            if !clean {
                return Err(SessionError::StaleSetup);
            }
        } else {
            let round = r.current_round;
            if round >= r.round_count {
                return Err(SessionError::RoundOutOfRange {
                    round,
                    rounds: r.round_count,
                });
            }
            if !r.current_puzzle.is_some_and(|i| r.used_indices.contains(&i)) {
                return Err(SessionError::MissingPuzzle);
            }
            if r.used_indices.len() != round + 1 {
                return Err(SessionError::UsedMismatch {
                    used: r.used_indices.len(),
                    round,
                });
            }

            // One history entry per finished round, plus this round once answered
            let answered = round + usize::from(r.selected_option.is_some());
            let last_matches = match (&r.selected_option, r.history.last()) {
                (Some(chosen), Some(last)) => {
                    *chosen == last.chosen && r.current_puzzle == Some(last.puzzle_index)
                }
                (None, _) => true,
                (Some(_), None) => false,
            };
            let finished_unanswered =
                r.phase == GamePhase::Finished && r.selected_option.is_none();
            if r.history.len() != answered || !last_matches || finished_unanswered {
                return Err(SessionError::HistoryMismatch { round });
            }
        }

        let correct = r.history.iter().filter(|h| h.correct).count();
        if r.score != correct {
            return Err(SessionError::ScoreMismatch {
                score: r.score,
                correct,
            });
        }

        Ok(Self {
            phase: r.phase,
            round_count: r.round_count,
            current_round: r.current_round,
            score: r.score,
            used_indices: r.used_indices,
            current_puzzle: r.current_puzzle,
            selected_option: r.selected_option,
            history: r.history,
        })
    }
}

impl GameSession {
    /// Fresh session in Setup with the default round count
    #[must_use]
    pub fn new(puzzles: &PuzzleSet) -> Self {
        Self::with_rounds(DEFAULT_ROUNDS, puzzles)
    }

    /// Fresh session in Setup with `rounds` (clamped) preselected
    #[must_use]
    pub fn with_rounds(rounds: usize, puzzles: &PuzzleSet) -> Self {
        Self {
            phase: GamePhase::Setup,
            round_count: clamp_rounds(rounds, puzzles.len()),
            current_round: 0,
            score: 0,
            used_indices: FxHashSet::default(),
            current_puzzle: None,
            selected_option: None,
            history: Vec::new(),
        }
    }

    // ── Transitions ──

    /// Set the number of rounds
    ///
    /// Only applies in Setup. Out-of-range values are clamped to
    /// `[3, min(15, puzzles)]`.
    #[must_use]
    pub fn configure(mut self, rounds: usize, puzzles: &PuzzleSet) -> Self {
        if self.phase != GamePhase::Setup {
            tracing::debug!(phase = %self.phase, "ignoring configure outside setup");
            return self;
        }

        self.round_count = clamp_rounds(rounds, puzzles.len());
        tracing::debug!(requested = rounds, rounds = self.round_count, "configured rounds");
        self
    }

    /// Begin play: reset score and rounds, then draw the first puzzle
    ///
    /// Only applies in Setup.
    #[must_use]
    pub fn start<S: PuzzleSource + ?Sized>(mut self, puzzles: &PuzzleSet, source: &mut S) -> Self {
        if self.phase != GamePhase::Setup {
            tracing::debug!(phase = %self.phase, "ignoring start outside setup");
            return self;
        }

        // Re-clamp in case the session was built against a different set
        self.round_count = clamp_rounds(self.round_count, puzzles.len());
        self.score = 0;
        self.current_round = 0;
        self.used_indices.clear();
        self.history.clear();
        self.selected_option = None;

        let Some((index, _)) = select_puzzle(puzzles, &self.used_indices, source) else {
            tracing::warn!(puzzles = puzzles.len(), "no puzzle available to start with");
            return self;
        };

        self.used_indices.insert(index);
        self.current_puzzle = Some(index);
        self.phase = GamePhase::Playing;
        tracing::info!(rounds = self.round_count, first = index, "game started");
        self
    }

    /// Answer the current puzzle
    ///
    /// Only applies while Playing and before an answer was chosen this round;
    /// options the current puzzle does not offer are ignored.
    #[must_use]
    pub fn select_answer(mut self, option: &str, puzzles: &PuzzleSet) -> Self {
        if self.phase != GamePhase::Playing || self.selected_option.is_some() {
            tracing::debug!(phase = %self.phase, "ignoring answer");
            return self;
        }

        let Some((index, puzzle)) = self.current_index_and_puzzle(puzzles) else {
            return self;
        };

        if !puzzle.has_option(option) {
            tracing::debug!(option, "ignoring answer not offered by puzzle");
            return self;
        }

        let correct = puzzle.is_solution(option);
        if correct {
            self.score += 1;
        }

        self.selected_option = Some(option.to_string());
        self.history.push(RoundResult {
            puzzle_index: index,
            chosen: option.to_string(),
            correct,
        });
        tracing::debug!(round = self.current_round, correct, score = self.score, "answered");
        self
    }

    /// Move to the next round, or finish after the last one
    ///
    /// Only applies while Playing with an answer chosen.
    #[must_use]
    pub fn advance<S: PuzzleSource + ?Sized>(
        mut self,
        puzzles: &PuzzleSet,
        source: &mut S,
    ) -> Self {
        if self.phase != GamePhase::Playing || self.selected_option.is_none() {
            tracing::debug!(phase = %self.phase, "ignoring advance");
            return self;
        }

        if self.is_last_round() {
            self.phase = GamePhase::Finished;
            tracing::info!(score = self.score, rounds = self.round_count, "game finished");
            return self;
        }

        let Some((index, _)) = select_puzzle(puzzles, &self.used_indices, source) else {
            tracing::warn!(
                used = self.used_indices.len(),
                "ran out of puzzles before the last round"
            );
            self.phase = GamePhase::Finished;
            return self;
        };

        self.used_indices.insert(index);
        self.current_puzzle = Some(index);
        self.current_round += 1;
        self.selected_option = None;
        tracing::debug!(round = self.current_round, puzzle = index, "next round");
        self
    }

    /// Return to Setup from any phase, keeping the chosen round count
    #[must_use]
    pub fn restart(self) -> Self {
        tracing::debug!(phase = %self.phase, "restart");
        Self {
            phase: GamePhase::Setup,
            round_count: self.round_count,
            current_round: 0,
            score: 0,
            used_indices: FxHashSet::default(),
            current_puzzle: None,
            selected_option: None,
            history: Vec::new(),
        }
    }

    // ── Queries ──

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn round_count(&self) -> usize {
        self.round_count
    }

    /// Zero-based index of the round being played
    #[inline]
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.current_round
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn used_indices(&self) -> &FxHashSet<usize> {
        &self.used_indices
    }

    /// Dataset index of the puzzle on screen
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current_puzzle
    }

    #[must_use]
    pub fn current_puzzle<'a>(&self, puzzles: &'a PuzzleSet) -> Option<&'a Puzzle> {
        self.current_puzzle.and_then(|index| puzzles.get(index))
    }

    fn current_index_and_puzzle<'a>(&self, puzzles: &'a PuzzleSet) -> Option<(usize, &'a Puzzle)> {
        let index = self.current_puzzle?;
        puzzles.get(index).map(|puzzle| (index, puzzle))
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    /// Answers given so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Whether the round on screen is the final one
    #[must_use]
    pub const fn is_last_round(&self) -> bool {
        self.current_round + 1 >= self.round_count
    }

    /// Whether this round's answer was right; `None` before answering
    #[must_use]
    pub fn is_correct(&self, puzzles: &PuzzleSet) -> Option<bool> {
        let selected = self.selected_option.as_deref()?;
        self.current_puzzle(puzzles)
            .map(|puzzle| puzzle.is_solution(selected))
    }

    /// Final rating, available once the game is finished
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Finished => Some(Outcome::from_score(self.score, self.round_count)),
            GamePhase::Setup | GamePhase::Playing => None,
        }
    }

    /// "Turn k/N" as shown in the play header
    #[must_use]
    pub fn turn_label(&self) -> String {
        format!("Turn {}/{}", self.current_round + 1, self.round_count)
    }

    /// Label for the control that calls [`Self::advance`]
    #[must_use]
    pub const fn next_label(&self) -> &'static str {
        if self.is_last_round() {
            "See Results"
        } else {
            "Next"
        }
    }

    /// Largest round count the slider allows for `puzzles`
    #[must_use]
    pub fn max_rounds_for(puzzles: &PuzzleSet) -> usize {
        max_rounds(puzzles.len())
    }
}
