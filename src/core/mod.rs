//! Core domain types for the quiz
//!
//! This module contains the puzzle record and the outcome rating. Both are
//! pure values with no knowledge of game flow or presentation.

mod outcome;
mod puzzle;

pub use outcome::Outcome;
pub use puzzle::{MIN_OPTIONS, Puzzle, PuzzleError};
pub(crate) use puzzle::RawPuzzle;
