//! ASCII Art Guesser
//!
//! A quiz game: each round shows a piece of ASCII art and asks which label it
//! represents. The game logic is a pure state machine over a validated,
//! read-only puzzle set, with an injectable random source for puzzle picks.
//!
//! # Quick Start
//!
//! ```rust
//! use ascii_guesser::game::{GamePhase, GameSession, RandomSource};
//! use ascii_guesser::puzzles::PuzzleSet;
//!
//! let puzzles = PuzzleSet::embedded().unwrap();
//! let mut source = RandomSource::seeded(7);
//!
//! let session = GameSession::new(&puzzles)
//!     .configure(3, &puzzles)
//!     .start(&puzzles, &mut source);
//!
//! let solution = session.current_puzzle(&puzzles).unwrap().solution().to_string();
//! let session = session.select_answer(&solution, &puzzles);
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.phase(), GamePhase::Playing);
//! ```

// Core domain types
pub mod core;

// Round selection and the game state machine
pub mod game;

// Puzzle datasets
pub mod puzzles;

// Settings file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
