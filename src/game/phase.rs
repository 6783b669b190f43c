//! Game phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three screens the game is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choosing the number of rounds
    #[default]
    Setup,
    /// Answering puzzles
    Playing,
    /// Showing the final score
    Finished,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setup => "Setup",
            Self::Playing => "Playing",
            Self::Finished => "Finished",
        })
    }
}
