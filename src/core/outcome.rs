//! End-of-game outcome rating
//!
//! Derived purely from the final score and the number of rounds played.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating shown on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every round answered correctly
    Perfect,
    /// At least half the rounds answered correctly
    Good,
    /// Fewer than half the rounds answered correctly
    NeedsPractice,
}

impl Outcome {
    /// All outcomes, best first
    pub const ALL: [Self; 3] = [Self::Perfect, Self::Good, Self::NeedsPractice];

    /// Rate a final score
    ///
    /// Exactly half counts as `Good`.
    ///
    /// # Examples
    /// ```
    /// use ascii_guesser::core::Outcome;
    ///
    /// assert_eq!(Outcome::from_score(5, 5), Outcome::Perfect);
    /// assert_eq!(Outcome::from_score(2, 4), Outcome::Good);
    /// assert_eq!(Outcome::from_score(1, 3), Outcome::NeedsPractice);
    /// ```
    #[must_use]
    pub const fn from_score(score: usize, rounds: usize) -> Self {
        if score >= rounds {
            Self::Perfect
        } else if score * 2 >= rounds {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    /// Short machine-friendly label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Good => "good",
            Self::NeedsPractice => "needs practice",
        }
    }

    /// Message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "🏆 Perfect!",
            Self::Good => "👍 Great job!",
            Self::NeedsPractice => "💪 Keep practicing!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
