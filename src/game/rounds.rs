//! Round-count bounds
//!
//! A game lasts between [`MIN_ROUNDS`] and `min(MAX_ROUNDS, puzzles)` rounds.
//! Requests outside that range are clamped, never rejected.

/// Fewest rounds a game can have
pub const MIN_ROUNDS: usize = 3;

/// Most rounds a game can have, regardless of dataset size
pub const MAX_ROUNDS: usize = 15;

/// Round count offered before the player touches the slider
pub const DEFAULT_ROUNDS: usize = 5;

/// Upper bound on rounds for a dataset of `total_puzzles`
///
/// Never below [`MIN_ROUNDS`], so the range stays non-empty even for an
/// undersized dataset.
#[must_use]
pub const fn max_rounds(total_puzzles: usize) -> usize {
    let max = if total_puzzles < MAX_ROUNDS {
        total_puzzles
    } else {
        MAX_ROUNDS
    };
    if max < MIN_ROUNDS { MIN_ROUNDS } else { max }
}

/// Clamp a requested round count into the valid range
///
/// # Examples
/// ```
/// use ascii_guesser::game::clamp_rounds;
///
/// assert_eq!(clamp_rounds(1, 20), 3);
/// assert_eq!(clamp_rounds(7, 20), 7);
/// assert_eq!(clamp_rounds(40, 20), 15);
/// assert_eq!(clamp_rounds(40, 8), 8);
/// ```
#[must_use]
pub const fn clamp_rounds(requested: usize, total_puzzles: usize) -> usize {
    let max = max_rounds(total_puzzles);
    if requested < MIN_ROUNDS {
        MIN_ROUNDS
    } else if requested > max {
        max
    } else {
        requested
    }
}
