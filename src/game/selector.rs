//! Puzzle selection
//!
//! Defines the `PuzzleSource` trait and concrete implementations. The game
//! never calls an RNG directly; it asks a source to pick among the indices
//! that have not been shown yet.

use crate::core::Puzzle;
use crate::puzzles::PuzzleSet;
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::{StdRng, ThreadRng};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// A source of puzzle picks
pub trait PuzzleSource {
    /// Pick one index from `available`
    ///
    /// Returns an element of `available`, or `None` if it is empty.
    fn pick(&mut self, available: &[usize]) -> Option<usize>;
}

/// Uniform random picks backed by any `rand` generator
pub struct RandomSource<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<ThreadRng> {
    /// Random source over the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomSource<StdRng> {
    /// Reproducible random source
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleSource for RandomSource<R> {
    fn pick(&mut self, available: &[usize]) -> Option<usize> {
        available.choose(&mut self.rng).copied()
    }
}

/// Replays a fixed sequence of preferred indices
///
/// Each pick takes the next scripted index if it is still available. When the
/// script is exhausted, or names an index that is not available, the lowest
/// available index is used instead.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PuzzleSource for ScriptedSource {
    fn pick(&mut self, available: &[usize]) -> Option<usize> {
        let fallback = available.first().copied();
        match self.script.pop_front() {
            Some(wanted) if available.contains(&wanted) => Some(wanted),
            _ => fallback,
        }
    }
}

/// Indices of `puzzles` not yet in `used`, in dataset order
#[must_use]
pub fn available_indices(total: usize, used: &FxHashSet<usize>) -> Vec<usize> {
    (0..total).filter(|i| !used.contains(i)).collect()
}

/// Select one unused puzzle
///
/// Returns the chosen index with its record, or `None` when every puzzle has
/// been used.
///
/// # Examples
/// ```
/// use ascii_guesser::game::{ScriptedSource, select_puzzle};
/// use ascii_guesser::puzzles::PuzzleSet;
/// use rustc_hash::FxHashSet;
///
/// let puzzles = PuzzleSet::embedded().unwrap();
/// let used: FxHashSet<usize> = [0, 1].into_iter().collect();
/// let mut source = ScriptedSource::new([1, 4]);
///
/// // 1 is already used, so the lowest free index wins
/// let (index, _) = select_puzzle(&puzzles, &used, &mut source).unwrap();
/// assert_eq!(index, 2);
/// ```
pub fn select_puzzle<'a, S: PuzzleSource + ?Sized>(
    puzzles: &'a PuzzleSet,
    used: &FxHashSet<usize>,
    source: &mut S,
) -> Option<(usize, &'a Puzzle)> {
    let available = available_indices(puzzles.len(), used);
    let index = source.pick(&available)?;
    puzzles.get(index).map(|puzzle| (index, puzzle))
}
