//! Puzzle store
//!
//! An ordered, read-only collection of validated puzzles. The bundled set is
//! compiled into the binary; custom sets can be loaded from JSON files.

mod embedded;
pub mod loader;

pub use embedded::PUZZLES_JSON;
pub use loader::DatasetError;

use crate::core::Puzzle;

/// Smallest dataset a game can run on
pub const MIN_PUZZLES: usize = 3;

/// Fixed, ordered sequence of puzzles
///
/// Never mutated after construction; indices are stable for the lifetime of
/// the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Wrap validated puzzles in a set
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::TooFewPuzzles` when given fewer than
    /// [`MIN_PUZZLES`] puzzles.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, DatasetError> {
        if puzzles.len() < MIN_PUZZLES {
            return Err(DatasetError::TooFewPuzzles {
                count: puzzles.len(),
                min: MIN_PUZZLES,
            });
        }
        Ok(Self { puzzles })
    }

    /// Parse the bundled dataset
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the bundled JSON is malformed.
    pub fn embedded() -> Result<Self, DatasetError> {
        loader::parse_json(PUZZLES_JSON)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Puzzle> {
        self.puzzles.iter()
    }
}

impl<'a> IntoIterator for &'a PuzzleSet {
    type Item = &'a Puzzle;
    type IntoIter = std::slice::Iter<'a, Puzzle>;

    fn into_iter(self) -> Self::IntoIter {
        self.puzzles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_set_loads() {
        let set = PuzzleSet::embedded().unwrap();
        assert!(set.len() >= MIN_PUZZLES);
    }

    #[test]
    fn embedded_set_supports_full_game_length() {
        // The round slider tops out at 15; the bundled set should allow it
        let set = PuzzleSet::embedded().unwrap();
        assert!(set.len() >= 15, "only {} bundled puzzles", set.len());
    }

    #[test]
    fn embedded_solutions_are_options() {
        let set = PuzzleSet::embedded().unwrap();
        for puzzle in &set {
            assert!(
                puzzle.has_option(puzzle.solution()),
                "solution '{}' missing from options",
                puzzle.solution()
            );
        }
    }

    #[test]
    fn new_rejects_small_sets() {
        let puzzles = vec![
            Puzzle::new("><>", ["fish", "bird"], "fish").unwrap(),
            Puzzle::new("=^.^=", ["cat", "dog"], "cat").unwrap(),
        ];
        assert!(matches!(
            PuzzleSet::new(puzzles),
            Err(DatasetError::TooFewPuzzles { count: 2, min: 3 })
        ));
    }

    #[test]
    fn get_out_of_range() {
        let set = PuzzleSet::embedded().unwrap();
        assert!(set.get(set.len()).is_none());
        assert!(set.get(0).is_some());
    }
}
