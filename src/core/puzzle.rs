//! Puzzle record representation
//!
//! A Puzzle stores one piece of ASCII art with its answer options. Records are
//! validated once on construction, so the rest of the crate can rely on the
//! solution being one of the options.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of options a puzzle must offer
pub const MIN_OPTIONS: usize = 2;

/// A single ASCII-art quiz entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    #[serde(rename = "ascii_art_string")]
    art: String,
    options: Vec<String>,
    solution: String,
}

/// Error type for malformed puzzle records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("ASCII art is empty")]
    EmptyArt,
    #[error("puzzle needs at least {MIN_OPTIONS} options, got {0}")]
    TooFewOptions(usize),
    #[error("option text is blank")]
    BlankOption,
    #[error("option '{0}' appears more than once")]
    DuplicateOption(String),
    #[error("solution '{0}' is not one of the options")]
    SolutionNotInOptions(String),
}

/// Wire shape of a puzzle as it appears in the JSON dataset, before validation
#[derive(Debug, Deserialize)]
pub(crate) struct RawPuzzle {
    pub(crate) ascii_art_string: String,
    pub(crate) options: Vec<String>,
    pub(crate) solution: String,
}

impl RawPuzzle {
    pub(crate) fn validate(self) -> Result<Puzzle, PuzzleError> {
        Puzzle::new(self.ascii_art_string, self.options, self.solution)
    }
}

impl Puzzle {
    /// Create a new Puzzle, checking every record-level invariant
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - The art is empty or whitespace only
    /// - There are fewer than two options
    /// - An option is blank or repeated
    /// - The solution is not one of the options
    ///
    /// # Examples
    /// ```
    /// use ascii_guesser::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("=^.^=", ["cat", "dog", "fox"], "cat").unwrap();
    /// assert_eq!(puzzle.solution(), "cat");
    ///
    /// assert!(Puzzle::new("=^.^=", ["cat", "dog"], "owl").is_err());
    /// ```
    pub fn new<I, S>(
        art: impl Into<String>,
        options: I,
        solution: impl Into<String>,
    ) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let art = art.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let solution = solution.into();

        if art.trim().is_empty() {
            return Err(PuzzleError::EmptyArt);
        }

        if options.len() < MIN_OPTIONS {
            return Err(PuzzleError::TooFewOptions(options.len()));
        }

        let mut seen = FxHashSet::default();
        for option in &options {
            if option.trim().is_empty() {
                return Err(PuzzleError::BlankOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(PuzzleError::DuplicateOption(option.clone()));
            }
        }

        if !seen.contains(solution.as_str()) {
            return Err(PuzzleError::SolutionNotInOptions(solution));
        }

        Ok(Self {
            art,
            options,
            solution,
        })
    }

    /// The ASCII art to display
    #[inline]
    #[must_use]
    pub fn art(&self) -> &str {
        &self.art
    }

    /// Answer options in display order
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct option
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Check whether `option` is the correct answer
    #[inline]
    #[must_use]
    pub fn is_solution(&self, option: &str) -> bool {
        self.solution == option
    }

    /// Check whether `option` is offered by this puzzle
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl<'de> Deserialize<'de> for Puzzle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawPuzzle::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_creation_valid() {
        let puzzle = Puzzle::new("<:3 )~", ["mouse", "cat", "snake"], "mouse").unwrap();
        assert_eq!(puzzle.art(), "<:3 )~");
        assert_eq!(puzzle.options(), &["mouse", "cat", "snake"]);
        assert_eq!(puzzle.solution(), "mouse");
    }

    #[test]
    fn puzzle_rejects_empty_art() {
        assert_eq!(
            Puzzle::new("   \n ", ["a", "b"], "a"),
            Err(PuzzleError::EmptyArt)
        );
    }

    #[test]
    fn puzzle_rejects_too_few_options() {
        assert_eq!(
            Puzzle::new("><>", ["fish"], "fish"),
            Err(PuzzleError::TooFewOptions(1))
        );
        assert_eq!(
            Puzzle::new("><>", Vec::<String>::new(), "fish"),
            Err(PuzzleError::TooFewOptions(0))
        );
    }

    #[test]
    fn puzzle_rejects_duplicate_options() {
        assert_eq!(
            Puzzle::new("><>", ["fish", "bird", "fish"], "fish"),
            Err(PuzzleError::DuplicateOption("fish".to_string()))
        );
    }

    #[test]
    fn puzzle_rejects_blank_option() {
        assert_eq!(
            Puzzle::new("><>", ["fish", " "], "fish"),
            Err(PuzzleError::BlankOption)
        );
    }

    #[test]
    fn puzzle_rejects_unknown_solution() {
        assert_eq!(
            Puzzle::new("><>", ["fish", "bird"], "whale"),
            Err(PuzzleError::SolutionNotInOptions("whale".to_string()))
        );
    }

    #[test]
    fn puzzle_option_checks() {
        let puzzle = Puzzle::new("><>", ["fish", "bird"], "fish").unwrap();
        assert!(puzzle.is_solution("fish"));
        assert!(!puzzle.is_solution("bird"));
        assert!(puzzle.has_option("bird"));
        assert!(!puzzle.has_option("whale"));
    }

    #[test]
    fn puzzle_deserializes_from_dataset_fields() {
        let json = r#"{"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"}"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.solution(), "fish");
    }

    #[test]
    fn puzzle_deserialize_runs_validation() {
        let json = r#"{"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "whale"}"#;
        let err = serde_json::from_str::<Puzzle>(json).unwrap_err();
        assert!(err.to_string().contains("whale"));
    }

    #[test]
    fn puzzle_serializes_with_dataset_field_names() {
        let puzzle = Puzzle::new("><>", ["fish", "bird"], "fish").unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert!(json.contains("\"ascii_art_string\""));
    }
}
