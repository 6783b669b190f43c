//! Dataset validation command
//!
//! Loads a puzzle dataset and summarizes what a game built on it looks like.

use crate::game::max_rounds;
use crate::output::formatters::art_dimensions;
use crate::puzzles::{DatasetError, PuzzleSet, loader};
use std::path::Path;

/// Summary of a valid dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub source: String,
    pub puzzles: usize,
    pub max_rounds: usize,
    pub min_options: usize,
    pub max_options: usize,
    pub widest_art: usize,
    pub tallest_art: usize,
}

/// Summarize an already-loaded set
#[must_use]
pub fn summarize(puzzles: &PuzzleSet, source: impl Into<String>) -> DatasetSummary {
    let option_counts = puzzles.iter().map(|p| p.options().len());
    let dims: Vec<(usize, usize)> = puzzles.iter().map(|p| art_dimensions(p.art())).collect();

    DatasetSummary {
        source: source.into(),
        puzzles: puzzles.len(),
        max_rounds: max_rounds(puzzles.len()),
        min_options: option_counts.clone().min().unwrap_or(0),
        max_options: option_counts.max().unwrap_or(0),
        widest_art: dims.iter().map(|&(w, _)| w).max().unwrap_or(0),
        tallest_art: dims.iter().map(|&(_, h)| h).max().unwrap_or(0),
    }
}

/// Load and summarize a dataset; `None` checks the embedded one
///
/// # Errors
///
/// Returns `DatasetError` if the dataset cannot be read or is malformed.
pub fn validate_dataset(path: Option<&Path>) -> Result<DatasetSummary, DatasetError> {
    match path {
        Some(path) => {
            let puzzles = loader::load_from_file(path)?;
            Ok(summarize(&puzzles, path.display().to_string()))
        }
        None => {
            let puzzles = PuzzleSet::embedded()?;
            Ok(summarize(&puzzles, "embedded"))
        }
    }
}
