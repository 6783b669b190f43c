//! Puzzle dataset loading utilities
//!
//! Parses the JSON dataset, validates every record, and wraps the result in a
//! `PuzzleSet`.

use super::PuzzleSet;
use crate::core::{PuzzleError, RawPuzzle};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for datasets that cannot be loaded
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("puzzle #{index} has the wrong shape: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("puzzle #{index} is malformed: {source}")]
    InvalidPuzzle {
        index: usize,
        #[source]
        source: PuzzleError,
    },
    #[error("dataset needs at least {min} puzzles, got {count}")]
    TooFewPuzzles { count: usize, min: usize },
}

/// Object layout of the bundled dataset
#[derive(Deserialize)]
struct WrappedDataset {
    puzzles: Vec<Value>,
}

/// Split a dataset into its records; accepts a bare array or `{"puzzles": [...]}`
fn dataset_records(text: &str) -> Result<Vec<Value>, DatasetError> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(serde_json::from_value::<WrappedDataset>(value)?.puzzles)
    }
}

/// Parse and validate a JSON dataset
///
/// # Errors
///
/// Returns `DatasetError` if the text is not valid JSON, any record fails
/// validation, or fewer than three puzzles remain.
///
/// # Examples
/// ```
/// use ascii_guesser::puzzles::loader::parse_json;
///
/// let json = r#"{"puzzles": [
///     {"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"},
///     {"ascii_art_string": "=^.^=", "options": ["cat", "dog"], "solution": "cat"},
///     {"ascii_art_string": "(oo)", "options": ["pig", "cow"], "solution": "pig"}
/// ]}"#;
/// let set = parse_json(json).unwrap();
/// assert_eq!(set.len(), 3);
/// ```
pub fn parse_json(text: &str) -> Result<PuzzleSet, DatasetError> {
    let puzzles = dataset_records(text)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw: RawPuzzle = serde_json::from_value(record)
                .map_err(|source| DatasetError::MalformedRecord { index, source })?;
            raw.validate()
                .map_err(|source| DatasetError::InvalidPuzzle { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    PuzzleSet::new(puzzles)
}

/// Load a dataset from a JSON file
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read, or any error from
/// [`parse_json`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleSet, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_json(&text)?;
    tracing::info!(path = %path.display(), puzzles = set.len(), "loaded puzzle dataset");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_BARE: &str = r#"[
        {"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"},
        {"ascii_art_string": "=^.^=", "options": ["cat", "dog"], "solution": "cat"},
        {"ascii_art_string": "(oo)", "options": ["pig", "cow"], "solution": "pig"}
    ]"#;

    #[test]
    fn parses_bare_array() {
        let set = parse_json(THREE_BARE).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(1).unwrap().solution(), "cat");
    }

    #[test]
    fn parses_wrapped_object() {
        let wrapped = format!(r#"{{"puzzles": {THREE_BARE}}}"#);
        let set = parse_json(&wrapped).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn preserves_dataset_order() {
        let set = parse_json(THREE_BARE).unwrap();
        let solutions: Vec<&str> = set.iter().map(|p| p.solution()).collect();
        assert_eq!(solutions, ["fish", "cat", "pig"]);
    }

    #[test]
    fn reports_index_of_bad_record() {
        let json = r#"[
            {"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"},
            {"ascii_art_string": "=^.^=", "options": ["cat", "cat"], "solution": "cat"},
            {"ascii_art_string": "(oo)", "options": ["pig", "cow"], "solution": "pig"}
        ]"#;

        match parse_json(json) {
            Err(DatasetError::InvalidPuzzle { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, PuzzleError::DuplicateOption("cat".to_string()));
            }
            other => panic!("expected InvalidPuzzle, got {other:?}"),
        }
    }

    #[test]
    fn rejects_too_few_puzzles() {
        let json = r#"[
            {"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"}
        ]"#;

        assert!(matches!(
            parse_json(json),
            Err(DatasetError::TooFewPuzzles { count: 1, min: 3 })
        ));
    }

    #[test]
    fn missing_field_names_record_and_field() {
        let json = r#"{"puzzles": [
            {"ascii_art_string": "><>", "options": ["fish", "bird"], "solution": "fish"},
            {"ascii_art_string": "=^.^=", "options": ["cat", "dog"]}
        ]}"#;

        let err = parse_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRecord { index: 1, .. }));
        let message = err.to_string();
        assert!(message.contains("#1"), "{message}");
        assert!(message.contains("solution"), "{message}");
    }

    #[test]
    fn wrapped_object_without_puzzles_key() {
        let err = parse_json(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
        assert!(err.to_string().contains("puzzles"));
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            parse_json("not json at all"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
