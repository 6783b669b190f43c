//! Embedded puzzle dataset
//!
//! The bundled JSON dataset, compiled into the binary.

/// Bundled puzzle dataset in the `{"puzzles": [...]}` layout
pub const PUZZLES_JSON: &str = include_str!("../../data/puzzles.json");
