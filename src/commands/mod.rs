//! Command implementations

pub mod simple;
pub mod simulate;
pub mod validate;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
pub use validate::{DatasetSummary, summarize, validate_dataset};
