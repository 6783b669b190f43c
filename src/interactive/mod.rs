//! Interactive TUI interface
//!
//! Three screens (setup, play, results) over a `GameSession`.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
