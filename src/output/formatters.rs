//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing `score` out of `rounds`
#[must_use]
pub fn score_bar(score: usize, rounds: usize, width: usize) -> String {
    create_progress_bar(score as f64, rounds as f64, width)
}

/// Width (in chars) and height (in lines) of a piece of art
#[must_use]
pub fn art_dimensions(art: &str) -> (usize, usize) {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (width, art.lines().count())
}

/// Indent every line of `art` by `indent` spaces
#[must_use]
pub fn indent_art(art: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    art.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
