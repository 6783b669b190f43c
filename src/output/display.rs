//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{DatasetSummary, SimulationResult};
use crate::core::Outcome;
use colored::Colorize;

/// Print the summary of a validated dataset
pub fn print_dataset_summary(summary: &DatasetSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DATASET:".bright_cyan().bold(),
        summary.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n✅ {}", "Valid".green().bold());
    println!("   Puzzles:       {}", summary.puzzles);
    println!("   Round range:   3-{}", summary.max_rounds);
    println!(
        "   Options:       {}-{} per puzzle",
        summary.min_options, summary.max_options
    );
    println!(
        "   Largest art:   {} cols × {} lines",
        summary.widest_art, summary.tallest_art
    );
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Sessions:         {}", result.sessions);
    println!("   Rounds each:      {}", result.rounds);
    println!("   Player accuracy:  {:.0}%", result.accuracy * 100.0);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Best session:     {}",
        format!("{}", result.max_score).green()
    );
    println!(
        "   Worst session:    {}",
        format!("{}", result.min_score).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.sessions == 0 {
        return;
    }

    println!("\n🏁 {}", "Outcomes:".bright_cyan().bold());
    for outcome in Outcome::ALL {
        let count = result.outcome_count(outcome);
        let pct = count as f64 / result.sessions as f64 * 100.0;
        println!("   {:<16} {count:5} ({pct:5.1}%)", outcome.message());
    }

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    for score in 0..=result.rounds {
        let count = result.score_distribution.get(&score).copied().unwrap_or(0);
        let pct = count as f64 / result.sessions as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {score:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
