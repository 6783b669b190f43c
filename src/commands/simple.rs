//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. Drives the same `GameSession`
//! transitions as the TUI, reading answers line by line.

use crate::core::Puzzle;
use crate::game::{GamePhase, GameSession, PuzzleSource};
use crate::output::formatters::{indent_art, score_bar};
use crate::puzzles::PuzzleSet;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<S: PuzzleSource>(
    puzzles: &PuzzleSet,
    session: GameSession,
    source: &mut S,
) -> io::Result<GameSession> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(puzzles, session, source, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode over any reader/writer pair
///
/// Returns the session as it was when the player quit (or input ended).
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<S, R, W>(
    puzzles: &PuzzleSet,
    mut session: GameSession,
    source: &mut S,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameSession>
where
    S: PuzzleSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  🎨 ASCII Art Guesser                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess what each ASCII art represents!")?;
    writeln!(out, "Commands: 'quit' to exit at any prompt\n")?;

    loop {
        session = match session.phase() {
            GamePhase::Setup => {
                let max = GameSession::max_rounds_for(puzzles);
                let prompt = format!(
                    "Number of rounds [3-{max}] (Enter for {})",
                    session.round_count()
                );
                let Some(line) = prompt_line(input, out, &prompt)? else {
                    return Ok(session);
                };

                let session = match line.parse::<usize>() {
                    Ok(rounds) => session.configure(rounds, puzzles),
                    Err(_) if line.is_empty() => session,
                    Err(_) => {
                        writeln!(out, "❌ Not a number, keeping {}\n", session.round_count())?;
                        session
                    }
                };

                writeln!(out, "\n🚀 Starting a {}-round game!\n", session.round_count())?;
                session.start(puzzles, source)
            }

            GamePhase::Playing => {
                let Some(puzzle) = session.current_puzzle(puzzles) else {
                    return Ok(session);
                };

                print_round(out, &session, puzzle)?;

                let answer = loop {
                    let prompt = format!("Your answer (1-{})", puzzle.options().len());
                    let Some(line) = prompt_line(input, out, &prompt)? else {
                        return Ok(session);
                    };
                    if let Some(option) = parse_answer(puzzle, &line) {
                        break option;
                    }
                    writeln!(out, "❌ Pick a number from the list or type an option\n")?;
                };

                let session = session.select_answer(answer, puzzles);
                if session.is_correct(puzzles) == Some(true) {
                    writeln!(out, "\n{}", "✅ Correct!".green().bold())?;
                } else {
                    writeln!(out, "\n{}", "❌ Wrong!".red().bold())?;
                    writeln!(out, "Answer: {}", puzzle.solution().green().bold())?;
                }

                let prompt = format!("Press Enter for {}", session.next_label());
                if prompt_line(input, out, &prompt)?.is_none() {
                    return Ok(session);
                }
                writeln!(out)?;
                session.advance(puzzles, source)
            }

            GamePhase::Finished => {
                print_results(out, &session, puzzles)?;

                let Some(line) = prompt_line(input, out, "Play again? (yes/no)")? else {
                    return Ok(session);
                };
                match line.to_lowercase().as_str() {
                    "yes" | "y" => {
                        writeln!(out, "\n🔄 New game!\n")?;
                        session.restart()
                    }
                    _ => {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(session);
                    }
                }
            }
        };
    }
}

/// Match a typed answer to one of the puzzle's options
///
/// Accepts a 1-based option number or the option text (case-insensitive).
#[must_use]
pub fn parse_answer<'a>(puzzle: &'a Puzzle, line: &str) -> Option<&'a str> {
    let line = line.trim();

    if let Ok(n) = line.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| puzzle.options().get(i))
            .map(String::as_str);
    }

    puzzle
        .options()
        .iter()
        .find(|o| o.eq_ignore_ascii_case(line))
        .map(String::as_str)
}

fn print_round<W: Write>(out: &mut W, session: &GameSession, puzzle: &Puzzle) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "{} | Score: {}", session.turn_label(), session.score())?;
    writeln!(out, "────────────────────────────────────────────────────────────\n")?;
    writeln!(out, "{}\n", indent_art(puzzle.art(), 4).bright_green())?;
    writeln!(out, "What does this ASCII art represent?")?;
    for (i, option) in puzzle.options().iter().enumerate() {
        writeln!(out, "  {}. {option}", i + 1)?;
    }
    writeln!(out)
}

fn print_results<W: Write>(
    out: &mut W,
    session: &GameSession,
    puzzles: &PuzzleSet,
) -> io::Result<()> {
    let rounds = session.round_count();
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "    🎮 Game Over!".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Final Score: {}  [{}]",
        format!("{}/{rounds}", session.score()).bright_yellow().bold(),
        score_bar(session.score(), rounds, 20)
    )?;

    if let Some(outcome) = session.outcome() {
        writeln!(out, "  {}\n", outcome.message().bright_white().bold())?;
    }

    writeln!(out, "  Review:")?;
    for (i, round) in session.history().iter().enumerate() {
        let mark = if round.correct { "✅" } else { "❌" };
        let solution = puzzles
            .get(round.puzzle_index)
            .map_or("?", Puzzle::solution);
        if round.correct {
            writeln!(out, "    {}. {mark} {}", i + 1, round.chosen)?;
        } else {
            writeln!(
                out,
                "    {}. {mark} {} (was {solution})",
                i + 1,
                round.chosen
            )?;
        }
    }
    writeln!(out)
}

/// Prompt and read one trimmed line; `None` on EOF or a quit command
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim().to_string();
    if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }

    Ok(Some(line))
}
