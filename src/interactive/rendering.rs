//! TUI rendering with ratatui
//!
//! One layout per game phase. Rendering reads state only.

use super::app::{App, MessageStyle};
use crate::core::{Outcome, Puzzle};
use crate::game::{GamePhase, GameSession, MIN_ROUNDS, PuzzleSource};
use crate::output::formatters::art_dimensions;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.session.phase() {
        GamePhase::Setup => render_setup(f, app, chunks[1]),
        GamePhase::Playing => render_playing(f, app, chunks[1]),
        GamePhase::Finished => render_finished(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = &app.session;
    let title = match session.phase() {
        GamePhase::Playing => format!(
            "🎨 ASCII ART GUESSER  |  {}  |  Score: {}",
            session.turn_label(),
            session.score()
        ),
        GamePhase::Setup | GamePhase::Finished => "🎨 ASCII ART GUESSER".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_setup<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intro
            Constraint::Length(3), // Round slider
            Constraint::Min(0),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from("Guess what each ASCII art represents!"),
        Line::from(Span::styled(
            format!("{} puzzles available", app.puzzles.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Welcome "));
    f.render_widget(intro, chunks[0]);

    let rounds = app.session.round_count();
    let max = GameSession::max_rounds_for(app.puzzles);
    let span = max.saturating_sub(MIN_ROUNDS);
    let ratio = if span == 0 {
        1.0
    } else {
        rounds.saturating_sub(MIN_ROUNDS) as f64 / span as f64
    };

    let slider = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Number of Rounds ({MIN_ROUNDS}-{max}) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{rounds} rounds"));
    f.render_widget(slider, chunks[1]);
}

fn render_playing<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let Some(puzzle) = app.session.current_puzzle(app.puzzles) else {
        return;
    };

    let (art_width, art_lines) = art_dimensions(puzzle.art());
    let art_height = art_lines as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(art_height),                          // Art
            Constraint::Length(puzzle.options().len() as u16 + 3), // Options
            Constraint::Min(3),                                      // Feedback
        ])
        .split(area);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = frame.inner(chunks[0]);
    f.render_widget(frame, chunks[0]);

    // Center the art as one block; lines keep their relative columns
    let [art_area] = Layout::horizontal([Constraint::Length(art_width as u16)])
        .flex(Flex::Center)
        .areas(inner);
    let art = Paragraph::new(puzzle.art())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Left);
    f.render_widget(art, art_area);

    let selected = app.session.selected_option();
    let items: Vec<ListItem> = puzzle
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match selected {
                Some(_) if puzzle.is_solution(option) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(chosen) if chosen == option.as_str() => Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if i == app.cursor => Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::White),
            };
            ListItem::new(format!(" {}. {option}", i + 1)).style(style)
        })
        .collect();

    let options = List::new(items).block(
        Block::default()
            .title(" What does this ASCII art represent? ")
            .borders(Borders::ALL),
    );
    f.render_widget(options, chunks[1]);

    let feedback = match app.session.is_correct(app.puzzles) {
        None => vec![Line::from(Span::styled(
            "Choose an answer",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(true) => vec![
            Line::from(Span::styled(
                "✅ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            next_hint(&app.session),
        ],
        Some(false) => vec![
            Line::from(Span::styled(
                "❌ Wrong!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("Answer: "),
                Span::styled(
                    puzzle.solution(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            next_hint(&app.session),
        ],
    };

    let paragraph = Paragraph::new(feedback)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[2]);
}

fn next_hint(session: &GameSession) -> Line<'static> {
    let icon = if session.is_last_round() { "🏁" } else { "➡️" };
    Line::from(Span::styled(
        format!("[Enter] {icon} {}", session.next_label()),
        Style::default().fg(Color::Magenta),
    ))
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Perfect => Color::Yellow,
        Outcome::Good => Color::Blue,
        Outcome::NeedsPractice => Color::LightRed,
    }
}

fn render_finished<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = &app.session;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score
            Constraint::Length(3), // Score gauge
            Constraint::Min(3),    // Review
        ])
        .split(area);

    let mut lines = vec![
        Line::from("🎮 Game Over!"),
        Line::from(Span::styled(
            format!("{}/{}", session.score(), session.round_count()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(outcome) = session.outcome() {
        lines.push(Line::from(Span::styled(
            outcome.message(),
            Style::default().fg(outcome_color(outcome)),
        )));
    }

    let summary = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Final Score ").borders(Borders::ALL));
    f.render_widget(summary, chunks[0]);

    let percent = if session.round_count() == 0 {
        0
    } else {
        (session.score() * 100 / session.round_count()).min(100) as u16
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent);
    f.render_widget(gauge, chunks[1]);

    let review: Vec<ListItem> = session
        .history()
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let solution = app
                .puzzles
                .get(round.puzzle_index)
                .map_or("?", Puzzle::solution);
            if round.correct {
                ListItem::new(format!("{}: ✅ {}", i + 1, round.chosen))
                    .style(Style::default().fg(Color::Green))
            } else {
                ListItem::new(format!("{}: ❌ {} (was {solution})", i + 1, round.chosen))
                    .style(Style::default().fg(Color::Red))
            }
        })
        .collect();

    let review = List::new(review).block(Block::default().title(" Review ").borders(Borders::ALL));
    f.render_widget(review, chunks[2]);
}

fn render_messages<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: PuzzleSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = match app.stats.best_ratio {
        Some((score, rounds)) => format!(
            "Games: {} | Perfect: {} | Best: {score}/{rounds}",
            app.stats.games_played, app.stats.perfect_games
        ),
        None => format!("Games: {}", app.stats.games_played),
    };
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.session.phase() {
        GamePhase::Setup => "←/→: Rounds | Enter: Start | q: Quit",
        GamePhase::Playing if app.session.selected_option().is_none() => {
            "1-9 or ↑/↓+Enter: Answer | q: Quit"
        }
        GamePhase::Playing => "Enter: Next | q: Quit",
        GamePhase::Finished => "r: Play Again | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
