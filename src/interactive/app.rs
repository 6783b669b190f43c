//! TUI application state and logic

use crate::core::Outcome;
use crate::game::{GamePhase, GameSession, PuzzleSource, RandomSource};
use crate::puzzles::PuzzleSet;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: PuzzleSource = RandomSource> {
    pub puzzles: &'a PuzzleSet,
    pub session: GameSession,
    pub source: S,
    /// Highlighted option on the play screen
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Tallies for the current run of the program
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub perfect_games: usize,
    pub best_ratio: Option<(usize, usize)>,
}

impl Statistics {
    fn record(&mut self, score: usize, rounds: usize) {
        self.games_played += 1;
        if score == rounds {
            self.perfect_games += 1;
        }

        let better = self
            .best_ratio
            .is_none_or(|(best, of)| score * of > best * rounds);
        if better {
            self.best_ratio = Some((score, rounds));
        }
    }
}

impl<'a> App<'a> {
    /// App with a thread-local random source
    #[must_use]
    pub fn new(puzzles: &'a PuzzleSet, session: GameSession) -> Self {
        Self::with_source(puzzles, session, RandomSource::thread())
    }
}

impl<'a, S: PuzzleSource> App<'a, S> {
    #[must_use]
    pub fn with_source(puzzles: &'a PuzzleSet, session: GameSession, source: S) -> Self {
        Self {
            puzzles,
            session,
            source,
            cursor: 0,
            messages: vec![Message {
                text: "Welcome! Pick how many rounds to play.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Apply one session transition in place
    fn transition(&mut self, f: impl FnOnce(GameSession, &PuzzleSet, &mut S) -> GameSession) {
        let placeholder = GameSession::new(self.puzzles);
        let session = std::mem::replace(&mut self.session, placeholder);
        self.session = f(session, self.puzzles, &mut self.source);
    }

    pub fn adjust_rounds(&mut self, delta: isize) {
        let requested = self.session.round_count().saturating_add_signed(delta);
        self.transition(|s, p, _| s.configure(requested, p));
    }

    pub fn start_game(&mut self) {
        self.transition(|s, p, src| s.start(p, src));
        if self.session.phase() == GamePhase::Playing {
            self.cursor = 0;
            self.add_message(
                &format!("Game on! {} rounds.", self.session.round_count()),
                MessageStyle::Info,
            );
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let Some(puzzle) = self.session.current_puzzle(self.puzzles) else {
            return;
        };
        if self.session.selected_option().is_some() {
            return;
        }

        let last = puzzle.options().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Answer with the option at `index`
    pub fn choose(&mut self, index: usize) {
        let Some(option) = self
            .session
            .current_puzzle(self.puzzles)
            .and_then(|p| p.options().get(index))
            .cloned()
        else {
            return;
        };

        let before = self.session.selected_option().is_some();
        self.transition(|s, p, _| s.select_answer(&option, p));
        if before {
            return;
        }

        self.cursor = index;
        match self.session.is_correct(self.puzzles) {
            Some(true) => self.add_message("✅ Correct!", MessageStyle::Success),
            Some(false) => {
                let solution = self
                    .session
                    .current_puzzle(self.puzzles)
                    .map(|p| p.solution().to_string())
                    .unwrap_or_default();
                self.add_message(
                    &format!("❌ Wrong! Answer: {solution}"),
                    MessageStyle::Error,
                );
            }
            None => {}
        }
    }

    pub fn next_turn(&mut self) {
        if self.session.phase() != GamePhase::Playing {
            return;
        }
        self.transition(|s, p, src| s.advance(p, src));
        self.cursor = 0;

        if self.session.phase() == GamePhase::Finished {
            let (score, rounds) = (self.session.score(), self.session.round_count());
            self.stats.record(score, rounds);
            let outcome = Outcome::from_score(score, rounds);
            let style = match outcome {
                Outcome::NeedsPractice => MessageStyle::Info,
                Outcome::Perfect | Outcome::Good => MessageStyle::Success,
            };
            self.add_message(
                &format!("Final score {score}/{rounds}. {}", outcome.message()),
                style,
            );
        }
    }

    pub fn restart(&mut self) {
        self.transition(|s, _, _| s.restart());
        self.cursor = 0;
        self.add_message("New game! Pick how many rounds to play.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Map one key press onto the current screen's controls
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.session.phase() {
            GamePhase::Setup => match key.code {
                KeyCode::Left | KeyCode::Down | KeyCode::Char('-' | 'h') => self.adjust_rounds(-1),
                KeyCode::Right | KeyCode::Up | KeyCode::Char('+' | '=' | 'l') => {
                    self.adjust_rounds(1);
                }
                KeyCode::Enter | KeyCode::Char('s' | ' ') => self.start_game(),
                _ => {}
            },
            GamePhase::Playing if self.session.selected_option().is_none() => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.cursor),
                KeyCode::Char(c @ '1'..='9') => {
                    if let Some(digit) = c.to_digit(10) {
                        self.choose(digit as usize - 1);
                    }
                }
                _ => {}
            },
            GamePhase::Playing => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Right | KeyCode::Char('n' | ' ')
                ) {
                    self.next_turn();
                }
            }
            GamePhase::Finished => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r' | 'n')) {
                    self.restart();
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: PuzzleSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: PuzzleSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::game::ScriptedSource;

    fn five_puzzles() -> PuzzleSet {
        PuzzleSet::new(vec![
            Puzzle::new("><>", ["fish", "bird", "worm"], "fish").unwrap(),
            Puzzle::new("=^.^=", ["cat", "dog", "fox"], "cat").unwrap(),
            Puzzle::new("(oo)", ["pig", "cow", "owl"], "pig").unwrap(),
            Puzzle::new("(\\_/)", ["rabbit", "bear", "mouse"], "rabbit").unwrap(),
            Puzzle::new("{o,o}", ["owl", "bat", "hen"], "owl").unwrap(),
        ])
        .unwrap()
    }

    fn app<'a>(puzzles: &'a PuzzleSet, script: &[usize]) -> App<'a, ScriptedSource> {
        App::with_source(
            puzzles,
            GameSession::with_rounds(3, puzzles),
            ScriptedSource::new(script.iter().copied()),
        )
    }

    fn press(app: &mut App<'_, ScriptedSource>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_adjust_rounds_within_bounds() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[]);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.round_count(), 3);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.session.round_count(), 5);
    }

    #[test]
    fn enter_starts_game() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[2]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.phase(), GamePhase::Playing);
        assert_eq!(app.session.current_index(), Some(2));
    }

    #[test]
    fn digit_answers_and_second_answer_ignored() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[1]);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.selected_option(), Some("dog"));
        assert_eq!(app.session.score(), 0);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.selected_option(), Some("dog"));
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn cursor_selects_with_enter() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[0]);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.score(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn next_requires_answer() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[0, 1]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.current_round(), 0);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.current_round(), 1);
        assert_eq!(app.session.current_index(), Some(1));
    }

    #[test]
    fn full_game_records_stats_and_restarts() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[0, 1, 2]);
        press(&mut app, KeyCode::Enter);

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('1'));
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.session.phase(), GamePhase::Finished);
        assert_eq!(app.session.score(), 3);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.perfect_games, 1);
        assert_eq!(app.stats.best_ratio, Some((3, 3)));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.phase(), GamePhase::Setup);
        assert_eq!(app.session.score(), 0);
        assert!(app.session.used_indices().is_empty());
    }

    #[test]
    fn quit_keys() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app2 = self::app(&puzzles, &[]);
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let puzzles = five_puzzles();
        let mut app = app(&puzzles, &[]);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "m9");
    }

    #[test]
    fn best_ratio_prefers_higher_fraction() {
        let mut stats = Statistics::default();
        stats.record(2, 3);
        stats.record(3, 5);
        assert_eq!(stats.best_ratio, Some((2, 3)));
        stats.record(4, 5);
        assert_eq!(stats.best_ratio, Some((4, 5)));
    }
}
