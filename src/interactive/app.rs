//! TUI application state and logic

use crate::core::{Game, GameStatus, GuessOutcome};
use crate::drawings::DrawingSet;
use crate::output::formatters::outcome_message;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest line the input box accepts
const MAX_INPUT_LEN: usize = 64;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub drawings: &'a DrawingSet,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, drawings: &'a DrawingSet, mut rng: StdRng) -> Self {
        let game = Game::new(words.choose(&mut rng).clone(), &mut rng);

        let mut app = Self {
            words,
            drawings,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! Type a letter or the whole word, then press Enter.",
            MessageStyle::Info,
        );
        // A one-letter word is fully revealed from the start
        if app.game.is_over() {
            app.finish_game();
        }
        app
    }

    /// Submit the input buffer to the game
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = self.game.guess(&input);

        let style = match outcome {
            GuessOutcome::CorrectLetter | GuessOutcome::CorrectWord => MessageStyle::Success,
            GuessOutcome::WrongLetter | GuessOutcome::WrongWord => MessageStyle::Error,
            GuessOutcome::InvalidInput | GuessOutcome::Repeated | GuessOutcome::Finished => {
                MessageStyle::Info
            }
        };
        let message = outcome_message(outcome);
        if !message.is_empty() {
            self.add_message(message, style);
        }

        if outcome.consumes_turn() && self.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;

        match self.game.status() {
            GameStatus::Won => {
                self.stats.games_won += 1;
                let text = format!("Congratulations! You found the word: {}", self.game.secret());
                self.add_message(&text, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let text = format!("You lost! The word was: {}", self.game.secret());
                self.add_message(&text, MessageStyle::Error);
            }
            GameStatus::Playing => return,
        }

        tracing::info!(status = ?self.game.status(), errors = self.game.errors(), "game over");
        self.add_message("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.words.choose(&mut self.rng).clone(), &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        if self.game.is_over() {
            self.finish_game();
        }
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

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                if self.game.is_over() {
                    self.new_game();
                } else {
                    self.add_message("Finish this word first!", MessageStyle::Error);
                }
            }
            _ if self.game.is_over() => {
                // Only new game / quit once the word is settled
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn words() -> WordList {
        WordList::new(words_from_slice(&["chat"]), "test").unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting_a_word_wins() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        type_line(&mut app, "chat");
        assert_eq!(app.game.status(), GameStatus::Won);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "x");
    }

    #[test]
    fn losing_records_the_game() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        for letter in ["b", "d", "e", "f", "g", "i"] {
            type_line(&mut app, letter);
        }
        assert_eq!(app.game.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lost! The word was: chat")
        );
    }

    #[test]
    fn new_game_only_after_the_end() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        type_line(&mut app, "z");
        ctrl(&mut app, 'n');
        assert_eq!(app.game.errors(), 1);

        type_line(&mut app, "chat");
        ctrl(&mut app, 'n');
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert_eq!(app.game.errors(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn typing_is_ignored_after_the_end() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        type_line(&mut app, "chat");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let words = words();
        let drawings = DrawingSet::builtin();

        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn one_letter_word_counts_as_won_at_once() {
        let words = WordList::new(words_from_slice(&["a"]), "test").unwrap();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("Ctrl-N")));

        ctrl(&mut app, 'n');
        assert_eq!(app.stats.total_games, 2);
        assert_eq!(app.stats.games_won, 2);
    }

    #[test]
    fn message_log_is_bounded() {
        let words = words();
        let drawings = DrawingSet::builtin();
        let mut app = App::new(&words, &drawings, StdRng::seed_from_u64(1));

        for _ in 0..10 {
            type_line(&mut app, "zz");
        }
        assert_eq!(app.messages.len(), 5);
    }
}
