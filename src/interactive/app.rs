//! TUI application state and logic

use crate::core::{GameRules, GameState, LetterType};
use crate::engine::{GuessOutcome, LetterSourceType, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub session: Session<LetterSourceType>,
    pub rules: GameRules,
    pub state: GameState,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub history: Vec<RoundEntry>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Drawing,
    Guessing,
    GameOver,
}

/// One finished round
#[derive(Debug, Clone)]
pub struct RoundEntry {
    pub round: u8,
    pub letters: String,
    pub guess: String,
    pub valid: bool,
    pub longest_word: Option<String>,
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

impl App {
    #[must_use]
    pub fn new(session: Session<LetterSourceType>) -> Self {
        let rules = session.rules();
        let state = session.state();

        let mut app = Self {
            session,
            rules,
            state,
            input_mode: InputMode::Drawing,
            input_buffer: String::new(),
            messages: Vec::new(),
            history: Vec::new(),
            should_quit: false,
        };
        app.add_message("Welcome to the letters round!", MessageStyle::Info);
        app.add_message(
            &format!(
                "Draw up to {} letters with 'v' (vowel) and 'c' (consonant).",
                rules.max_letters_total
            ),
            MessageStyle::Info,
        );
        app
    }

    pub fn draw(&mut self, letter_type: LetterType) {
        if self.input_mode != InputMode::Drawing {
            return;
        }

        match self.session.draw_letter(letter_type) {
            Ok(letter) => {
                self.refresh();
                self.add_message(&format!("Drew {letter}"), MessageStyle::Info);
                if self.board_full() {
                    self.start_guess();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    #[must_use]
    pub fn board_full(&self) -> bool {
        self.state.used_total() >= self.rules.max_letters_total
    }

    pub fn start_guess(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }
        self.input_mode = InputMode::Guessing;
        self.input_buffer.clear();
        self.add_message("Enter your word and press Enter", MessageStyle::Info);
    }

    pub fn cancel_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.board_full() {
            self.add_message("The board is full - enter a word", MessageStyle::Info);
            return;
        }
        self.input_mode = InputMode::Drawing;
        self.input_buffer.clear();
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_alphabetic()
            && self.input_buffer.chars().count() < self.rules.max_letters_total
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let len = self.input_buffer.chars().count();
        if len < self.rules.min_word_length {
            self.add_message(
                &format!(
                    "Words must be at least {} letters long",
                    self.rules.min_word_length
                ),
                MessageStyle::Error,
            );
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        let letters = self.state.current_letters.clone();
        let round = self.state.round;
        let outcome = self.session.submit_guess(&guess);
        self.apply_outcome(round, letters, guess, &outcome);
    }

    fn apply_outcome(&mut self, round: u8, letters: String, guess: String, outcome: &GuessOutcome) {
        if outcome.valid {
            self.add_message(
                &format!(
                    "Correct! Points have been awarded: +{}",
                    guess.chars().count()
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Sorry, '{}' is not a valid word", guess.to_uppercase()),
                MessageStyle::Error,
            );
        }
        match &outcome.longest_word {
            Some(word) => self.add_message(
                &format!("FYI, the longest possible word was {}", word.to_uppercase()),
                MessageStyle::Info,
            ),
            None => self.add_message("FYI, no word could be made from these letters", MessageStyle::Info),
        }

        self.history.push(RoundEntry {
            round,
            letters,
            guess,
            valid: outcome.valid,
            longest_word: outcome.longest_word.clone(),
        });
        self.state = outcome.state.clone();

        if let Some(rejection) = &outcome.round_rejection {
            self.input_mode = InputMode::GameOver;
            self.add_message(&rejection.to_string(), MessageStyle::Info);
            self.add_message(
                &format!("Game over! Final score {}. Press 'r' to play again.", self.state.score),
                MessageStyle::Success,
            );
        } else {
            self.input_mode = InputMode::Drawing;
        }
    }

    pub fn reset(&mut self) {
        self.state = self.session.reset_game();
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Drawing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn refresh(&mut self) {
        self.state = self.session.state();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(),
                _ => {}
            },
            InputMode::Drawing => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('v') => self.draw(LetterType::Vowel),
                KeyCode::Char('c') => self.draw(LetterType::Consonant),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Tab | KeyCode::Enter => self.start_guess(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc | KeyCode::Tab => self.cancel_guess(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.type_char(c),
                _ => {}
            },
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
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
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
    use crate::dictionary::WordIndex;
    use crate::engine::{GameEngine, ScriptedLetters};
    use std::sync::Arc;

    fn new_app(words: &[&str], script: &str) -> App {
        let index = Arc::new(WordIndex::new(words.iter().copied()).unwrap());
        let source = LetterSourceType::Scripted(ScriptedLetters::new(script));
        App::new(Session::new(GameEngine::new(index, source)))
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn enter(app: &mut App) {
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn draw_keys_add_letters() {
        let mut app = new_app(&["cat"], "CAT");
        press(&mut app, "cvc");
        assert_eq!(app.state.current_letters, "CAT");
        assert_eq!(app.input_mode, InputMode::Drawing);
    }

    #[test]
    fn rejected_draw_shows_error() {
        let mut app = new_app(&["cat"], "");
        press(&mut app, "vvvvvv");
        assert_eq!(app.state.used_vowels.len(), 5);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "All vowels used");
    }

    #[test]
    fn full_board_switches_to_guessing() {
        let mut app = new_app(&["entrails"], "AEIOTSRNL");
        press(&mut app, "vvvvccccc");
        assert!(app.board_full());
        assert_eq!(app.input_mode, InputMode::Guessing);

        // escape cannot leave a full board
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn tab_enters_and_esc_cancels_guess() {
        let mut app = new_app(&["cat"], "CAT");
        press(&mut app, "c");
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);

        press(&mut app, "ca");
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Drawing);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.state.current_letters, "C");
    }

    #[test]
    fn guess_input_is_bounded_and_lowercased() {
        let mut app = new_app(&["cat"], "");
        app.start_guess();
        press(&mut app, "AB1cdefghijk");
        assert_eq!(app.input_buffer, "abcdefghi");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "abcdefgh");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let mut app = new_app(&["cat"], "CAT");
        press(&mut app, "cvc");
        app.start_guess();
        press(&mut app, "c");
        enter(&mut app);
        assert_eq!(app.state.round, 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn valid_guess_scores_and_reports_longest() {
        let mut app = new_app(&["cat", "tact"], "CAT");
        press(&mut app, "cvc");
        app.start_guess();
        press(&mut app, "cat");
        enter(&mut app);

        assert_eq!(app.state.score, 3);
        assert_eq!(app.state.round, 2);
        assert!(app.state.current_letters.is_empty());
        assert_eq!(app.input_mode, InputMode::Drawing);

        let entry = &app.history[0];
        assert_eq!(entry.letters, "CAT");
        assert!(entry.valid);
        assert_eq!(entry.longest_word.as_deref(), Some("tact"));
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "FYI, the longest possible word was TACT")
        );
    }

    #[test]
    fn last_round_locks_the_board() {
        let mut app = new_app(&["at"], "");
        for _ in 0..4 {
            press(&mut app, "v");
            app.start_guess();
            press(&mut app, "at");
            enter(&mut app);
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.state.round_limit_reached);

        // letters from the unfinished round stay on the board
        press(&mut app, "vc");
        assert_eq!(app.state.current_letters, "A");

        press(&mut app, "r");
        assert_eq!(app.input_mode, InputMode::Drawing);
        assert_eq!(app.state.round, 1);
        assert_eq!(app.state.score, 0);
        assert!(app.history.is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app(&["cat"], "");
        press(&mut app, "q");
        assert!(app.should_quit);

        let mut app = new_app(&["cat"], "");
        app.start_guess();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app(&["cat"], "");
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }
}
