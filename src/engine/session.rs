//! Client-facing game session
//!
//! Wraps one `GameEngine` behind a mutex so a front-end (or a transport
//! shared between threads) sees every operation as a single atomic step.

use super::error::GameError;
use super::game::GameEngine;
use super::source::{LetterSource, LetterSourceType};
use crate::core::{GameRules, GameState, LetterType};
use crate::dictionary::{DictionaryError, WordIndex};
use serde::{Serialize, Serializer};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    /// Whether the guess was a dictionary word made from the drawn letters
    pub valid: bool,
    /// Longest word the round's letters allowed
    pub longest_word: Option<String>,
    /// State after the round advanced (or failed to)
    pub state: GameState,
    /// Set when the round could not advance because the game is over
    #[serde(
        serialize_with = "rejection_message",
        skip_serializing_if = "Option::is_none"
    )]
    pub round_rejection: Option<GameError>,
}

fn rejection_message<Ser: Serializer>(
    rejection: &Option<GameError>,
    serializer: Ser,
) -> Result<Ser::Ok, Ser::Error> {
    match rejection {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// A single-player game shared by its callers
pub struct Session<S: LetterSource> {
    engine: Mutex<GameEngine<S>>,
}

impl Session<LetterSourceType> {
    /// Start a game on a fresh dictionary with random letters
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` holds no usable word.
    pub fn new_game<I, W>(words: I, seed: Option<u64>) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let rules = GameRules::default();
        let index = Arc::new(WordIndex::for_rules(words, &rules)?);
        Ok(Self::new(GameEngine::with_rules(
            index,
            LetterSourceType::random(seed),
            rules,
        )))
    }
}

impl<S: LetterSource> Session<S> {
    #[must_use]
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// The engine is consistent between operations, so a panic in another
    /// caller never leaves it half-updated
    fn lock(&self) -> MutexGuard<'_, GameEngine<S>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Draw a letter of the given type
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection when a letter limit is reached.
    pub fn draw_letter(&self, letter_type: LetterType) -> Result<char, GameError> {
        self.lock().draw_letter(letter_type)
    }

    /// Score a guess and move to the next round
    ///
    /// The longest possible word is computed from the round's letters first,
    /// then the guess is validated and scored, then the round advances. If the
    /// game is already over the guess still scores and the rejection is
    /// reported in `round_rejection`.
    pub fn submit_guess(&self, guess: &str) -> GuessOutcome {
        let mut engine = self.lock();

        let longest_word = engine.longest_possible_word().map(str::to_string);
        let valid = engine.validate_guess_and_score(guess);
        let round_rejection = engine.advance_round().err();

        GuessOutcome {
            valid,
            longest_word,
            state: engine.state().clone(),
            round_rejection,
        }
    }

    /// Start the game over
    pub fn reset_game(&self) -> GameState {
        self.lock().reset_game()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> GameState {
        self.lock().state().clone()
    }

    #[must_use]
    pub fn rules(&self) -> GameRules {
        *self.lock().rules()
    }

    /// How many more letters may be drawn this round
    #[must_use]
    pub fn remaining_letters(&self) -> usize {
        self.lock().remaining_letters()
    }

    /// Whether a draw of this type would be accepted
    #[must_use]
    pub fn can_draw(&self, letter_type: LetterType) -> bool {
        self.lock().can_draw(letter_type)
    }

    /// Longest word for the current letters, without scoring anything
    #[must_use]
    pub fn longest_possible_word(&self) -> Option<String> {
        self.lock().longest_possible_word().map(str::to_string)
    }
}
