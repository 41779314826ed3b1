//! Game rules and the game state snapshot

use super::letters::{LetterPool, LetterType};
use serde::{Deserialize, Serialize};

/// Limits a game is played under
///
/// Fixed when an engine is created and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Most letters of one type per round
    pub max_letters_per_type: usize,
    /// Most letters per round
    pub max_letters_total: usize,
    /// Rounds per game
    pub max_rounds: u8,
    /// Shortest word considered for the longest-word lookup
    pub min_word_length: usize,
}

impl GameRules {
    #[must_use]
    pub const fn new(
        max_letters_per_type: usize,
        max_letters_total: usize,
        max_rounds: u8,
        min_word_length: usize,
    ) -> Self {
        Self {
            max_letters_per_type,
            max_letters_total,
            max_rounds,
            min_word_length,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(5, 9, 4, 2)
    }
}

/// Snapshot of a game in progress
///
/// Serialises with camelCase keys (`usedVowels`, `currentLetters`, ...) for
/// transports that hand the state to a browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub used_vowels: Vec<char>,
    pub used_consonants: Vec<char>,
    /// Letters in the order they were drawn
    pub current_letters: String,
    pub round: u8,
    pub round_limit_reached: bool,
    pub score: u32,
}

impl GameState {
    /// Fresh state for the first round
    #[must_use]
    pub fn new(rules: &GameRules) -> Self {
        Self {
            used_vowels: Vec::with_capacity(rules.max_letters_per_type),
            used_consonants: Vec::with_capacity(rules.max_letters_per_type),
            current_letters: String::with_capacity(rules.max_letters_total),
            round: 1,
            round_limit_reached: false,
            score: 0,
        }
    }

    /// Letters drawn this round
    #[inline]
    #[must_use]
    pub fn used_total(&self) -> usize {
        self.used_vowels.len() + self.used_consonants.len()
    }

    /// Letters of one type drawn this round
    #[inline]
    #[must_use]
    pub fn used_of(&self, letter_type: LetterType) -> usize {
        match letter_type {
            LetterType::Vowel => self.used_vowels.len(),
            LetterType::Consonant => self.used_consonants.len(),
        }
    }

    /// Set of letters drawn this round
    #[must_use]
    pub fn letter_pool(&self) -> LetterPool {
        LetterPool::from_letters(self.current_letters.chars())
    }

    pub(crate) fn record_letter(&mut self, letter_type: LetterType, letter: char) {
        match letter_type {
            LetterType::Vowel => self.used_vowels.push(letter),
            LetterType::Consonant => self.used_consonants.push(letter),
        }
        self.current_letters.push(letter);
    }

    pub(crate) fn clear_letters(&mut self) {
        self.used_vowels.clear();
        self.used_consonants.clear();
        self.current_letters.clear();
    }
}
