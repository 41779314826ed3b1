//! Core domain types for the letters game
//!
//! Alphabets, the letter pool, game rules and the state snapshot. Nothing in
//! here touches the dictionary or randomness.

mod letters;
mod state;

pub use letters::{CONSONANTS, LetterPool, LetterType, VOWELS, letter_mask};
pub use state::{GameRules, GameState};
