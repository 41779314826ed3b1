//! Countdown Letters
//!
//! The letters round of the Countdown game show: draw vowels and consonants,
//! make the longest word you can, and compare it with the longest word the
//! dictionary allows.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_letters::core::LetterType;
//! use countdown_letters::engine::Session;
//!
//! let session = Session::new_game(["cat", "act", "tact"], Some(7)).unwrap();
//! session.draw_letter(LetterType::Consonant).unwrap();
//! session.draw_letter(LetterType::Vowel).unwrap();
//!
//! let outcome = session.submit_guess("at");
//! println!("valid: {}, best: {:?}", outcome.valid, outcome.longest_word);
//! ```

// Core domain types
pub mod core;

// Word lists and the dictionary index
pub mod dictionary;

// Game state machine and session boundary
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup for the binary
pub mod logging;
