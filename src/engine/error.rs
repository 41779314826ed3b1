//! Rejections raised by game operations

use crate::core::LetterType;
use std::fmt;

/// A game operation that could not be carried out
///
/// All variants are recoverable. A rejected draw leaves the state untouched;
/// a rejected round advance only sets the round-limit flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Every letter slot for this round is filled
    TotalLetterLimit,
    /// No more letters of this type this round
    LetterTypeLimit(LetterType),
    /// The last round has been played
    RoundLimit { max_rounds: u8 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalLetterLimit => write!(f, "Letter limit reached"),
            Self::LetterTypeLimit(letter_type) => write!(f, "All {letter_type}s used"),
            Self::RoundLimit { max_rounds } => write!(
                f,
                "Round limit reached - maximum of {max_rounds} rounds played"
            ),
        }
    }
}

impl std::error::Error for GameError {}
