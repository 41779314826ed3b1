//! Dictionary for the letters game
//!
//! Provides the embedded default word list, file loading, and the
//! `WordIndex` used for guess validation and longest-word lookups.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use index::WordIndex;

use std::fmt;
use std::io;

/// Error building a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list held no usable word
    Empty,
    /// The word list could not be read
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
