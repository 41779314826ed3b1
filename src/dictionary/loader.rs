//! Word list loading utilities
//!
//! Word-list files hold one word per line, UTF-8, no header, any length and
//! casing. Words are lowercased when the index is built.

use super::{DictionaryError, WORDS, WordIndex};
use crate::core::GameRules;
use std::fs;
use std::path::Path;

/// Where a dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file on disk
    File(String),
}

impl WordSource {
    /// Parse a command-line value: "embedded" (or "default"), otherwise a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(path.to_string()),
        }
    }

    /// Build the index for this source
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no words.
    pub fn load(&self, rules: &GameRules) -> Result<WordIndex, DictionaryError> {
        match self {
            Self::Embedded => index_from_slice(WORDS, rules),
            Self::File(path) => load_from_file(path, rules),
        }
    }
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or is not
/// UTF-8, or `DictionaryError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use countdown_letters::core::GameRules;
/// use countdown_letters::dictionary::loader::load_from_file;
///
/// let index = load_from_file("words_alpha.txt", &GameRules::default()).unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    rules: &GameRules,
) -> Result<WordIndex, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let index = WordIndex::for_rules(content.lines(), rules)?;
    log::info!("loaded {} words from {}", index.len(), path.display());
    Ok(index)
}

/// Build a dictionary from an in-memory slice
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if the slice holds no words.
pub fn index_from_slice(slice: &[&str], rules: &GameRules) -> Result<WordIndex, DictionaryError> {
    let index = WordIndex::for_rules(slice.iter().copied(), rules)?;
    log::info!("loaded {} embedded words", index.len());
    Ok(index)
}
