//! Letter sources
//!
//! Defines the LetterSource trait and concrete implementations. The engine
//! never touches randomness directly; it asks a source for a letter.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Supplies letters for draws
pub trait LetterSource {
    /// Pick one letter from `alphabet`
    ///
    /// `alphabet` is never empty.
    fn pick(&mut self, alphabet: &[char]) -> char;
}

/// Enum wrapper for all letter source types
///
/// Allows runtime selection of the source while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum LetterSourceType {
    /// Uniform random draws
    Random(RandomLetters),
    /// Pre-scripted draws
    Scripted(ScriptedLetters),
}

impl LetterSource for LetterSourceType {
    fn pick(&mut self, alphabet: &[char]) -> char {
        match self {
            Self::Random(s) => s.pick(alphabet),
            Self::Scripted(s) => s.pick(alphabet),
        }
    }
}

impl LetterSourceType {
    /// Random source, reproducible when a seed is given
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        Self::Random(seed.map_or_else(RandomLetters::from_os_rng, RandomLetters::seeded))
    }
}

/// Uniform random letters, with replacement
#[derive(Debug, Clone)]
pub struct RandomLetters {
    rng: StdRng,
}

impl RandomLetters {
    /// Deterministic source: the same seed yields the same letters
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl LetterSource for RandomLetters {
    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet.choose(&mut self.rng).copied().unwrap_or('?')
    }
}

/// Letters played back from a script
///
/// Each pick takes the first queued letter that belongs to the requested
/// alphabet, so a script like "CAT" works whatever order the vowel and
/// consonant draws arrive in. When nothing suitable is queued the first
/// letter of the alphabet is returned.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLetters {
    queue: VecDeque<char>,
}

impl ScriptedLetters {
    /// Script from a string, case-insensitive
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::{CONSONANTS, VOWELS};
    /// use countdown_letters::engine::{LetterSource, ScriptedLetters};
    ///
    /// let mut source = ScriptedLetters::new("cat");
    /// assert_eq!(source.pick(&VOWELS), 'A');
    /// assert_eq!(source.pick(&CONSONANTS), 'C');
    /// assert_eq!(source.pick(&CONSONANTS), 'T');
    /// ```
    #[must_use]
    pub fn new(script: &str) -> Self {
        Self {
            queue: script.chars().map(|c| c.to_ascii_uppercase()).collect(),
        }
    }

    /// Letters still queued
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl LetterSource for ScriptedLetters {
    fn pick(&mut self, alphabet: &[char]) -> char {
        let fallback = alphabet.first().copied().unwrap_or('?');
        self.queue
            .iter()
            .position(|c| alphabet.contains(c))
            .and_then(|pos| self.queue.remove(pos))
            .unwrap_or(fallback)
    }
}
