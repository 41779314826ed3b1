//! Letter alphabets and the per-round letter pool
//!
//! A `LetterPool` stores the set of drawn letters as a 26-bit mask so that
//! "is every character of this word available" is a single bitwise check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five vowels a player may draw
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// The 21 consonants a player may draw
pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

/// Kind of letter requested in a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterType {
    Vowel,
    Consonant,
}

impl LetterType {
    /// Alphabet a draw of this type picks from
    #[must_use]
    pub const fn alphabet(self) -> &'static [char] {
        match self {
            Self::Vowel => &VOWELS,
            Self::Consonant => &CONSONANTS,
        }
    }

    /// Classify a letter, case-insensitive
    ///
    /// Returns `None` for anything outside A-Z.
    #[must_use]
    pub fn of(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if VOWELS.contains(&upper) {
            Some(Self::Vowel)
        } else if CONSONANTS.contains(&upper) {
            Some(Self::Consonant)
        } else {
            None
        }
    }

    /// Parse a user-supplied name ("v", "vowel", "c", "consonant")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "v" | "vowel" => Some(Self::Vowel),
            "c" | "consonant" => Some(Self::Consonant),
            _ => None,
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vowel => write!(f, "vowel"),
            Self::Consonant => write!(f, "consonant"),
        }
    }
}

/// Bit reserved for characters that can never be drawn
const FOREIGN_BIT: u32 = 1 << 31;

/// Mask bit for a single character, case-insensitive
///
/// Characters outside a-z map to `FOREIGN_BIT`, which no pool ever contains.
#[inline]
#[must_use]
pub fn letter_bit(ch: char) -> u32 {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        1 << (lower as u32 - 'a' as u32)
    } else {
        FOREIGN_BIT
    }
}

/// Union of the mask bits of every character in `word`
#[inline]
#[must_use]
pub fn letter_mask(word: &str) -> u32 {
    word.chars().fold(0, |mask, ch| mask | letter_bit(ch))
}

/// Set of letters available this round
///
/// Membership is per letter, not per occurrence: a pool holding one `E`
/// covers "tee" as readily as "ten".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterPool {
    mask: u32,
}

impl LetterPool {
    /// Build a pool from drawn letters
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::LetterPool;
    ///
    /// let pool = LetterPool::from_letters("CAT".chars());
    /// assert!(pool.covers("tact"));
    /// assert!(!pool.covers("cats"));
    /// ```
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mask = letters
            .into_iter()
            .map(letter_bit)
            .filter(|&bit| bit != FOREIGN_BIT)
            .fold(0, |mask, bit| mask | bit);
        Self { mask }
    }

    /// Raw 26-bit mask
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.mask
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Number of distinct letters in the pool
    #[inline]
    #[must_use]
    pub const fn distinct(self) -> u32 {
        self.mask.count_ones()
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        self.mask & letter_bit(letter) != 0
    }

    /// Whether every character of `word` is in the pool
    ///
    /// The empty word is trivially covered.
    #[inline]
    #[must_use]
    pub fn covers(self, word: &str) -> bool {
        self.covers_mask(letter_mask(word))
    }

    /// Same as [`covers`](Self::covers) for a precomputed mask
    #[inline]
    #[must_use]
    pub const fn covers_mask(self, word_mask: u32) -> bool {
        word_mask & !self.mask == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_partition_the_english_letters() {
        assert_eq!(VOWELS.len() + CONSONANTS.len(), 26);
        for ch in 'A'..='Z' {
            let in_vowels = VOWELS.contains(&ch);
            let in_consonants = CONSONANTS.contains(&ch);
            assert!(in_vowels ^ in_consonants, "{ch} must be in exactly one alphabet");
        }
    }

    #[test]
    fn letter_type_classifies_case_insensitively() {
        assert_eq!(LetterType::of('a'), Some(LetterType::Vowel));
        assert_eq!(LetterType::of('U'), Some(LetterType::Vowel));
        assert_eq!(LetterType::of('y'), Some(LetterType::Consonant));
        assert_eq!(LetterType::of('Z'), Some(LetterType::Consonant));
        assert_eq!(LetterType::of('3'), None);
        assert_eq!(LetterType::of('é'), None);
    }

    #[test]
    fn letter_type_from_name() {
        assert_eq!(LetterType::from_name("v"), Some(LetterType::Vowel));
        assert_eq!(LetterType::from_name(" Vowel "), Some(LetterType::Vowel));
        assert_eq!(LetterType::from_name("C"), Some(LetterType::Consonant));
        assert_eq!(LetterType::from_name("consonant"), Some(LetterType::Consonant));
        assert_eq!(LetterType::from_name("x"), None);
    }

    #[test]
    fn alphabet_matches_type() {
        assert_eq!(LetterType::Vowel.alphabet(), &VOWELS);
        assert_eq!(LetterType::Consonant.alphabet(), &CONSONANTS);
    }

    #[test]
    fn letter_type_display() {
        assert_eq!(LetterType::Vowel.to_string(), "vowel");
        assert_eq!(LetterType::Consonant.to_string(), "consonant");
    }

    #[test]
    fn letter_mask_sets_one_bit_per_distinct_letter() {
        assert_eq!(letter_mask("a"), 1);
        assert_eq!(letter_mask("ab"), 0b11);
        assert_eq!(letter_mask("aaa"), 1);
        assert_eq!(letter_mask("Z"), 1 << 25);
        assert_eq!(letter_mask(""), 0);
    }

    #[test]
    fn pool_is_case_insensitive() {
        let pool = LetterPool::from_letters("CaT".chars());
        assert!(pool.contains('c'));
        assert!(pool.contains('A'));
        assert!(pool.contains('t'));
        assert!(!pool.contains('s'));
        assert_eq!(pool.distinct(), 3);
    }

    #[test]
    fn pool_uses_set_membership() {
        let pool = LetterPool::from_letters(['T', 'E', 'N']);
        assert!(pool.covers("tent"));
        assert!(pool.covers("teen"));
        assert!(!pool.covers("tens"));
    }

    #[test]
    fn pool_never_covers_foreign_characters() {
        let pool = LetterPool::from_letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars());
        assert!(pool.covers("countdown"));
        assert!(!pool.covers("can't"));
        assert!(!pool.covers("café"));
        assert!(!pool.covers("two words"));
    }

    #[test]
    fn pool_ignores_foreign_input_letters() {
        let pool = LetterPool::from_letters(['a', '!', '7']);
        assert_eq!(pool.distinct(), 1);
        assert!(!pool.covers("!"));
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::default();
        assert!(pool.is_empty());
        assert!(pool.covers(""));
        assert!(!pool.covers("a"));
    }
}
