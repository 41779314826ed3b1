//! Longest word command
//!
//! Finds the best word for a given set of letters, the same lookup the game
//! reveals at the end of each round.

use crate::core::{GameRules, LetterPool, LetterType};
use crate::dictionary::WordIndex;

/// Number of same-length alternatives reported alongside the best word
const MAX_ALTERNATIVES: usize = 5;

/// Result of a longest-word lookup
pub struct LongestResult {
    pub letters: String,
    pub longest: Option<String>,
    /// Other words of the same length the letters allow
    pub alternatives: Vec<String>,
    /// Points the longest word would score
    pub points: usize,
}

/// Find the longest dictionary word for `letters`
///
/// The letters must form a legal round: alphabetic only, at most
/// `max_letters_total` of them and at most `max_letters_per_type` of each type.
///
/// # Errors
///
/// Returns an error describing the first rule the letters break.
pub fn find_longest(
    letters: &str,
    index: &WordIndex,
    rules: &GameRules,
) -> Result<LongestResult, String> {
    let letters: String = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if letters.is_empty() {
        return Err("No letters given".to_string());
    }

    let mut vowels = 0;
    let mut consonants = 0;
    for ch in letters.chars() {
        match LetterType::of(ch) {
            Some(LetterType::Vowel) => vowels += 1,
            Some(LetterType::Consonant) => consonants += 1,
            None => return Err(format!("'{ch}' is not a letter")),
        }
    }

    let total = vowels + consonants;
    if total > rules.max_letters_total {
        return Err(format!(
            "Too many letters: {total} given, at most {} allowed",
            rules.max_letters_total
        ));
    }
    if vowels > rules.max_letters_per_type {
        return Err(format!(
            "Too many vowels: {vowels} given, at most {} allowed",
            rules.max_letters_per_type
        ));
    }
    if consonants > rules.max_letters_per_type {
        return Err(format!(
            "Too many consonants: {consonants} given, at most {} allowed",
            rules.max_letters_per_type
        ));
    }

    let pool = LetterPool::from_letters(letters.chars());
    let longest = index.longest_match(pool).map(str::to_string);

    let (alternatives, points) = match &longest {
        Some(best) => {
            let len = best.chars().count();
            let alternatives = index
                .words_of_length(len)
                .filter(|word| *word != best.as_str() && pool.covers(word))
                .take(MAX_ALTERNATIVES)
                .map(str::to_string)
                .collect();
            (alternatives, len)
        }
        None => (Vec::new(), 0),
    };

    Ok(LongestResult {
        letters,
        longest,
        alternatives,
        points,
    })
}
