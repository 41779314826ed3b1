//! Dictionary index
//!
//! Two views over one word list: a hash set for exact membership at any
//! length, and length buckets (each sorted lexicographically) for the
//! longest-word search, restricted to the lengths a round can produce.

use super::DictionaryError;
use crate::core::{GameRules, LetterPool, letter_mask};
use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;

/// A bucketed word with its letter mask precomputed
#[derive(Debug, Clone)]
struct IndexedWord {
    text: String,
    mask: u32,
}

/// Read-only dictionary answering membership and longest-match queries
#[derive(Debug, Clone)]
pub struct WordIndex {
    words: FxHashSet<String>,
    /// `buckets[n]` holds the words of length `n`; unused lengths stay empty
    buckets: Vec<Vec<IndexedWord>>,
    lengths: RangeInclusive<usize>,
}

impl WordIndex {
    /// Build an index bucketed for the default rules (lengths 2 to 9)
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no non-blank word is supplied.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::LetterPool;
    /// use countdown_letters::dictionary::WordIndex;
    ///
    /// let index = WordIndex::new(["cat", "act", "at"]).unwrap();
    /// let pool = LetterPool::from_letters("TAC".chars());
    /// assert_eq!(index.longest_match(pool), Some("act"));
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::for_rules(words, &GameRules::default())
    }

    /// Build an index whose longest-match lengths follow `rules`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no non-blank word is supplied.
    pub fn for_rules<I, S>(words: I, rules: &GameRules) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_lengths(words, rules.min_word_length..=rules.max_letters_total)
    }

    /// Build an index that considers only `lengths` for longest-match
    ///
    /// Words are trimmed and lowercased; blank entries are dropped. Membership
    /// is answered for every word regardless of length.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no non-blank word is supplied.
    pub fn with_lengths<I, S>(
        words: I,
        lengths: RangeInclusive<usize>,
    ) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut buckets: Vec<Vec<IndexedWord>> = vec![Vec::new(); *lengths.end() + 1];
        for word in &words {
            let len = word.chars().count();
            if lengths.contains(&len) {
                buckets[len].push(IndexedWord {
                    text: word.clone(),
                    mask: letter_mask(word),
                });
            }
        }
        for bucket in &mut buckets {
            bucket.sort_unstable_by(|a, b| a.text.cmp(&b.text));
        }

        log::debug!(
            "indexed {} words, {} eligible for lengths {}..={}",
            words.len(),
            buckets.iter().map(Vec::len).sum::<usize>(),
            lengths.start(),
            lengths.end()
        );

        Ok(Self {
            words,
            buckets,
            lengths,
        })
    }

    /// Exact membership test on the lowercased word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Longest word whose characters all appear in `pool`
    ///
    /// Scans from the longest eligible length down; within a length the
    /// lexicographically smallest word wins. Repeated letters in a word need
    /// only one copy in the pool.
    #[must_use]
    pub fn longest_match(&self, pool: LetterPool) -> Option<&str> {
        if pool.is_empty() {
            return None;
        }

        self.lengths.clone().rev().find_map(|len| {
            self.buckets[len]
                .iter()
                .find(|word| pool.covers_mask(word.mask))
                .map(|word| word.text.as_str())
        })
    }

    /// Words of exactly `len` characters eligible for longest-match, sorted
    pub fn words_of_length(&self, len: usize) -> impl Iterator<Item = &str> {
        self.buckets
            .get(len)
            .into_iter()
            .flatten()
            .map(|word| word.text.as_str())
    }

    /// Lengths considered by [`longest_match`](Self::longest_match)
    #[must_use]
    pub fn match_lengths(&self) -> RangeInclusive<usize> {
        self.lengths.clone()
    }

    /// Number of distinct words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
