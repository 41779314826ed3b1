//! Game engine: the state machine behind a letters game

use super::error::GameError;
use super::source::LetterSource;
use crate::core::{GameRules, GameState, LetterPool, LetterType};
use crate::dictionary::WordIndex;
use std::sync::Arc;

/// A single-player letters game
///
/// Owns the game state and mutates it only through the operations below.
/// Letters come from the injected `LetterSource`; words are checked against
/// the shared `WordIndex`.
pub struct GameEngine<S: LetterSource> {
    rules: GameRules,
    state: GameState,
    index: Arc<WordIndex>,
    source: S,
}

impl<S: LetterSource> GameEngine<S> {
    /// Create an engine with the default rules
    pub fn new(index: Arc<WordIndex>, source: S) -> Self {
        Self::with_rules(index, source, GameRules::default())
    }

    /// Create an engine with explicit rules
    pub fn with_rules(index: Arc<WordIndex>, source: S, rules: GameRules) -> Self {
        Self {
            state: GameState::new(&rules),
            rules,
            index,
            source,
        }
    }

    /// Draw a letter of the given type
    ///
    /// # Errors
    ///
    /// Returns `GameError::TotalLetterLimit` when the round already holds the
    /// maximum number of letters, otherwise `GameError::LetterTypeLimit` when
    /// the type's quota is used up. The state is unchanged on error.
    pub fn draw_letter(&mut self, letter_type: LetterType) -> Result<char, GameError> {
        if self.state.used_total() >= self.rules.max_letters_total {
            log::debug!("draw rejected: total letter limit");
            return Err(GameError::TotalLetterLimit);
        }
        if self.state.used_of(letter_type) >= self.rules.max_letters_per_type {
            log::debug!("draw rejected: {letter_type} limit");
            return Err(GameError::LetterTypeLimit(letter_type));
        }

        let letter = self.source.pick(letter_type.alphabet());
        self.state.record_letter(letter_type, letter);
        log::debug!(
            "drew {letter_type} {letter}, letters now {}",
            self.state.current_letters
        );
        Ok(letter)
    }

    /// Check a guess against the drawn letters and the dictionary
    ///
    /// The guess is lowercased, nothing else. It must use only letters drawn
    /// this round (each letter may be reused any number of times) and be a
    /// dictionary word. A valid guess adds its length to the score; every
    /// valid call scores again.
    pub fn validate_guess_and_score(&mut self, guess: &str) -> bool {
        let guess = guess.to_lowercase();

        if guess.is_empty() || !self.letter_pool().covers(&guess) {
            log::debug!("guess {guess:?} uses letters not drawn");
            return false;
        }
        if !self.index.contains(&guess) {
            log::debug!("guess {guess:?} is not in the dictionary");
            return false;
        }

        let points = guess.chars().count() as u32;
        self.state.score = self.state.score.saturating_add(points);
        log::debug!("guess {guess:?} scores {points}, total {}", self.state.score);
        true
    }

    /// Longest dictionary word buildable from this round's letters
    #[must_use]
    pub fn longest_possible_word(&self) -> Option<&str> {
        self.index.longest_match(self.letter_pool())
    }

    /// Move on to the next round
    ///
    /// Clears the drawn letters and increments the round, keeping the score.
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundLimit` when the final round has been played.
    /// The round-limit flag is set and nothing else changes.
    pub fn advance_round(&mut self) -> Result<GameState, GameError> {
        if self.state.round >= self.rules.max_rounds {
            self.state.round_limit_reached = true;
            log::info!("round limit of {} reached", self.rules.max_rounds);
            return Err(GameError::RoundLimit {
                max_rounds: self.rules.max_rounds,
            });
        }

        self.state.clear_letters();
        self.state.round += 1;
        log::info!(
            "round {} of {} started, score {}",
            self.state.round,
            self.rules.max_rounds,
            self.state.score
        );
        Ok(self.state.clone())
    }

    /// Start a fresh game
    pub fn reset_game(&mut self) -> GameState {
        self.state = GameState::new(&self.rules);
        log::info!("game reset");
        self.state.clone()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Set of letters drawn this round
    #[must_use]
    pub fn letter_pool(&self) -> LetterPool {
        self.state.letter_pool()
    }

    /// How many more letters may be drawn this round
    #[must_use]
    pub fn remaining_letters(&self) -> usize {
        self.rules
            .max_letters_total
            .saturating_sub(self.state.used_total())
    }

    /// Whether a draw of this type would be accepted
    #[must_use]
    pub fn can_draw(&self, letter_type: LetterType) -> bool {
        self.remaining_letters() > 0
            && self.state.used_of(letter_type) < self.rules.max_letters_per_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::source::{RandomLetters, ScriptedLetters};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn index(words: &[&str]) -> Arc<WordIndex> {
        Arc::new(WordIndex::new(words.iter().copied()).unwrap())
    }

    fn scripted(words: &[&str], script: &str) -> GameEngine<ScriptedLetters> {
        GameEngine::new(index(words), ScriptedLetters::new(script))
    }

    fn draw_all<S: LetterSource>(engine: &mut GameEngine<S>, types: &[LetterType]) {
        for &letter_type in types {
            engine.draw_letter(letter_type).unwrap();
        }
    }

    const V: LetterType = LetterType::Vowel;
    const C: LetterType = LetterType::Consonant;

    #[test]
    fn draw_records_letter_in_draw_order() {
        let mut engine = scripted(&["cat"], "CAT");

        assert_eq!(engine.draw_letter(C), Ok('C'));
        assert_eq!(engine.draw_letter(V), Ok('A'));
        assert_eq!(engine.draw_letter(C), Ok('T'));

        let state = engine.state();
        assert_eq!(state.current_letters, "CAT");
        assert_eq!(state.used_vowels, vec!['A']);
        assert_eq!(state.used_consonants, vec!['C', 'T']);
    }

    #[test]
    fn draws_never_exceed_limits() {
        let mut engine = GameEngine::new(index(&["cat"]), RandomLetters::seeded(99));
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let letter_type = if rng.random_bool(0.5) { V } else { C };
            let _ = engine.draw_letter(letter_type);

            let state = engine.state();
            assert!(state.used_vowels.len() <= 5);
            assert!(state.used_consonants.len() <= 5);
            assert!(state.used_total() <= 9);
            assert_eq!(state.current_letters.chars().count(), state.used_total());

            if rng.random_ratio(1, 12) {
                let _ = engine.advance_round();
                if engine.state().round_limit_reached {
                    engine.reset_game();
                }
            }
        }
    }

    #[test]
    fn tenth_letter_is_rejected_without_change() {
        let mut engine = scripted(&["cat"], "");
        draw_all(&mut engine, &[V, V, V, V, C, C, C, C, C]);
        let before = engine.state().clone();

        assert_eq!(engine.draw_letter(V), Err(GameError::TotalLetterLimit));
        assert_eq!(engine.draw_letter(C), Err(GameError::TotalLetterLimit));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.remaining_letters(), 0);
    }

    #[test]
    fn sixth_vowel_is_a_type_limit() {
        let mut engine = scripted(&["cat"], "");
        draw_all(&mut engine, &[V, V, V, V, V]);
        let before = engine.state().clone();

        assert_eq!(engine.draw_letter(V), Err(GameError::LetterTypeLimit(V)));
        assert_eq!(engine.state(), &before);

        // consonants still go through
        assert!(engine.draw_letter(C).is_ok());
        assert_eq!(engine.draw_letter(V), Err(GameError::LetterTypeLimit(V)));
    }

    #[test]
    fn sixth_consonant_is_a_type_limit_regardless_of_vowels() {
        let mut engine = scripted(&["cat"], "");
        draw_all(&mut engine, &[C, V, C, V, C, C, C]);
        assert_eq!(engine.draw_letter(C), Err(GameError::LetterTypeLimit(C)));
        assert!(!engine.can_draw(C));
        assert!(engine.can_draw(V));
    }

    #[test]
    fn total_limit_checked_before_type_limit() {
        let mut engine = scripted(&["cat"], "");
        draw_all(&mut engine, &[V, V, V, V, V, C, C, C, C]);
        assert_eq!(engine.draw_letter(V), Err(GameError::TotalLetterLimit));
    }

    #[test]
    fn valid_guess_scores_its_length() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(engine.validate_guess_and_score("cat"));
        assert_eq!(engine.state().score, 3);
    }

    #[test]
    fn repeated_guess_scores_again() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(engine.validate_guess_and_score("cat"));
        assert!(engine.validate_guess_and_score("cat"));
        assert_eq!(engine.state().score, 6);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(engine.validate_guess_and_score("CaT"));
        assert_eq!(engine.state().score, 3);
    }

    #[test]
    fn whitespace_is_not_a_drawn_letter() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(!engine.validate_guess_and_score(" CaT "));
        assert!(!engine.validate_guess_and_score(" cat\n"));
        assert!(!engine.validate_guess_and_score("cat\t"));
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);
        engine.state.score = u32::MAX - 1;

        assert!(engine.validate_guess_and_score("cat"));
        assert_eq!(engine.state().score, u32::MAX);
    }

    #[test]
    fn guess_with_undrawn_letter_fails() {
        let mut engine = scripted(&["cat", "cats"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(!engine.validate_guess_and_score("cats"));
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn guess_not_in_dictionary_fails() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(!engine.validate_guess_and_score("tac"));
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn guess_may_reuse_letters() {
        let mut engine = scripted(&["tact"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(engine.validate_guess_and_score("tact"));
        assert_eq!(engine.state().score, 4);
    }

    #[test]
    fn empty_guess_fails() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);

        assert!(!engine.validate_guess_and_score(""));
        assert!(!engine.validate_guess_and_score("   "));
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn guess_before_any_draw_fails() {
        let mut engine = scripted(&["a", "cat"], "");
        assert!(!engine.validate_guess_and_score("a"));
    }

    #[test]
    fn longest_possible_word_uses_drawn_letters() {
        let mut engine = scripted(
            &["aliens", "entrails", "salient", "ratlines", "dials", "cat"],
            "AEIOTSRNL",
        );
        draw_all(&mut engine, &[V, V, V, V, C, C, C, C, C]);

        assert_eq!(engine.state().current_letters.len(), 9);
        assert_eq!(engine.longest_possible_word(), Some("entrails"));
        // pure query
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn longest_possible_word_none_without_letters() {
        let engine = scripted(&["cat"], "");
        assert_eq!(engine.longest_possible_word(), None);
    }

    #[test]
    fn advance_round_clears_letters_and_keeps_score() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);
        assert!(engine.validate_guess_and_score("cat"));

        let state = engine.advance_round().unwrap();
        assert_eq!(state.round, 2);
        assert_eq!(state.score, 3);
        assert!(state.current_letters.is_empty());
        assert!(state.used_vowels.is_empty());
        assert!(state.used_consonants.is_empty());
        assert_eq!(engine.state(), &state);
    }

    #[test]
    fn advance_round_stops_at_max_rounds() {
        let mut engine = scripted(&["cat"], "");

        for expected in 2..=4 {
            let state = engine.advance_round().unwrap();
            assert_eq!(state.round, expected);
            assert!(!state.round_limit_reached);
        }

        assert_eq!(
            engine.advance_round(),
            Err(GameError::RoundLimit { max_rounds: 4 })
        );
        assert!(engine.state().round_limit_reached);
        assert_eq!(engine.state().round, 4);

        // stays rejected
        assert!(engine.advance_round().is_err());
        assert_eq!(engine.state().round, 4);
    }

    #[test]
    fn rejected_advance_only_sets_flag() {
        let mut engine = scripted(&["cat"], "CAT");
        for _ in 0..3 {
            engine.advance_round().unwrap();
        }
        draw_all(&mut engine, &[C, V, C]);
        let mut expected = engine.state().clone();
        expected.round_limit_reached = true;

        assert!(engine.advance_round().is_err());
        assert_eq!(engine.state(), &expected);
    }

    #[test]
    fn reset_restores_a_fresh_game() {
        let mut engine = scripted(&["cat"], "CAT");
        draw_all(&mut engine, &[C, V, C]);
        assert!(engine.validate_guess_and_score("cat"));
        for _ in 0..4 {
            let _ = engine.advance_round();
        }
        assert!(engine.state().round_limit_reached);

        let state = engine.reset_game();
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert!(state.used_vowels.is_empty());
        assert!(state.used_consonants.is_empty());
        assert!(state.current_letters.is_empty());
        assert!(!state.round_limit_reached);
        assert_eq!(engine.state(), &state);
    }

    #[test]
    fn custom_rules_are_honoured() {
        let rules = GameRules::new(2, 3, 2, 2);
        let mut engine =
            GameEngine::with_rules(index(&["cat"]), ScriptedLetters::new(""), rules);

        draw_all(&mut engine, &[V, V]);
        assert_eq!(engine.draw_letter(V), Err(GameError::LetterTypeLimit(V)));
        engine.draw_letter(C).unwrap();
        assert_eq!(engine.draw_letter(C), Err(GameError::TotalLetterLimit));

        assert!(engine.advance_round().is_ok());
        assert!(engine.advance_round().is_err());
        assert_eq!(engine.rules(), &rules);
    }
}
