//! Benchmark command
//!
//! Simulates many random rounds and reports how long the best available word
//! tends to be for the dictionary in use.

use crate::core::{GameRules, LetterType};
use crate::dictionary::WordIndex;
use crate::engine::{GameEngine, RandomLetters};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One simulated round
#[derive(Debug, Clone)]
pub struct RoundSample {
    pub letters: String,
    pub longest: Option<String>,
}

impl RoundSample {
    /// Length of the best word, 0 when nothing matched
    #[must_use]
    pub fn best_length(&self) -> usize {
        self.longest.as_ref().map_or(0, |word| word.chars().count())
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_rounds: usize,
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    /// Best-word length to number of rounds; 0 counts rounds with no word
    pub distribution: HashMap<usize, usize>,
    /// A round that produced the longest word seen
    pub best_round: Option<RoundSample>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play out the letter draws of one round and look up its longest word
///
/// Letter types are chosen at random among those still allowed until the
/// round is full. The same seed always yields the same round.
#[must_use]
pub fn simulate_round(index: &Arc<WordIndex>, rules: &GameRules, seed: u64) -> RoundSample {
    let mut engine =
        GameEngine::with_rules(Arc::clone(index), RandomLetters::seeded(seed), *rules);
    let mut chooser = StdRng::seed_from_u64(seed.rotate_left(32));

    while engine.remaining_letters() > 0 {
        let letter_type = match (
            engine.can_draw(LetterType::Vowel),
            engine.can_draw(LetterType::Consonant),
        ) {
            (true, true) => {
                if chooser.random_bool(0.5) {
                    LetterType::Vowel
                } else {
                    LetterType::Consonant
                }
            }
            (true, false) => LetterType::Vowel,
            (false, true) => LetterType::Consonant,
            (false, false) => break,
        };
        if engine.draw_letter(letter_type).is_err() {
            break;
        }
    }

    RoundSample {
        letters: engine.state().current_letters.clone(),
        longest: engine.longest_possible_word().map(str::to_string),
    }
}

/// Simulate `count` rounds in parallel
///
/// Round `i` is seeded with `seed + i`, so a run is reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    index: &Arc<WordIndex>,
    rules: &GameRules,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let samples: Vec<RoundSample> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let sample = simulate_round(index, rules, seed.wrapping_add(i));
            pb.inc(1);
            sample
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_length = 0;
    let mut min_length = usize::MAX;
    let mut max_length = 0;
    let mut best_round: Option<&RoundSample> = None;

    for sample in &samples {
        let len = sample.best_length();
        *distribution.entry(len).or_insert(0) += 1;
        total_length += len;
        min_length = min_length.min(len);
        if len > max_length || best_round.is_none() {
            max_length = max_length.max(len);
            best_round = Some(sample);
        }
    }

    let total_rounds = samples.len();
    log::info!("simulated {total_rounds} rounds in {:.2}s", duration.as_secs_f64());

    BenchmarkResult {
        total_rounds,
        average_length: if total_rounds == 0 {
            0.0
        } else {
            total_length as f64 / total_rounds as f64
        },
        min_length: if total_rounds == 0 { 0 } else { min_length },
        max_length,
        distribution,
        best_round: best_round.cloned(),
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
