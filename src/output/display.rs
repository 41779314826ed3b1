//! Display functions for game events and command results

use super::formatters::{create_progress_bar, letter_tiles, round_track};
use crate::commands::{BenchmarkResult, LongestResult};
use crate::core::{GameRules, GameState};
use crate::engine::GuessOutcome;
use colored::Colorize;

/// Print the board, round and score
pub fn print_state(state: &GameState, rules: &GameRules) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {} {}   Score: {}",
        state.round,
        round_track(state.round, rules.max_rounds),
        state.score.to_string().bright_yellow().bold()
    );
    println!(
        "Letters: {}",
        letter_tiles(&state.current_letters, rules.max_letters_total).bright_white()
    );
    println!(
        "Vowels {}/{}  Consonants {}/{}",
        state.used_vowels.len(),
        rules.max_letters_per_type,
        state.used_consonants.len(),
        rules.max_letters_per_type
    );
    if state.round_limit_reached {
        println!(
            "{}",
            "No more rounds left. Type 'reset' to start a new game.".yellow()
        );
    }
    println!("{}\n", "─".repeat(60).cyan());
}

/// Print a freshly drawn letter
pub fn print_draw(letter: char, state: &GameState, rules: &GameRules) {
    println!(
        "Drew {}  {}",
        letter.to_string().bright_green().bold(),
        letter_tiles(&state.current_letters, rules.max_letters_total)
    );
    if state.used_total() >= rules.max_letters_total {
        println!("{}", "Board full - enter your guess.".bright_cyan());
    }
    println!();
}

/// Print the result of a guess submission
pub fn print_guess_outcome(guess: &str, outcome: &GuessOutcome, rules: &GameRules) {
    println!();
    if outcome.valid {
        println!(
            "✅ {} Points have been awarded: +{}",
            "Correct!".green().bold(),
            guess.trim().chars().count()
        );
    } else {
        println!(
            "❌ {}",
            format!("Sorry, \"{}\" is not a valid word.", guess.trim()).red()
        );
    }

    match &outcome.longest_word {
        Some(word) => println!(
            "   FYI, the longest possible word was \"{}\"",
            word.to_uppercase().bright_yellow()
        ),
        None => println!("   FYI, no dictionary word could be made from these letters"),
    }

    if let Some(rejection) = &outcome.round_rejection {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!("{}", "    🏁  G A M E   O V E R  🏁    ".bright_green().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        println!("  {rejection}");
        println!(
            "  Final score: {}",
            outcome.state.score.to_string().bright_cyan().bold()
        );
        println!("  Type 'reset' to play again.");
    }
    println!();
    print_state(&outcome.state, rules);
}

/// Print the result of a longest-word lookup
pub fn print_longest_result(result: &LongestResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LONGEST WORD:".bright_cyan().bold(),
        letter_tiles(&result.letters, 0).bright_white()
    );
    println!("{}", "═".repeat(60).cyan());

    match &result.longest {
        Some(word) => {
            println!(
                "\n🏆 {} ({} points)",
                word.to_uppercase().bright_yellow().bold(),
                result.points
            );
            if !result.alternatives.is_empty() {
                let others: Vec<String> = result
                    .alternatives
                    .iter()
                    .map(|w| w.to_uppercase())
                    .collect();
                println!("   Also: {}", others.join(", "));
            }
        }
        None => println!("\n{}", "No dictionary word fits these letters".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Longest words:".bright_cyan().bold());
    println!("   Rounds simulated: {}", result.total_rounds);
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Shortest best:    {}",
        format!("{}", result.min_length).yellow()
    );
    println!(
        "   Longest best:     {}",
        format!("{}", result.max_length).green()
    );
    if let Some(best) = &result.best_round {
        if let Some(word) = &best.longest {
            println!(
                "   Best round:       {} → {}",
                letter_tiles(&best.letters, 0),
                word.to_uppercase().bright_green()
            );
        }
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.total_rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<&usize> = result.distribution.keys().collect();
    lengths.sort_unstable();
    for &len in lengths {
        let count = result.distribution[&len];
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if len == 0 {
            "none".to_string()
        } else {
            format!("{len:>4}")
        };
        println!("   {label}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
