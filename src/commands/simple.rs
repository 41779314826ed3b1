//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::LetterType;
use crate::engine::{LetterSource, Session};
use crate::output::{print_draw, print_guess_outcome, print_state};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Draw(LetterType),
    Guess(String),
    State,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line of input
///
/// A bare word that is not a command is taken as a guess.
#[must_use]
pub fn parse_command(line: &str) -> SimpleCommand {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    match head.to_lowercase().as_str() {
        "v" | "vowel" if rest.is_empty() => SimpleCommand::Draw(LetterType::Vowel),
        "c" | "consonant" if rest.is_empty() => SimpleCommand::Draw(LetterType::Consonant),
        "g" | "guess" if !rest.is_empty() => SimpleCommand::Guess(rest.to_string()),
        "state" | "s" => SimpleCommand::State,
        "reset" | "r" | "new" => SimpleCommand::Reset,
        "help" | "h" | "?" => SimpleCommand::Help,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        word if rest.is_empty() && !word.is_empty() && word.chars().all(char::is_alphabetic) => {
            SimpleCommand::Guess(word.to_string())
        }
        _ => SimpleCommand::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  v | vowel          draw a vowel");
    println!("  c | consonant      draw a consonant");
    println!("  g <word> | <word>  submit a guess and end the round");
    println!("  state              show the board");
    println!("  reset              start a new game");
    println!("  quit               leave\n");
}

/// Run the simple interactive CLI mode
///
/// Reads commands from `reader` until it is exhausted or the player quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: LetterSource, R: BufRead>(
    session: &Session<S>,
    mut reader: R,
) -> Result<(), String> {
    let rules = session.rules();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Countdown - Letters Round                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Draw up to {} letters (at most {} of each type), then guess the longest word you can.",
        rules.max_letters_total, rules.max_letters_per_type
    );
    println!("Each valid word scores one point per letter.\n");
    print_help();
    print_state(&session.state(), &rules);

    loop {
        let Some(line) = read_line(&mut reader, "Command")? else {
            return Ok(());
        };

        match parse_command(&line) {
            SimpleCommand::Draw(letter_type) => {
                if session.state().round_limit_reached {
                    println!("{}", "No more rounds left. Type 'reset' to play again.".yellow());
                    continue;
                }
                match session.draw_letter(letter_type) {
                    Ok(letter) => print_draw(letter, &session.state(), &rules),
                    Err(err) => println!("❌ {}\n", err.to_string().red()),
                }
            }
            SimpleCommand::Guess(guess) => {
                if session.state().round_limit_reached {
                    println!("{}", "No more rounds left. Type 'reset' to play again.".yellow());
                    continue;
                }
                let len = guess.chars().count();
                if len < rules.min_word_length || len > rules.max_letters_total {
                    println!(
                        "❌ {}\n",
                        format!(
                            "Guesses must be {} to {} letters long",
                            rules.min_word_length, rules.max_letters_total
                        )
                        .red()
                    );
                    continue;
                }
                let outcome = session.submit_guess(&guess);
                print_guess_outcome(&guess, &outcome, &rules);
            }
            SimpleCommand::State => print_state(&session.state(), &rules),
            SimpleCommand::Reset => {
                let state = session.reset_game();
                println!("\n🔄 {}\n", "Game reset".green());
                print_state(&state, &rules);
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Unknown(input) => {
                if !input.is_empty() {
                    println!("Unknown command '{input}'. Type 'help' for commands.\n");
                }
            }
        }
    }
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
