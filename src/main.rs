//! Countdown Letters - CLI
//!
//! Letters round with TUI and CLI modes, a longest-word lookup and a
//! simulation benchmark.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use countdown_letters::{
    commands::{find_longest, run_benchmark, run_simple},
    core::GameRules,
    dictionary::{WordIndex, loader::WordSource},
    engine::{GameEngine, LetterSourceType, Session},
    logging,
    output::{print_benchmark_result, print_longest_result},
};
use std::io;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "countdown",
    about = "Countdown letters round: draw letters, find the longest word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible letter draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text game loop without TUI)
    Simple,

    /// Find the longest word for a set of letters
    Longest {
        /// The letters, e.g. AETSRNDLI
        letters: String,
    },

    /// Simulate random rounds and report longest-word statistics
    Benchmark {
        /// Number of rounds to simulate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rules = GameRules::default();
    let index = WordSource::from_arg(&cli.wordlist)
        .load(&rules)
        .with_context(|| format!("loading word list '{}'", cli.wordlist))?;
    let index = Arc::new(index);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(index, rules, cli.seed),
        Commands::Simple => run_simple_command(index, rules, cli.seed),
        Commands::Longest { letters } => run_longest_command(&letters, &index, &rules),
        Commands::Benchmark { count } => {
            run_benchmark_command(&index, &rules, count, cli.seed);
            Ok(())
        }
    }
}

fn new_session(
    index: Arc<WordIndex>,
    rules: GameRules,
    seed: Option<u64>,
) -> Session<LetterSourceType> {
    Session::new(GameEngine::with_rules(
        index,
        LetterSourceType::random(seed),
        rules,
    ))
}

fn run_play_command(index: Arc<WordIndex>, rules: GameRules, seed: Option<u64>) -> Result<()> {
    use countdown_letters::interactive::{App, run_tui};

    let app = App::new(new_session(index, rules, seed));
    run_tui(app)
}

fn run_simple_command(index: Arc<WordIndex>, rules: GameRules, seed: Option<u64>) -> Result<()> {
    let session = new_session(index, rules, seed);
    run_simple(&session, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_longest_command(letters: &str, index: &WordIndex, rules: &GameRules) -> Result<()> {
    let result = find_longest(letters, index, rules).map_err(|e| anyhow::anyhow!(e))?;
    print_longest_result(&result);
    Ok(())
}

fn run_benchmark_command(
    index: &Arc<WordIndex>,
    rules: &GameRules,
    count: usize,
    seed: Option<u64>,
) {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Simulating {count} rounds against {} words (seed {seed})...",
        index.len()
    );

    let result = run_benchmark(index, rules, count, seed, true);
    print_benchmark_result(&result);
}
