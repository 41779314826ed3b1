//! Command implementations

pub mod benchmark;
pub mod longest;
pub mod simple;

pub use benchmark::{BenchmarkResult, RoundSample, run_benchmark, simulate_round};
pub use longest::{LongestResult, find_longest};
pub use simple::{SimpleCommand, parse_command, run_simple};
