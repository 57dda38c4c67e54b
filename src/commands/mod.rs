//! Command implementations

pub mod benchmark;
pub mod lists;
pub mod play;
pub mod rank;
pub mod solve;

pub use benchmark::{BenchmarkResult, WordTestResult, run_benchmark};
pub use lists::{ListSummary, list_dictionaries};
pub use play::{PlayCommand, PlayStats, run_play};
pub use rank::{RankedWord, rank_openers};
pub use solve::{GuessStep, SolveOutcome, SolveResult, solve_word};
