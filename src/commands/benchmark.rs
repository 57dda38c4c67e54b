//! Benchmark command
//!
//! Simulates a full session for every target word, in parallel, and
//! aggregates how many rounds the engine needed.

use super::solve::{SolveOutcome, solve_word};
use crate::core::WordEntry;
use crate::solver::{AnyRandom, GuessKind, LossReason, Session, SessionConfig, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result from simulating a single target
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub rounds: usize,
    pub success: bool,
    pub explorations: usize,
    pub loss: Option<LossReason>,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Solved games by number of rounds
    pub distribution: FxHashMap<usize, usize>,
    pub explorations: usize,
    pub failures: Vec<WordTestResult>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run one session per target word over a shared dictionary
///
/// With a `seed`, target `i` uses seed `seed + i` so runs are reproducible
/// regardless of thread scheduling.
///
/// # Errors
///
/// Returns the first error any session reports, e.g. a target of the wrong length.
#[allow(clippy::cast_precision_loss)] // Word counts are far below 2^52
pub fn run_benchmark(
    dictionary: &Arc<Vec<WordEntry>>,
    config: &SessionConfig,
    targets: &[WordEntry],
    seed: Option<u64>,
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| {
            let rng = AnyRandom::from_seed(seed.map(|s| s.wrapping_add(i as u64)));
            let mut session = Session::with_dictionary(config.clone(), Arc::clone(dictionary), rng);
            let result = test_word(&mut session, target.headword());
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = results.len();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    for result in results.iter().filter(|r| r.success) {
        *distribution.entry(result.rounds).or_insert(0) += 1;
        total_rounds += result.rounds;
        min_rounds = min_rounds.min(result.rounds);
        max_rounds = max_rounds.max(result.rounds);
    }
    let solved: usize = distribution.values().sum();
    let explorations = results.iter().map(|r| r.explorations).sum();
    let failures: Vec<WordTestResult> = results.into_iter().filter(|r| !r.success).collect();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: failures.len(),
        average_rounds: if solved == 0 {
            0.0
        } else {
            total_rounds as f64 / solved as f64
        },
        min_rounds: if solved == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        explorations,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn test_word(session: &mut Session<AnyRandom>, target: &str) -> Result<WordTestResult, SolverError> {
    let result = solve_word(session, target)?;
    let success = result.success();
    let explorations = result
        .guesses
        .iter()
        .filter(|g| g.kind == GuessKind::Exploration)
        .count();
    let loss = match &result.outcome {
        SolveOutcome::Failed { reason, .. } => Some(*reason),
        SolveOutcome::Solved { .. } => None,
    };

    Ok(WordTestResult {
        word: result.target,
        rounds: result.guesses.len(),
        guesses: result.guesses.into_iter().map(|g| g.word).collect(),
        success,
        explorations,
        loss,
    })
}
