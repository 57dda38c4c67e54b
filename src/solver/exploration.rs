//! Exploration detours
//!
//! When more candidates remain than guesses, and the latest feedback ruled out
//! only one or two letters, a round can be spent on a word made entirely of
//! untried letters. The pick is random among such words, through an injectable
//! [`RandomChoice`] so tests and `--seed` runs are reproducible.

use crate::core::{Feedback, Mark, WordEntry};
use crate::solver::SolverError;
use crate::solver::session::GuessRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Rounds available in one game
pub const MAX_ROUNDS: u8 = 6;

/// Source of the random index used for the exploration pick
pub trait RandomChoice: Send {
    /// Return an index in `0..len`; `len` is never zero
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Thread-local generator seeded from system entropy
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomChoice for ThreadRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded generator for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomChoice for SeededRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Either generator, picked at runtime from the command line
#[derive(Debug, Clone)]
pub enum AnyRandom {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl AnyRandom {
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Thread(ThreadRandom), |s| {
            Self::Seeded(SeededRandom::new(s))
        })
    }
}

impl RandomChoice for AnyRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        match self {
            Self::Thread(r) => r.choose_index(len),
            Self::Seeded(r) => r.choose_index(len),
        }
    }
}

/// Decide whether the next guess should be an exploration word
///
/// `current_round` is the round about to be played (already incremented).
/// Triggers when more candidates remain than rounds left, the latest feedback
/// has one or two Absent marks, and the final round has not been reached.
///
/// # Examples
/// ```
/// use wordle_assist::core::Feedback;
/// use wordle_assist::solver::exploration::should_explore;
///
/// let latest = Feedback::parse("-YGGG").unwrap();
/// assert!(should_explore(10, 3, &latest));
/// assert!(!should_explore(4, 3, &latest));
/// assert!(!should_explore(10, 6, &latest));
/// ```
#[must_use]
pub fn should_explore(candidate_count: usize, current_round: u8, latest: &Feedback) -> bool {
    if current_round >= MAX_ROUNDS {
        return false;
    }
    let rounds_left = usize::from(MAX_ROUNDS.saturating_sub(current_round)) + 1;
    let gray = latest.count(Mark::Absent);
    candidate_count > rounds_left && (1..=2).contains(&gray)
}

/// Every letter guessed so far, uppercased
#[must_use]
pub fn used_letters(history: &[GuessRecord]) -> FxHashSet<u8> {
    history
        .iter()
        .flat_map(|record| record.word.bytes())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Dictionary words of `word_length` with no repeated letter and none of `excluded`
#[must_use]
pub fn exploration_pool<'a>(
    dictionary: &'a [WordEntry],
    word_length: usize,
    excluded: &FxHashSet<u8>,
) -> Vec<&'a WordEntry> {
    dictionary
        .iter()
        .filter(|entry| entry.len() == word_length && !entry.has_repeated_letters())
        .filter(|entry| !entry.headword().bytes().any(|b| excluded.contains(&b)))
        .collect()
}

/// Pick a random exploration word avoiding every letter in `history`
///
/// # Errors
/// Returns `SolverError::NoExplorationCandidate` when no dictionary word
/// qualifies.
pub fn pick_exploration_word<'a, R: RandomChoice + ?Sized>(
    dictionary: &'a [WordEntry],
    word_length: usize,
    history: &[GuessRecord],
    rng: &mut R,
) -> Result<&'a WordEntry, SolverError> {
    let excluded = used_letters(history);
    let pool = exploration_pool(dictionary, word_length, &excluded);
    if pool.is_empty() {
        return Err(SolverError::NoExplorationCandidate);
    }
    let index = rng.choose_index(pool.len()).min(pool.len() - 1);
    Ok(pool[index])
}
