//! Constraint matching
//!
//! Decides whether a candidate word is consistent with a guess and the feedback
//! it received, using Wordle's duplicate-letter semantics.

use crate::core::{Feedback, Mark, WordEntry};
use crate::solver::SolverError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Check whether `candidate` could be the answer given `guess` and `feedback`
///
/// Comparison is case-insensitive. Returns `false` when the lengths disagree.
///
/// # Algorithm
/// Three passes over the positions, in this order:
/// 1. Correct: the candidate must carry the guessed letter at that position.
///    The position is consumed and the letter's remaining count decremented.
/// 2. Present: the guessed letter must sit at some other unconsumed position of
///    the candidate whose guess letter differs from it. That position is
///    consumed and the count decremented.
/// 3. Absent: the guessed letter must have no copies left over after the first
///    two passes. This rejects candidates that hold more copies of a letter
///    than the feedback allows.
///
/// # Examples
/// ```
/// use wordle_assist::core::Feedback;
/// use wordle_assist::solver::matches;
///
/// let feedback = Feedback::calculate("speed", "erase");
/// assert!(matches("erase", "speed", &feedback));
/// assert!(!matches("spear", "speed", &feedback));
/// ```
#[must_use]
#[allow(clippy::needless_range_loop)] // Passes index word, guess, marks and used together
pub fn matches(candidate: &str, guess: &str, feedback: &Feedback) -> bool {
    let word = candidate.as_bytes();
    let guess = guess.as_bytes();
    let marks = feedback.marks();
    let len = guess.len();

    if word.len() != len || marks.len() != len {
        return false;
    }

    let word: Vec<u8> = word.iter().map(u8::to_ascii_uppercase).collect();
    let guess: Vec<u8> = guess.iter().map(u8::to_ascii_uppercase).collect();

    let mut remaining: FxHashMap<u8, i32> = FxHashMap::default();
    for &ch in &word {
        *remaining.entry(ch).or_insert(0) += 1;
    }
    let mut used = vec![false; len];

    for i in 0..len {
        if marks[i] == Mark::Correct {
            if word[i] != guess[i] {
                return false;
            }
            used[i] = true;
            *remaining.entry(guess[i]).or_insert(0) -= 1;
        }
    }

    for i in 0..len {
        if marks[i] != Mark::Present {
            continue;
        }
        let ch = guess[i];
        let slot = (0..len).find(|&j| !used[j] && word[j] == ch && guess[j] != ch);
        match slot {
            Some(j) => {
                used[j] = true;
                *remaining.entry(ch).or_insert(0) -= 1;
            }
            None => return false,
        }
    }

    (0..len)
        .filter(|&i| marks[i] == Mark::Absent)
        .all(|i| remaining.get(&guess[i]).copied().unwrap_or(0) <= 0)
}

/// Keep the candidates consistent with `guess` and `feedback`, in their original order
///
/// # Errors
/// Returns `SolverError::InvalidFeedbackShape` if the feedback length does not
/// match the guess length.
pub fn filter(
    candidates: &[WordEntry],
    guess: &str,
    feedback: &Feedback,
) -> Result<Vec<WordEntry>, SolverError> {
    if feedback.len() != guess.len() {
        return Err(SolverError::InvalidFeedbackShape {
            expected: guess.len(),
            actual: feedback.len(),
        });
    }

    Ok(candidates
        .par_iter()
        .filter(|entry| matches(entry.headword(), guess, feedback))
        .cloned()
        .collect())
}
