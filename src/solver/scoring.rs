//! Candidate scoring
//!
//! Two modes share one frequency table:
//! - plain: sum of positional frequencies, used for the opening guess
//! - feedback-weighted: frequencies weighted by the previous feedback, plus a
//!   bonus for moving a present letter to a new, likely position

use super::frequency::PositionFrequencies;
use crate::core::{Feedback, Mark, WordEntry};
use crate::solver::SolverError;
use log::{debug, log_enabled};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Subtracted from the plain score of a word with any repeated letter
pub const REPEATED_LETTER_PENALTY: f64 = 5.0;

/// Multiplier for the frequency of a present letter at another position
pub const CROSS_POSITION_WEIGHT: f64 = 0.4;

fn check_length(word: &str, table: &PositionFrequencies) -> Result<(), SolverError> {
    if table.is_empty() || word.len() != table.word_length() {
        return Err(SolverError::LengthMismatch {
            word: word.to_string(),
            expected: table.word_length(),
            actual: word.len(),
        });
    }
    Ok(())
}

/// Opening-round score: `Σ freq[i][word[i]]`, minus the repeated-letter penalty
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the word length differs from the
/// table's, or the table is empty.
///
/// # Examples
/// ```
/// use wordle_assist::core::WordEntry;
/// use wordle_assist::solver::{PositionFrequencies, scoring};
///
/// let words = vec![
///     WordEntry::new(1, "crane").unwrap(),
///     WordEntry::new(2, "crate").unwrap(),
/// ];
/// let table = PositionFrequencies::compute(&words, 5);
/// let score = scoring::plain_score("CRANE", &table).unwrap();
/// assert!((score - 4.5).abs() < 1e-9);
/// ```
pub fn plain_score(word: &str, table: &PositionFrequencies) -> Result<f64, SolverError> {
    check_length(word, table)?;

    let letters = word.as_bytes();
    let mut score: f64 = letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| table.frequency(i, letter))
        .sum();

    if crate::core::has_repeated_letters(word) {
        score -= REPEATED_LETTER_PENALTY;
    }
    Ok(score)
}

/// Score a word against the previous round's feedback
///
/// Each position contributes `freq[i][word[i]] * weight(feedback[i])`. For every
/// distinct letter the feedback marks Present in `word`, each other non-Absent
/// position `j` adds `freq[j][letter] * 0.4`, except positions already marked
/// Correct for that same letter.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the word does not fit the table and
/// `SolverError::InvalidFeedbackShape` if the feedback does not fit the word.
pub fn weighted_score(
    word: &str,
    feedback: &Feedback,
    table: &PositionFrequencies,
) -> Result<f64, SolverError> {
    check_length(word, table)?;
    if feedback.len() != word.len() {
        return Err(SolverError::InvalidFeedbackShape {
            expected: word.len(),
            actual: feedback.len(),
        });
    }

    let letters: Vec<u8> = word.bytes().map(|b| b.to_ascii_uppercase()).collect();
    let marks = feedback.marks();

    let mut score: f64 = letters
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(i, (&letter, mark))| table.frequency(i, letter) * mark.weight())
        .sum();

    // Present letters in first-appearance order, with every position they hold
    let mut present: Vec<(u8, Vec<usize>)> = Vec::new();
    for (i, (&letter, &mark)) in letters.iter().zip(marks).enumerate() {
        if mark != Mark::Present {
            continue;
        }
        match present.iter_mut().find(|(l, _)| *l == letter) {
            Some((_, positions)) => positions.push(i),
            None => present.push((letter, vec![i])),
        }
    }

    for (letter, positions) in &present {
        for (j, &mark) in marks.iter().enumerate() {
            if mark == Mark::Absent
                || positions.contains(&j)
                || (mark == Mark::Correct && letters[j] == *letter)
            {
                continue;
            }
            score += table.frequency(j, *letter) * CROSS_POSITION_WEIGHT;
        }
    }

    Ok(score)
}

/// Plain score without feedback, weighted score with it
///
/// # Errors
/// See [`plain_score`] and [`weighted_score`].
pub fn score(
    word: &str,
    feedback: Option<&Feedback>,
    table: &PositionFrequencies,
) -> Result<f64, SolverError> {
    match feedback {
        Some(feedback) => weighted_score(word, feedback, table),
        None => plain_score(word, table),
    }
}

fn score_all(
    candidates: &[WordEntry],
    feedback: Option<&Feedback>,
    table: &PositionFrequencies,
) -> Result<Vec<f64>, SolverError> {
    candidates
        .par_iter()
        .map(|entry| score(entry.headword(), feedback, table))
        .collect()
}

/// Highest-scoring candidate, the earliest one on ties
///
/// Returns `Ok(None)` for an empty candidate list.
///
/// # Errors
/// Propagates the first scoring error.
pub fn best_candidate<'a>(
    candidates: &'a [WordEntry],
    feedback: Option<&Feedback>,
    table: &PositionFrequencies,
) -> Result<Option<(&'a WordEntry, f64)>, SolverError> {
    let scores = score_all(candidates, feedback, table)?;

    let mut best: Option<(&WordEntry, f64)> = None;
    for (entry, &value) in candidates.iter().zip(&scores) {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((entry, value)),
        }
    }

    if log_enabled!(log::Level::Debug) {
        log_top(candidates, &scores);
    }

    Ok(best)
}

/// Candidates sorted by descending score; equal scores keep their input order
///
/// # Errors
/// Propagates the first scoring error.
pub fn rank<'a>(
    candidates: &'a [WordEntry],
    feedback: Option<&Feedback>,
    table: &PositionFrequencies,
) -> Result<Vec<(&'a WordEntry, f64)>, SolverError> {
    let scores = score_all(candidates, feedback, table)?;
    let mut ranked: Vec<(&WordEntry, f64)> = candidates.iter().zip(scores).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    Ok(ranked)
}

fn log_top(candidates: &[WordEntry], scores: &[f64]) {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    for &i in order.iter().take(10) {
        debug!("{} -> {:.2}", candidates[i].headword(), scores[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(0, w).unwrap())
            .collect()
    }

    fn fb(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn plain_score_sums_frequencies() {
        let words = entries(&["crane", "slate", "trace", "crate"]);
        let table = PositionFrequencies::compute(&words, 5);
        // C .5, R .75, A 1, N .25, E 1
        assert!(close(plain_score("CRANE", &table).unwrap(), 3.5));
    }

    #[test]
    fn plain_score_penalizes_repeated_letters() {
        let words = entries(&["speed", "spend"]);
        let table = PositionFrequencies::compute(&words, 5);
        // S 1, P 1, E 1, E .5, D 1 minus the penalty
        let expected = 4.5 - REPEATED_LETTER_PENALTY;
        assert!(close(plain_score("SPEED", &table).unwrap(), expected));
        assert!(close(plain_score("SPEND", &table).unwrap(), 4.5));
    }

    #[test]
    fn weighted_score_applies_mark_weights() {
        let words = entries(&["abcde"]);
        let table = PositionFrequencies::compute(&words, 5);
        // No present letters: 1.0 + 0.3 + 1.0 + 0.3 + 0.3
        let value = weighted_score("ABCDE", &fb("G-G--"), &table).unwrap();
        assert!(close(value, 2.9));
    }

    #[test]
    fn weighted_score_adds_cross_position_bonus() {
        let words = entries(&["abcde", "bacde"]);
        let table = PositionFrequencies::compute(&words, 5);
        // Base: A@0 .5*.6 + B@1 .5*1 + C,D,E 1*.3 each = 0.3 + 0.5 + 0.9
        // Bonus for A: position 1 (correct, letter B) gives freq[1][A] .5 * .4;
        // positions 2..4 are absent, position 0 is A's own present slot.
        let value = weighted_score("ABCDE", &fb("YG---"), &table).unwrap();
        assert!(close(value, 1.7 + 0.2));
    }

    #[test]
    fn bonus_skips_correct_slot_of_same_letter() {
        let words = entries(&["aabcd", "xaabc"]);
        let table = PositionFrequencies::compute(&words, 5);
        // A present at 0, A correct at 1: position 1 gets no bonus for A
        let with_skip = weighted_score("AABCD", &fb("YG---"), &table).unwrap();
        let base = table.frequency(0, b'A') * 0.6
            + table.frequency(1, b'A') * 1.0
            + (table.frequency(2, b'B') + table.frequency(3, b'C') + table.frequency(4, b'D'))
                * 0.3;
        assert!(close(with_skip, base));
    }

    #[test]
    fn bonus_for_letter_present_twice() {
        let words = entries(&["abaxy", "aabxy"]);
        let table = PositionFrequencies::compute(&words, 5);
        // Base: A@0 1*.6 + B@1 .5*1 + A@2 .5*.6 + X@3 1*1 + Y@4 1*.3 = 2.7
        // A holds positions 0 and 2, so only position 1 earns its bonus, once:
        // freq[1][A] .5 * .4. Position 3 has no A, position 4 is absent.
        let value = weighted_score("ABAXY", &fb("YGYG-"), &table).unwrap();
        assert!(close(value, 2.7 + 0.2));
    }

    #[test]
    fn score_rejects_mismatched_inputs() {
        let table = PositionFrequencies::compute(&entries(&["crane"]), 5);
        assert!(matches!(
            plain_score("CAT", &table),
            Err(SolverError::LengthMismatch { expected: 5, actual: 3, .. })
        ));
        assert!(matches!(
            weighted_score("CRANE", &fb("GG"), &table),
            Err(SolverError::InvalidFeedbackShape { .. })
        ));

        let empty = PositionFrequencies::default();
        assert!(plain_score("CRANE", &empty).is_err());
    }

    #[test]
    fn scoring_is_deterministic() {
        let words = entries(&["crane", "slate", "trace", "crate", "grate", "irate"]);
        let table = PositionFrequencies::compute(&words, 5);
        let feedback = fb("-YG-G");
        for word in &words {
            let a = score(word.headword(), Some(&feedback), &table).unwrap();
            let b = score(word.headword(), Some(&feedback), &table).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn best_candidate_prefers_first_on_ties() {
        // Mirror images score identically under the plain scorer
        let words = entries(&["ab", "ba"]);
        let table = PositionFrequencies::compute(&words, 2);
        let (best, _) = best_candidate(&words, None, &table).unwrap().unwrap();
        assert_eq!(best.headword(), "AB");

        let reversed = entries(&["ba", "ab"]);
        let (best, _) = best_candidate(&reversed, None, &table).unwrap().unwrap();
        assert_eq!(best.headword(), "BA");
    }

    #[test]
    fn best_candidate_of_nothing_is_none() {
        let table = PositionFrequencies::compute(&entries(&["crane"]), 5);
        assert!(best_candidate(&[], None, &table).unwrap().is_none());
    }

    #[test]
    fn rank_is_descending_and_stable() {
        let words = entries(&["crane", "slate", "trace", "crate", "speed"]);
        let table = PositionFrequencies::compute(&words, 5);
        let ranked = rank(&words, None, &table).unwrap();

        assert_eq!(ranked.len(), words.len());
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        // SPEED carries the repeated-letter penalty
        assert_eq!(ranked.last().unwrap().0.headword(), "SPEED");

        let (best, top) = best_candidate(&words, None, &table).unwrap().unwrap();
        assert_eq!(best, ranked[0].0);
        assert_eq!(top.to_bits(), ranked[0].1.to_bits());
    }
}
