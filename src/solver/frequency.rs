//! Positional letter frequencies
//!
//! For each letter position, the fraction of candidates carrying each letter
//! there. The table is rebuilt from the current candidates every round.

use crate::core::WordEntry;
use log::{debug, log_enabled};
use rustc_hash::FxHashMap;

/// Per-position letter frequency distribution over a candidate set
///
/// Frequencies are relative: each value is in `[0, 1]` and the values of one
/// position sum to 1. An empty table (no positions) results from an empty
/// candidate set and must not be scored against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionFrequencies {
    positions: Vec<FxHashMap<u8, f64>>,
}

impl PositionFrequencies {
    /// Count letters per position across `candidates` and normalize by the
    /// candidate count
    ///
    /// Candidates are expected to be uppercase and exactly `word_length` long;
    /// entries of any other length are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::WordEntry;
    /// use wordle_assist::solver::PositionFrequencies;
    ///
    /// let words = vec![
    ///     WordEntry::new(1, "crane").unwrap(),
    ///     WordEntry::new(2, "crate").unwrap(),
    /// ];
    /// let table = PositionFrequencies::compute(&words, 5);
    /// assert_eq!(table.frequency(0, b'C'), 1.0);
    /// assert_eq!(table.frequency(3, b'N'), 0.5);
    /// assert_eq!(table.frequency(3, b'Z'), 0.0);
    /// ```
    #[must_use]
    pub fn compute(candidates: &[WordEntry], word_length: usize) -> Self {
        let words: Vec<&[u8]> = candidates
            .iter()
            .map(|entry| entry.headword().as_bytes())
            .filter(|word| word.len() == word_length)
            .collect();

        if words.is_empty() {
            return Self::default();
        }

        let mut counts: Vec<FxHashMap<u8, u32>> = vec![FxHashMap::default(); word_length];
        for word in &words {
            for (position, &letter) in word.iter().enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
            }
        }

        let total = f64::from(u32::try_from(words.len()).unwrap_or(u32::MAX));
        let positions = counts
            .into_iter()
            .map(|letters| {
                letters
                    .into_iter()
                    .map(|(letter, count)| (letter, f64::from(count) / total))
                    .collect()
            })
            .collect();

        let table = Self { positions };
        table.log_summary();
        table
    }

    /// Number of positions covered (0 for an empty table)
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Relative frequency of `letter` at `position`, 0.0 when unseen
    #[inline]
    #[must_use]
    pub fn frequency(&self, position: usize, letter: u8) -> f64 {
        self.positions
            .get(position)
            .and_then(|letters| letters.get(&letter.to_ascii_uppercase()))
            .copied()
            .unwrap_or(0.0)
    }

    /// The `n` most frequent letters at `position`, most frequent first
    ///
    /// Equal frequencies are ordered alphabetically.
    #[must_use]
    pub fn top_letters(&self, position: usize, n: usize) -> Vec<(char, f64)> {
        let Some(letters) = self.positions.get(position) else {
            return Vec::new();
        };
        let mut sorted: Vec<(char, f64)> = letters
            .iter()
            .map(|(&letter, &freq)| (char::from(letter), freq))
            .collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        sorted.truncate(n);
        sorted
    }

    fn log_summary(&self) {
        if !log_enabled!(log::Level::Debug) {
            return;
        }
        for position in 0..self.word_length() {
            let summary = self
                .top_letters(position, 5)
                .iter()
                .map(|(letter, freq)| format!("{letter}:{freq:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            debug!("Position {position}: {summary}");
        }
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

    #[test]
    fn empty_candidates_give_empty_table() {
        let table = PositionFrequencies::compute(&[], 5);
        assert!(table.is_empty());
        assert_eq!(table.word_length(), 0);
        assert_eq!(table.frequency(0, b'A'), 0.0);
    }

    #[test]
    fn frequencies_are_fractions_of_candidates() {
        let words = entries(&["crane", "slate", "trace", "crate"]);
        let table = PositionFrequencies::compute(&words, 5);

        assert_eq!(table.word_length(), 5);
        assert!((table.frequency(0, b'C') - 0.5).abs() < 1e-12);
        assert!((table.frequency(0, b'S') - 0.25).abs() < 1e-12);
        assert!((table.frequency(4, b'E') - 1.0).abs() < 1e-12);
        assert!((table.frequency(2, b'A') - 1.0).abs() < 1e-12);
    }

    #[test]
    fn each_position_sums_to_one() {
        let words = entries(&["speed", "erase", "robot", "floor", "llama"]);
        let table = PositionFrequencies::compute(&words, 5);

        for position in 0..5 {
            let sum: f64 = (b'A'..=b'Z').map(|l| table.frequency(position, l)).sum();
            assert!((sum - 1.0).abs() < 1e-9, "position {position} sums to {sum}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = PositionFrequencies::compute(&entries(&["cat"]), 3);
        assert_eq!(table.frequency(0, b'c'), table.frequency(0, b'C'));
    }

    #[test]
    fn wrong_length_entries_are_ignored() {
        let words = entries(&["cat", "crane", "dog"]);
        let table = PositionFrequencies::compute(&words, 3);
        assert!((table.frequency(0, b'C') - 0.5).abs() < 1e-12);
        assert_eq!(table.frequency(0, b'R'), 0.0);
    }

    #[test]
    fn computation_is_deterministic() {
        let words = entries(&["crane", "slate", "trace", "crate", "grate"]);
        let a = PositionFrequencies::compute(&words, 5);
        let b = PositionFrequencies::compute(&words, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn top_letters_sorted() {
        let words = entries(&["crane", "crate", "slate"]);
        let table = PositionFrequencies::compute(&words, 5);
        let top = table.top_letters(0, 2);
        assert_eq!(top[0].0, 'C');
        assert_eq!(top[1].0, 'S');
        assert!(table.top_letters(9, 3).is_empty());
    }
}
