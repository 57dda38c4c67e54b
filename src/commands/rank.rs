//! Opening word ranking

use crate::core::WordEntry;
use crate::solver::{PositionFrequencies, SolverError, scoring};

/// One row of an opening-word ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: String,
    pub rank: u32,
    pub score: f64,
}

/// Rank `dictionary` by the first-round score and keep the best `top`
///
/// Ties keep dictionary order, so the first row is the word a fresh session
/// opens with.
///
/// # Errors
///
/// Returns `SolverError::EmptyCandidateSet` when no word has `word_length` letters.
pub fn rank_openers(
    dictionary: &[WordEntry],
    word_length: usize,
    top: usize,
) -> Result<Vec<RankedWord>, SolverError> {
    let words: Vec<WordEntry> = dictionary
        .iter()
        .filter(|entry| entry.len() == word_length)
        .cloned()
        .collect();
    if words.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }

    let table = PositionFrequencies::compute(&words, word_length);
    Ok(scoring::rank(&words, None, &table)?
        .into_iter()
        .take(top)
        .map(|(entry, score)| RankedWord {
            word: entry.headword().to_string(),
            rank: entry.rank(),
            score,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Session, SessionConfig, Step, ThreadRandom};

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .zip(1..)
            .map(|(w, rank)| WordEntry::new(rank, w).unwrap())
            .collect()
    }

    #[test]
    fn best_opener_first() {
        let ranked = rank_openers(&entries(&["crane", "slate", "trace", "crate"]), 5, 10).unwrap();

        assert_eq!(ranked.len(), 4);
        // C .5, R .75, A 1, T .5, E 1
        assert_eq!(ranked[0].word, "CRATE");
        assert_eq!(ranked[0].rank, 4);
        assert!((ranked[0].score - 3.75).abs() < 1e-9);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn top_limits_rows() {
        let ranked = rank_openers(&entries(&["crane", "slate", "trace"]), 5, 2).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn other_lengths_are_ignored() {
        let ranked = rank_openers(&entries(&["cat", "crane", "slate"]), 5, 10).unwrap();
        assert!(ranked.iter().all(|r| r.word.len() == 5));
        assert!(matches!(
            rank_openers(&entries(&["cat"]), 5, 10),
            Err(SolverError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn agrees_with_session_opening() {
        let words = entries(&["speed", "crane", "slate", "trace", "crate", "light"]);
        let ranked = rank_openers(&words, 5, 1).unwrap();

        let mut session = Session::with_dictionary(SessionConfig::default(), words, ThreadRandom);
        let Step::Guess(opening) = session.start().unwrap() else {
            panic!("expected a guess");
        };
        assert_eq!(ranked[0].word, opening.word);
    }
}
