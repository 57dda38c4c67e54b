//! Word solving command
//!
//! Plays a whole session against a known answer, computing each round's
//! feedback automatically, and returns the path taken.

use crate::core::{Feedback, normalize};
use crate::solver::{GuessKind, LossReason, RandomChoice, Session, SolverError, Step};

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub kind: GuessKind,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// How a simulated session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The session settled on this word
    Solved { word: String, rounds: u8 },
    Failed { reason: LossReason, remaining: Vec<String> },
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
    pub outcome: SolveOutcome,
}

impl SolveResult {
    /// Whether the session settled on the target itself
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(&self.outcome, SolveOutcome::Solved { word, .. } if *word == self.target)
    }
}

/// Solve `target` from a fresh game on `session`
///
/// The session is reset first; the target does not have to be in the
/// dictionary, but the session can only win on words it knows.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not made of letters or has the wrong length
/// - The session has no dictionary loaded
pub fn solve_word<R: RandomChoice>(
    session: &mut Session<R>,
    target: &str,
) -> Result<SolveResult, SolverError> {
    let target = normalize(target.trim())?;
    let expected = session.config().word_length();
    if target.len() != expected {
        return Err(SolverError::LengthMismatch {
            expected,
            actual: target.len(),
            word: target,
        });
    }

    session.reset();
    let mut step = session.start()?;
    let mut guesses = Vec::new();

    let outcome = loop {
        match step {
            Step::Guess(suggestion) => {
                let feedback = Feedback::calculate(&suggestion.word, &target);
                let candidates_before = session.candidates().len();
                step = session.submit_feedback(&feedback)?;
                guesses.push(GuessStep {
                    word: suggestion.word,
                    kind: suggestion.kind,
                    feedback,
                    candidates_before,
                    candidates_after: session.candidates().len(),
                });
            }
            Step::Won { word, rounds, .. } => break SolveOutcome::Solved { word, rounds },
            Step::Lost {
                reason, remaining, ..
            } => break SolveOutcome::Failed { reason, remaining },
        }
    };

    Ok(SolveResult {
        target,
        guesses,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::solver::{SeededRandom, SessionConfig};
    use crate::wordlists::{BuiltinProvider, DictionaryProvider, DictionarySelection};

    fn builtin_session(seed: u64) -> Session<SeededRandom> {
        let words = BuiltinProvider
            .load(&DictionarySelection::All, 5)
            .unwrap();
        Session::with_dictionary(SessionConfig::default(), words, SeededRandom::new(seed))
    }

    #[test]
    fn dictionary_words_are_never_eliminated() {
        let mut session = builtin_session(7);
        for target in ["crane", "house", "water", "light"] {
            let result = solve_word(&mut session, target).unwrap();
            assert!(!result.guesses.is_empty());
            assert!(result.guesses.len() <= 6);
            match &result.outcome {
                SolveOutcome::Solved { word, .. } => assert_eq!(*word, result.target),
                SolveOutcome::Failed { reason, remaining } => {
                    assert_eq!(*reason, LossReason::OutOfRounds);
                    assert!(remaining.contains(&result.target));
                }
            }
        }
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let mut session = builtin_session(11);
        let result = solve_word(&mut session, "light").unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn unique_candidate_is_solved() {
        let words: Vec<WordEntry> = ["crane", "slate", "trace"]
            .iter()
            .map(|w| WordEntry::new(0, w).unwrap())
            .collect();
        let mut session =
            Session::with_dictionary(SessionConfig::default(), words, SeededRandom::new(1));
        let result = solve_word(&mut session, "slate").unwrap();

        assert!(result.success());
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].word, "CRANE");
    }

    #[test]
    fn unknown_target_is_exhausted() {
        let words: Vec<WordEntry> = ["crane", "slate", "trace"]
            .iter()
            .map(|w| WordEntry::new(0, w).unwrap())
            .collect();
        let mut session =
            Session::with_dictionary(SessionConfig::default(), words, SeededRandom::new(1));
        let result = solve_word(&mut session, "fuzzy").unwrap();

        assert!(!result.success());
        assert!(matches!(
            result.outcome,
            SolveOutcome::Failed {
                reason: LossReason::Exhausted,
                ..
            }
        ));
    }

    #[test]
    fn invalid_target_returns_error() {
        let mut session = builtin_session(3);
        assert!(matches!(
            solve_word(&mut session, "cat"),
            Err(SolverError::LengthMismatch { .. })
        ));
        assert!(matches!(
            solve_word(&mut session, "12345"),
            Err(SolverError::InvalidWord(_))
        ));
    }
}
