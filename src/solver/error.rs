//! Engine error kinds

use crate::core::WordError;
use crate::wordlists::DictionaryError;
use thiserror::Error;

/// Errors reported by the matcher, scorer and round controller
///
/// None of these leave a session half-updated: an operation that fails has not
/// changed any session state.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Feedback has {actual} marks but the guess has {expected} letters")]
    InvalidFeedbackShape { expected: usize, actual: usize },

    #[error("Feedback value {0} is not one of 0 (absent), 1 (present), 2 (correct)")]
    InvalidFeedbackValue(u8),

    #[error("Word '{word}' has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("No candidate words to choose from")]
    EmptyCandidateSet,

    #[error("No dictionary word avoids every letter guessed so far")]
    NoExplorationCandidate,

    #[error("Dictionary unavailable: {0}")]
    DictionaryUnavailable(#[from] DictionaryError),

    #[error("Word length {0} is not supported (choose 3 to 8)")]
    UnsupportedWordLength(usize),

    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("No session in progress")]
    NotStarted,

    #[error("The session is over; reset to play again")]
    SessionOver,
}
