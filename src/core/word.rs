//! Dictionary word representation
//!
//! A `WordEntry` pairs a dictionary rank with a validated, uppercased headword.
//! Entries are immutable once loaded; the engine only ever reads or clones them.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error type for invalid headwords
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
}

/// A single dictionary word with its rank in the source list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    rank: u32,
    headword: String,
}

/// Raw shape of one JSON dictionary line: `{"wordRank": 12, "headWord": "cancel"}`
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(alias = "wordRank", alias = "rank", default)]
    pub word_rank: u32,
    #[serde(alias = "headWord", alias = "word")]
    pub head_word: String,
}

impl WordEntry {
    /// Create a new entry, normalizing the headword to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the headword is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::WordEntry;
    ///
    /// let entry = WordEntry::new(7, "crane").unwrap();
    /// assert_eq!(entry.headword(), "CRANE");
    /// assert_eq!(entry.rank(), 7);
    ///
    /// assert!(WordEntry::new(1, "co-op").is_err());
    /// ```
    pub fn new(rank: u32, headword: impl AsRef<str>) -> Result<Self, WordError> {
        let headword = normalize(headword.as_ref())?;
        Ok(Self { rank, headword })
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// The uppercase headword
    #[inline]
    #[must_use]
    pub fn headword(&self) -> &str {
        &self.headword
    }

    /// Number of letters in the headword
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.headword.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headword.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        has_repeated_letters(&self.headword)
    }
}

impl TryFrom<RawEntry> for WordEntry {
    type Error = WordError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Self::new(raw.word_rank, raw.head_word.trim())
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headword)
    }
}

/// Uppercase a word, rejecting anything that is not made of ASCII letters
///
/// # Errors
/// Returns `WordError` for empty input or non-letter characters.
pub fn normalize(word: &str) -> Result<String, WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters(word.to_string()));
    }
    Ok(word.to_ascii_uppercase())
}

/// Check whether any letter occurs more than once (case-insensitive)
#[must_use]
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    !word.bytes().all(|b| seen.insert(b.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_uppercases() {
        let entry = WordEntry::new(3, "CrAnE").unwrap();
        assert_eq!(entry.headword(), "CRANE");
        assert_eq!(entry.len(), 5);
        assert_eq!(entry.to_string(), "CRANE");
    }

    #[test]
    fn entry_creation_rejects_non_letters() {
        assert_eq!(WordEntry::new(1, ""), Err(WordError::Empty));
        assert!(matches!(
            WordEntry::new(1, "cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(WordEntry::new(1, "two words").is_err());
        assert!(WordEntry::new(1, "café").is_err());
    }

    #[test]
    fn repeated_letters_detected() {
        assert!(has_repeated_letters("SPEED"));
        assert!(has_repeated_letters("Aa"));
        assert!(!has_repeated_letters("CRANE"));
        assert!(WordEntry::new(1, "robot").unwrap().has_repeated_letters());
    }

    #[test]
    fn raw_entry_accepts_dictionary_field_names() {
        let raw: RawEntry = serde_json::from_str(r#"{"wordRank": 42, "headWord": "cancel"}"#).unwrap();
        let entry = WordEntry::try_from(raw).unwrap();
        assert_eq!(entry.rank(), 42);
        assert_eq!(entry.headword(), "CANCEL");
    }

    #[test]
    fn raw_entry_rank_defaults_to_zero() {
        let raw: RawEntry = serde_json::from_str(r#"{"headWord": "slate"}"#).unwrap();
        assert_eq!(WordEntry::try_from(raw).unwrap().rank(), 0);
    }
}
