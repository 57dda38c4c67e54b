//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one mark:
//! - 0 = Absent (gray)
//! - 1 = Present (yellow, wrong position)
//! - 2 = Correct (green)
//!
//! Unlike a packed base-3 pattern, `Feedback` keeps one mark per letter so it
//! works for every supported word length.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

use crate::solver::SolverError;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Convert a raw feedback value (0, 1 or 2)
    #[must_use]
    pub const fn from_digit(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts `G`/`2`/🟩 for correct, `Y`/`1`/🟨 for present and
    /// `-`/`_`/`X`/`.`/`0`/⬜/⬛ for absent. Letters are case-insensitive.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '.' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Scoring weight applied to the positional frequency of a letter
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Correct => 1.0,
            Self::Present => 0.6,
            Self::Absent => 0.3,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered feedback marks, one per letter of the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Feedback with every position marked correct
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        Self(vec![Mark::Correct; len])
    }

    /// Build feedback from raw values
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedbackValue` for anything outside 0, 1, 2.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::from_digits(&[2, 1, 0]).unwrap();
    /// assert_eq!(feedback.marks(), &[Mark::Correct, Mark::Present, Mark::Absent]);
    /// assert!(Feedback::from_digits(&[3]).is_err());
    /// ```
    pub fn from_digits(values: &[u8]) -> Result<Self, SolverError> {
        values
            .iter()
            .map(|&v| Mark::from_digit(v).ok_or(SolverError::InvalidFeedbackValue(v)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse feedback from a string like `"GY-G-"`, `"21020"` or `"🟩🟨⬜🟩⬜"`
    ///
    /// Whitespace is ignored. Returns `None` if any character is not a mark.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()
            .filter(|marks| !marks.is_empty())
            .map(Self)
    }

    /// Calculate the feedback `guess` receives when `answer` is the secret word
    ///
    /// Implements Wordle's duplicate-letter rules: exact matches are claimed
    /// first, then misplaced letters are marked present while unclaimed copies
    /// remain in the answer. Comparison is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("crane", "slate");
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index addresses guess, answer and marks together
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess = guess.as_bytes();
        let answer = answer.as_bytes();
        let len = guess.len().min(answer.len());
        let mut marks = vec![Mark::Absent; guess.len()];

        let mut available: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in answer {
            *available.entry(ch.to_ascii_uppercase()).or_insert(0) += 1;
        }

        for i in 0..len {
            let letter = guess[i].to_ascii_uppercase();
            if letter == answer[i].to_ascii_uppercase() {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for i in 0..guess.len() {
            if marks[i] == Mark::Correct {
                continue;
            }
            let letter = guess[i].to_ascii_uppercase();
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Raw 0/1/2 values
    #[must_use]
    pub fn digits(&self) -> Vec<u8> {
        self.0.iter().map(|m| m.value()).collect()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
