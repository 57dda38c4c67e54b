//! Dictionary providers
//!
//! A provider serves named word lists filtered to one word length. Loading a
//! [`DictionarySelection`] merges several lists in order, keeping the first
//! occurrence of each headword.
//!
//! - [`BuiltinProvider`]: lists compiled into the binary
//! - [`DirectoryProvider`]: `<name>.json` (JSON lines) or `<name>.txt` files
//! - [`CachedProvider`]: memoizes any provider per `(list, length)`

mod background;
mod cache;
mod directory;
mod embedded;

pub use background::{PendingLoad, spawn_load};
pub use cache::CachedProvider;
pub use directory::DirectoryProvider;
pub use embedded::{BUILTIN_LISTS, BuiltinProvider};

use crate::core::WordEntry;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Supported word lengths
pub const WORD_LENGTHS: RangeInclusive<usize> = 3..=8;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("No dictionary named '{0}'")]
    NotFound(String),

    #[error("Failed to read dictionary '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Dictionary load was interrupted")]
    Interrupted,
}

/// Which named lists to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySelection {
    /// Every list the provider offers
    All,
    /// These lists, merged in this order
    Named(Vec<String>),
}

impl DictionarySelection {
    /// Concrete list names for this selection
    #[must_use]
    pub fn resolve(&self, available: &[String]) -> Vec<String> {
        match self {
            Self::All => {
                let mut names = available.to_vec();
                names.sort();
                names
            }
            Self::Named(names) => names.clone(),
        }
    }
}

impl FromStr for DictionarySelection {
    type Err = String;

    /// `all` (any case) or a comma separated list of names
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::DictionarySelection;
    ///
    /// assert_eq!("ALL".parse(), Ok(DictionarySelection::All));
    /// assert_eq!(
    ///     "common, extended".parse(),
    ///     Ok(DictionarySelection::Named(vec!["common".into(), "extended".into()]))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let names: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        if names.is_empty() {
            return Err(format!("No dictionary names in '{s}'"));
        }
        Ok(Self::Named(names))
    }
}

impl fmt::Display for DictionarySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(names) => write!(f, "{}", names.join(",")),
        }
    }
}

/// Source of named word lists
pub trait DictionaryProvider: Send + Sync {
    /// Names of the lists this provider can load
    ///
    /// # Errors
    /// `DictionaryError::Io` when the list source itself cannot be read.
    fn available(&self) -> Result<Vec<String>, DictionaryError>;

    /// Entries of one list whose headword has `word_length` letters, in list order
    ///
    /// # Errors
    /// `DictionaryError::NotFound` for an unknown name, `Io` for unreadable files.
    fn load_list(
        &self,
        name: &str,
        word_length: usize,
    ) -> Result<Arc<Vec<WordEntry>>, DictionaryError>;

    /// Merge every selected list, first occurrence of a headword wins
    ///
    /// # Errors
    /// The first error of any selected list, or of listing the provider for `all`.
    fn load(
        &self,
        selection: &DictionarySelection,
        word_length: usize,
    ) -> Result<Vec<WordEntry>, DictionaryError> {
        let names = match selection {
            DictionarySelection::All => selection.resolve(&self.available()?),
            DictionarySelection::Named(names) => names.clone(),
        };
        let lists = names
            .iter()
            .map(|name| self.load_list(name, word_length))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(merge_lists(lists.iter().map(|list| list.as_slice())))
    }
}

impl<P: DictionaryProvider + ?Sized> DictionaryProvider for Arc<P> {
    fn available(&self) -> Result<Vec<String>, DictionaryError> {
        (**self).available()
    }

    fn load_list(
        &self,
        name: &str,
        word_length: usize,
    ) -> Result<Arc<Vec<WordEntry>>, DictionaryError> {
        (**self).load_list(name, word_length)
    }
}

/// Concatenate lists, dropping repeated headwords after their first occurrence
#[must_use]
pub fn merge_lists<'a>(lists: impl IntoIterator<Item = &'a [WordEntry]>) -> Vec<WordEntry> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut merged = Vec::new();
    for list in lists {
        for entry in list {
            if seen.insert(entry.headword().to_string()) {
                merged.push(entry.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[(u32, &str)]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|&(rank, w)| WordEntry::new(rank, w).unwrap())
            .collect()
    }

    #[test]
    fn merge_keeps_first_occurrence() {
        let a = list(&[(1, "crane"), (2, "slate")]);
        let b = list(&[(10, "SLATE"), (11, "trace")]);
        let merged = merge_lists([a.as_slice(), b.as_slice()]);

        let words: Vec<_> = merged.iter().map(|e| (e.rank(), e.headword())).collect();
        assert_eq!(words, vec![(1, "CRANE"), (2, "SLATE"), (11, "TRACE")]);
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse(), Ok(DictionarySelection::All));
        assert_eq!(" All ".parse(), Ok(DictionarySelection::All));
        assert_eq!(
            "common".parse(),
            Ok(DictionarySelection::Named(vec!["common".to_string()]))
        );
        assert!(" , ".parse::<DictionarySelection>().is_err());
    }

    #[test]
    fn all_resolves_to_sorted_names() {
        let available = vec!["zeta".to_string(), "alpha".to_string()];
        assert_eq!(
            DictionarySelection::All.resolve(&available),
            vec!["alpha", "zeta"]
        );
        let named = DictionarySelection::Named(vec!["zeta".into(), "missing".into()]);
        assert_eq!(named.resolve(&available), vec!["zeta", "missing"]);
    }

    #[test]
    fn selection_display_round_trips() {
        for text in ["all", "common", "common,extended"] {
            let selection: DictionarySelection = text.parse().unwrap();
            assert_eq!(selection.to_string(), text);
        }
    }

    #[test]
    fn word_lengths_cover_three_to_eight() {
        assert!(WORD_LENGTHS.contains(&3));
        assert!(WORD_LENGTHS.contains(&8));
        assert!(!WORD_LENGTHS.contains(&9));
    }
}
