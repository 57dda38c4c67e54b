//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/lists/`.

use super::{DictionaryError, DictionaryProvider};
use crate::core::WordEntry;
use std::sync::Arc;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/builtin.rs"));

/// Provider over [`BUILTIN_LISTS`]; ranks follow list order, starting at 1
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinProvider;

impl DictionaryProvider for BuiltinProvider {
    fn available(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(BUILTIN_LISTS
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect())
    }

    fn load_list(
        &self,
        name: &str,
        word_length: usize,
    ) -> Result<Arc<Vec<WordEntry>>, DictionaryError> {
        let (_, words) = BUILTIN_LISTS
            .iter()
            .find(|(list, _)| *list == name)
            .ok_or_else(|| DictionaryError::NotFound(name.to_string()))?;

        let entries = (1u32..)
            .zip(words.iter())
            .filter(|(_, word)| word.len() == word_length)
            .filter_map(|(rank, word)| WordEntry::new(rank, word).ok())
            .collect();
        Ok(Arc::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DictionarySelection;

    #[test]
    fn builtin_lists_are_present() {
        let names = BuiltinProvider.available().unwrap();
        assert!(names.contains(&"common".to_string()));
        assert!(names.contains(&"extended".to_string()));
    }

    #[test]
    fn builtin_words_are_lowercase_letters() {
        for (name, words) in BUILTIN_LISTS {
            for word in *words {
                assert!(
                    word.bytes().all(|b| b.is_ascii_lowercase()),
                    "'{word}' in {name} is not lowercase ASCII"
                );
            }
        }
    }

    #[test]
    fn load_filters_by_length() {
        for length in 3..=8 {
            let words = BuiltinProvider.load_list("common", length).unwrap();
            assert!(!words.is_empty(), "no {length}-letter common words");
            assert!(words.iter().all(|w| w.len() == length));
        }
    }

    #[test]
    fn load_all_merges_without_duplicates() {
        let merged = BuiltinProvider.load(&DictionarySelection::All, 5).unwrap();
        let mut seen = std::collections::HashSet::new();
        assert!(merged.iter().all(|e| seen.insert(e.headword().to_string())));

        let common = BuiltinProvider.load_list("common", 5).unwrap();
        assert!(merged.len() >= common.len());
        assert_eq!(&merged[..common.len()], common.as_slice());
    }

    #[test]
    fn unknown_list_is_not_found() {
        assert!(matches!(
            BuiltinProvider.load_list("klingon", 5),
            Err(DictionaryError::NotFound(name)) if name == "klingon"
        ));
    }
}
