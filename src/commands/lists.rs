//! Dictionary listing

use crate::wordlists::{DictionaryError, DictionaryProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub name: String,
    /// Words of the requested length
    pub words: usize,
}

/// Summarize every list `provider` offers at `word_length`
///
/// # Errors
///
/// Returns an error when the provider cannot be listed or a list fails to load.
pub fn list_dictionaries(
    provider: &dyn DictionaryProvider,
    word_length: usize,
) -> Result<Vec<ListSummary>, DictionaryError> {
    provider
        .available()?
        .into_iter()
        .map(|name| {
            let words = provider.load_list(&name, word_length)?.len();
            Ok(ListSummary { name, words })
        })
        .collect()
}
