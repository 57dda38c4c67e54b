//! Memoizing provider wrapper

use super::{DictionaryError, DictionaryProvider};
use crate::core::WordEntry;
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};

type CacheKey = (String, usize);

/// Serves repeated `(list, length)` loads from memory
///
/// Only successful loads are cached; a failed list is retried on the next call.
pub struct CachedProvider<P> {
    inner: P,
    cache: Mutex<FxHashMap<CacheKey, Arc<Vec<WordEntry>>>>,
}

impl<P: DictionaryProvider> CachedProvider<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of cached `(list, length)` pairs
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: DictionaryProvider> DictionaryProvider for CachedProvider<P> {
    fn available(&self) -> Result<Vec<String>, DictionaryError> {
        self.inner.available()
    }

    fn load_list(
        &self,
        name: &str,
        word_length: usize,
    ) -> Result<Arc<Vec<WordEntry>>, DictionaryError> {
        let key = (name.to_string(), word_length);
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            debug!("Dictionary cache hit: {name} ({word_length} letters)");
            return Ok(Arc::clone(hit));
        }

        // Loaded outside the lock; two racing loads of one key both succeed
        // and the later insert wins
        let words = self.inner.load_list(name, word_length)?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&words));
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DictionarySelection;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often each list is actually read
    struct Counting {
        loads: AtomicUsize,
    }

    impl DictionaryProvider for Counting {
        fn available(&self) -> Result<Vec<String>, DictionaryError> {
            Ok(vec!["one".to_string(), "two".to_string()])
        }

        fn load_list(
            &self,
            name: &str,
            word_length: usize,
        ) -> Result<Arc<Vec<WordEntry>>, DictionaryError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            match name {
                "one" => Ok(Arc::new(vec![WordEntry::new(1, "a".repeat(word_length)).unwrap()])),
                "two" => Ok(Arc::new(vec![WordEntry::new(1, "b".repeat(word_length)).unwrap()])),
                _ => Err(DictionaryError::NotFound(name.to_string())),
            }
        }
    }

    fn counting() -> CachedProvider<Counting> {
        CachedProvider::new(Counting {
            loads: AtomicUsize::new(0),
        })
    }

    #[test]
    fn repeated_loads_hit_the_cache() {
        let provider = counting();
        let first = provider.load_list("one", 5).unwrap();
        let second = provider.load_list("one", 5).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.inner().loads.load(Ordering::SeqCst), 1);
        assert_eq!(provider.cached(), 1);
    }

    #[test]
    fn lengths_are_cached_separately() {
        let provider = counting();
        provider.load_list("one", 5).unwrap();
        provider.load_list("one", 6).unwrap();
        assert_eq!(provider.cached(), 2);
        assert_eq!(provider.inner().loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let provider = counting();
        assert!(provider.load_list("zzz", 5).is_err());
        assert!(provider.load_list("zzz", 5).is_err());
        assert_eq!(provider.cached(), 0);
        assert_eq!(provider.inner().loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn merged_load_goes_through_the_cache() {
        let provider = counting();
        let all = provider.load(&DictionarySelection::All, 4).unwrap();
        assert_eq!(all.len(), 2);
        provider.load(&DictionarySelection::All, 4).unwrap();
        assert_eq!(provider.inner().loads.load(Ordering::SeqCst), 2);
    }
}
