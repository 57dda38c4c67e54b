//! Dictionary loading off the calling thread
//!
//! The load runs on its own thread and hands back the ticket it was started
//! with, so the session can tell whether the result is still wanted.

use super::{DictionaryError, DictionaryProvider};
use crate::core::WordEntry;
use crate::solver::LoadTicket;
use log::debug;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A dictionary load in flight
pub struct PendingLoad {
    ticket: LoadTicket,
    handle: JoinHandle<Result<Vec<WordEntry>, DictionaryError>>,
}

impl PendingLoad {
    #[must_use]
    pub const fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the load completes
    ///
    /// A panicking loader is reported as `DictionaryError::Interrupted`.
    #[must_use]
    pub fn wait(self) -> (LoadTicket, Result<Vec<WordEntry>, DictionaryError>) {
        let result = self
            .handle
            .join()
            .unwrap_or(Err(DictionaryError::Interrupted));
        (self.ticket, result)
    }
}

/// Start loading the ticket's dictionaries on a background thread
#[must_use]
pub fn spawn_load(provider: Arc<dyn DictionaryProvider>, ticket: LoadTicket) -> PendingLoad {
    let selection = ticket.config().dictionaries().clone();
    let word_length = ticket.config().word_length();
    let generation = ticket.generation();

    let handle = thread::spawn(move || {
        debug!("Loading '{selection}' ({word_length} letters) for generation {generation}");
        provider.load(&selection, word_length)
    });

    PendingLoad { ticket, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{LoadStatus, Session, SessionConfig, ThreadRandom};
    use crate::wordlists::{BuiltinProvider, DictionarySelection};

    fn config(length: usize) -> SessionConfig {
        SessionConfig::new(length, DictionarySelection::Named(vec!["common".into()])).unwrap()
    }

    #[test]
    fn background_load_installs() {
        let mut session = Session::new(config(5), ThreadRandom);
        let ticket = session.begin_load();
        let pending = spawn_load(Arc::new(BuiltinProvider), ticket);
        while !pending.is_finished() {
            std::thread::yield_now();
        }

        let (ticket, result) = pending.wait();
        let status = session.install(&ticket, result).unwrap();
        assert!(matches!(status, LoadStatus::Installed(n) if n > 0));
        assert!(session.candidates().iter().all(|w| w.len() == 5));
    }

    #[test]
    fn superseded_load_does_not_clobber_newer_session() {
        let provider: Arc<dyn DictionaryProvider> = Arc::new(BuiltinProvider);
        let mut session = Session::new(config(5), ThreadRandom);

        let stale = spawn_load(Arc::clone(&provider), session.begin_load());
        let fresh = spawn_load(provider, session.configure(config(4)));

        let (ticket, result) = fresh.wait();
        assert!(matches!(
            session.install(&ticket, result),
            Ok(LoadStatus::Installed(_))
        ));

        let (ticket, result) = stale.wait();
        assert_eq!(
            session.install(&ticket, result).unwrap(),
            LoadStatus::Discarded
        );
        assert!(session.candidates().iter().all(|w| w.len() == 4));
    }
}
