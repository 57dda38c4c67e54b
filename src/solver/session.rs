//! Round controller
//!
//! A `Session` owns one game: the loaded dictionary, the shrinking candidate
//! set, the guess history and the exploration checkpoint. Each operation
//! returns a [`Step`] describing what the caller should show next.
//!
//! ```text
//! NotStarted -> FirstRound -> NormalRound <-> ExplorationRound -> Won | Lost
//!      ^                                                            |
//!      +---------------------------- reset -------------------------+
//! ```
//!
//! Operations compute the whole transition on local values and commit only on
//! success, so a failed call leaves the session exactly as it was. A session
//! is not internally synchronized; callers serialize access to it.

use super::exploration::{self, MAX_ROUNDS, RandomChoice, ThreadRandom};
use super::frequency::PositionFrequencies;
use super::{matcher, scoring};
use crate::core::{Feedback, WordEntry, normalize};
use crate::solver::SolverError;
use crate::wordlists::{DictionaryError, DictionaryProvider, DictionarySelection, WORD_LENGTHS};
use log::{debug, info, warn};
use std::sync::Arc;

/// One submitted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: String,
    pub feedback: Feedback,
}

/// Word length and dictionary choice for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    word_length: usize,
    dictionaries: DictionarySelection,
}

impl SessionConfig {
    /// # Errors
    /// Returns `SolverError::UnsupportedWordLength` outside 3..=8.
    pub fn new(word_length: usize, dictionaries: DictionarySelection) -> Result<Self, SolverError> {
        if !WORD_LENGTHS.contains(&word_length) {
            return Err(SolverError::UnsupportedWordLength(word_length));
        }
        Ok(Self {
            word_length,
            dictionaries,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn dictionaries(&self) -> &DictionarySelection {
        &self.dictionaries
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            dictionaries: DictionarySelection::All,
        }
    }
}

/// Observable session fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// 1..=6 while playing, 0 before the first guess
    pub current_round: u8,
    pub word_length: usize,
    pub dictionaries: DictionarySelection,
    pub is_active: bool,
    /// Set for exactly the round following an exploration guess
    pub exploration_pending: bool,
}

impl SessionState {
    fn initial(config: &SessionConfig) -> Self {
        Self {
            current_round: 0,
            word_length: config.word_length,
            dictionaries: config.dictionaries.clone(),
            is_active: false,
            exploration_pending: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    FirstRound,
    NormalRound,
    ExplorationRound,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// No candidate is consistent with the feedback
    Exhausted,
    /// The last round ended without a win
    OutOfRounds,
}

/// How a suggested guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Opening,
    Scored,
    Exploration,
    /// Typed in by the player
    Chosen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub kind: GuessKind,
    pub score: Option<f64>,
    pub round: u8,
    /// Candidates still consistent with the history
    pub remaining: usize,
}

/// What the caller should present after an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Guess(Suggestion),
    Won {
        word: String,
        feedback: Feedback,
        rounds: u8,
    },
    Lost {
        reason: LossReason,
        rounds: u8,
        remaining: Vec<String>,
    },
}

/// Yes/no gate consulted before feedback is committed
pub trait Confirmation {
    fn confirm(&mut self, guess: &str, feedback: &Feedback) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str, &Feedback) -> bool,
{
    fn confirm(&mut self, guess: &str, feedback: &Feedback) -> bool {
        self(guess, feedback)
    }
}

/// Identifies one dictionary load request
///
/// Loads resolved for an older generation are discarded by [`Session::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    config: SessionConfig,
}

impl LoadTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Dictionary installed with this many words
    Installed(usize),
    /// The ticket was superseded; the result was dropped
    Discarded,
}

/// Everything a feedback submission changes, built before anything is committed
struct Transition {
    candidates: Vec<WordEntry>,
    record: GuessRecord,
    outcome: Outcome,
}

enum Outcome {
    Next {
        suggestion: Suggestion,
        checkpoint: Option<GuessRecord>,
    },
    Won(Step),
    Lost(Step),
}

/// One game of guesses against a loaded dictionary
pub struct Session<R: RandomChoice = ThreadRandom> {
    config: SessionConfig,
    dictionary: Arc<Vec<WordEntry>>,
    candidates: Vec<WordEntry>,
    history: Vec<GuessRecord>,
    checkpoint: Option<GuessRecord>,
    state: SessionState,
    phase: Phase,
    pending: Option<Suggestion>,
    generation: u64,
    rng: R,
}

impl Default for Session<ThreadRandom> {
    fn default() -> Self {
        Self::new(SessionConfig::default(), ThreadRandom)
    }
}

impl<R: RandomChoice> Session<R> {
    /// A session with no dictionary loaded yet
    #[must_use]
    pub fn new(config: SessionConfig, rng: R) -> Self {
        Self {
            state: SessionState::initial(&config),
            config,
            dictionary: Arc::new(Vec::new()),
            candidates: Vec::new(),
            history: Vec::new(),
            checkpoint: None,
            phase: Phase::NotStarted,
            pending: None,
            generation: 0,
            rng,
        }
    }

    /// A session over an already-materialized word list
    ///
    /// Entries whose length differs from the configured one are dropped. An
    /// `Arc` is shared as is when every entry already fits.
    #[must_use]
    pub fn with_dictionary(
        config: SessionConfig,
        words: impl Into<Arc<Vec<WordEntry>>>,
        rng: R,
    ) -> Self {
        let mut session = Self::new(config, rng);
        session.install_words(words.into());
        session
    }

    /// Switch word length or dictionaries
    ///
    /// Resets the session, empties the candidate set and returns the ticket
    /// the matching load must be installed with.
    pub fn configure(&mut self, config: SessionConfig) -> LoadTicket {
        self.config = config;
        self.dictionary = Arc::new(Vec::new());
        self.reset();
        self.ticket()
    }

    /// Ticket for reloading the current configuration, superseding any load in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.ticket()
    }

    fn ticket(&self) -> LoadTicket {
        LoadTicket {
            generation: self.generation,
            config: self.config.clone(),
        }
    }

    /// Install the result of a dictionary load
    ///
    /// # Errors
    /// Returns `SolverError::DictionaryUnavailable` when the load failed; the
    /// candidate set is left empty until a later load succeeds.
    pub fn install(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<WordEntry>, DictionaryError>,
    ) -> Result<LoadStatus, SolverError> {
        if ticket.generation != self.generation {
            warn!(
                "Discarding dictionary load for generation {} (current {})",
                ticket.generation, self.generation
            );
            return Ok(LoadStatus::Discarded);
        }

        match result {
            Ok(words) => Ok(LoadStatus::Installed(self.install_words(Arc::new(words)))),
            Err(e) => {
                self.dictionary = Arc::new(Vec::new());
                self.reset_round_state();
                Err(SolverError::DictionaryUnavailable(e))
            }
        }
    }

    /// Load the configured dictionaries from `provider` and install them
    ///
    /// # Errors
    /// Returns `SolverError::DictionaryUnavailable` when the provider fails.
    pub fn load_with(&mut self, provider: &dyn DictionaryProvider) -> Result<usize, SolverError> {
        let ticket = self.begin_load();
        let result = provider.load(ticket.config.dictionaries(), ticket.config.word_length());
        match self.install(&ticket, result)? {
            LoadStatus::Installed(n) => Ok(n),
            LoadStatus::Discarded => Ok(0),
        }
    }

    fn install_words(&mut self, words: Arc<Vec<WordEntry>>) -> usize {
        let length = self.config.word_length;
        self.dictionary = if words.iter().all(|entry| entry.len() == length) {
            words
        } else {
            Arc::new(
                words
                    .iter()
                    .filter(|entry| entry.len() == length)
                    .cloned()
                    .collect(),
            )
        };
        debug!("Dictionary size after load: {}", self.dictionary.len());
        self.reset_round_state();
        self.dictionary.len()
    }

    /// Begin a game and suggest the opening guess
    ///
    /// On an active session this returns the pending suggestion unchanged. A
    /// finished session is reset first.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` when no dictionary is loaded.
    pub fn start(&mut self) -> Result<Step, SolverError> {
        if self.state.is_active
            && let Some(pending) = &self.pending
        {
            return Ok(Step::Guess(pending.clone()));
        }
        if matches!(self.phase, Phase::Won | Phase::Lost) {
            self.reset();
        }
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        let table = PositionFrequencies::compute(&self.candidates, self.config.word_length);
        let (best, score) = scoring::best_candidate(&self.candidates, None, &table)?
            .ok_or(SolverError::EmptyCandidateSet)?;
        let suggestion = Suggestion {
            word: best.headword().to_string(),
            kind: GuessKind::Opening,
            score: Some(score),
            round: 1,
            remaining: self.candidates.len(),
        };
        debug!("Round 1 opening guess: {}", suggestion.word);

        self.state.current_round = 1;
        self.state.is_active = true;
        self.phase = Phase::FirstRound;
        self.pending = Some(suggestion.clone());
        Ok(Step::Guess(suggestion))
    }

    /// Replace the pending guess with a word of the player's choosing
    ///
    /// # Errors
    /// Fails when no game is active, the word is not made of letters, or its
    /// length differs from the configured one.
    pub fn set_guess(&mut self, word: &str) -> Result<Suggestion, SolverError> {
        self.ensure_active()?;
        let word = normalize(word.trim())?;
        if word.len() != self.config.word_length {
            return Err(SolverError::LengthMismatch {
                expected: self.config.word_length,
                actual: word.len(),
                word,
            });
        }

        let suggestion = Suggestion {
            word,
            kind: GuessKind::Chosen,
            score: None,
            round: self.state.current_round,
            remaining: self.candidates.len(),
        };
        self.pending = Some(suggestion.clone());
        Ok(suggestion)
    }

    /// Record feedback for the pending guess without asking for confirmation
    ///
    /// # Errors
    /// See [`Session::submit_confirmed`].
    pub fn submit_feedback(&mut self, feedback: &Feedback) -> Result<Step, SolverError> {
        let record = self.pending_record(feedback)?;
        let transition = self.advance(record)?;
        Ok(self.commit(transition))
    }

    /// Record feedback for the pending guess once `confirmation` agrees
    ///
    /// Narrows the candidates, then either reports a win or loss or suggests
    /// the next guess. Returns `None`, with nothing changed, when the
    /// confirmation is refused.
    ///
    /// # Errors
    /// - `NotStarted` / `SessionOver` when no game is active
    /// - `InvalidFeedbackShape` when the feedback length differs from the word length
    pub fn submit_confirmed<C: Confirmation + ?Sized>(
        &mut self,
        feedback: &Feedback,
        confirmation: &mut C,
    ) -> Result<Option<Step>, SolverError> {
        let record = self.pending_record(feedback)?;
        if !confirmation.confirm(&record.word, feedback) {
            return Ok(None);
        }
        let transition = self.advance(record)?;
        Ok(Some(self.commit(transition)))
    }

    /// Pair the pending guess with `feedback` once both are valid
    fn pending_record(&self, feedback: &Feedback) -> Result<GuessRecord, SolverError> {
        self.ensure_active()?;
        let guess = self
            .pending
            .as_ref()
            .map(|s| s.word.clone())
            .ok_or(SolverError::NotStarted)?;
        if feedback.len() != self.config.word_length {
            return Err(SolverError::InvalidFeedbackShape {
                expected: self.config.word_length,
                actual: feedback.len(),
            });
        }
        Ok(GuessRecord {
            word: guess,
            feedback: feedback.clone(),
        })
    }

    fn advance(&mut self, record: GuessRecord) -> Result<Transition, SolverError> {
        let round = self.state.current_round;
        let resuming = self.state.exploration_pending;

        let mut candidates = matcher::filter(&self.candidates, &record.word, &record.feedback)?;
        if resuming && let Some(checkpoint) = &self.checkpoint {
            debug!("Resuming from checkpoint {}", checkpoint.word);
            candidates = matcher::filter(&candidates, &checkpoint.word, &checkpoint.feedback)?;
        }
        debug!("Candidates after filtering: {}", candidates.len());

        if candidates.len() == 1 {
            let word = candidates[0].headword().to_string();
            let outcome = Outcome::Won(Step::Won {
                feedback: Feedback::all_correct(word.len()),
                word,
                rounds: round,
            });
            return Ok(Transition {
                candidates,
                record,
                outcome,
            });
        }
        if candidates.is_empty() {
            let outcome = Outcome::Lost(Step::Lost {
                reason: LossReason::Exhausted,
                rounds: round,
                remaining: Vec::new(),
            });
            return Ok(Transition {
                candidates,
                record,
                outcome,
            });
        }
        if record.feedback.is_all_correct() {
            let outcome = Outcome::Won(Step::Won {
                word: record.word.clone(),
                feedback: record.feedback.clone(),
                rounds: round,
            });
            return Ok(Transition {
                candidates,
                record,
                outcome,
            });
        }
        if round >= MAX_ROUNDS {
            let outcome = Outcome::Lost(Step::Lost {
                reason: LossReason::OutOfRounds,
                rounds: round,
                remaining: candidates
                    .iter()
                    .map(|e| e.headword().to_string())
                    .collect(),
            });
            return Ok(Transition {
                candidates,
                record,
                outcome,
            });
        }

        let next_round = round + 1;
        if !resuming && exploration::should_explore(candidates.len(), next_round, &record.feedback)
        {
            let mut history = self.history.clone();
            history.push(record.clone());
            match exploration::pick_exploration_word(
                &self.dictionary,
                self.config.word_length,
                &history,
                &mut self.rng,
            ) {
                Ok(word) => {
                    debug!("Round {next_round}: exploring with {}", word.headword());
                    let suggestion = Suggestion {
                        word: word.headword().to_string(),
                        kind: GuessKind::Exploration,
                        score: None,
                        round: next_round,
                        remaining: candidates.len(),
                    };
                    let checkpoint = Some(record.clone());
                    return Ok(Transition {
                        candidates,
                        record,
                        outcome: Outcome::Next {
                            suggestion,
                            checkpoint,
                        },
                    });
                }
                Err(e) => debug!("Round {next_round}: {e}, falling back to scoring"),
            }
        }

        let scoring_feedback = if resuming {
            self.checkpoint
                .as_ref()
                .map_or(&record.feedback, |c| &c.feedback)
        } else {
            &record.feedback
        };
        let table = PositionFrequencies::compute(&candidates, self.config.word_length);
        let (best, score) = scoring::best_candidate(&candidates, Some(scoring_feedback), &table)?
            .ok_or(SolverError::EmptyCandidateSet)?;
        debug!("Round {next_round}: scored guess {}", best.headword());

        let suggestion = Suggestion {
            word: best.headword().to_string(),
            kind: GuessKind::Scored,
            score: Some(score),
            round: next_round,
            remaining: candidates.len(),
        };
        Ok(Transition {
            candidates,
            record,
            outcome: Outcome::Next {
                suggestion,
                checkpoint: None,
            },
        })
    }

    fn commit(&mut self, transition: Transition) -> Step {
        let Transition {
            candidates,
            record,
            outcome,
        } = transition;
        self.candidates = candidates;
        self.history.push(record);

        match outcome {
            Outcome::Next {
                suggestion,
                checkpoint,
            } => {
                let exploring = checkpoint.is_some();
                self.state.current_round = suggestion.round;
                self.state.exploration_pending = exploring;
                self.checkpoint = checkpoint;
                self.phase = if exploring {
                    Phase::ExplorationRound
                } else {
                    Phase::NormalRound
                };
                self.pending = Some(suggestion.clone());
                Step::Guess(suggestion)
            }
            Outcome::Won(step) => {
                if let Step::Won { word, rounds, .. } = &step {
                    info!("Solved {word} in {rounds} rounds: {}", self.history_summary());
                }
                self.finish(Phase::Won);
                step
            }
            Outcome::Lost(step) => {
                if let Step::Lost {
                    reason, remaining, ..
                } = &step
                {
                    info!(
                        "Lost ({reason:?}) after {}; {} candidates left",
                        self.history_summary(),
                        remaining.len()
                    );
                }
                self.finish(Phase::Lost);
                step
            }
        }
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.state.is_active = false;
        self.state.exploration_pending = false;
        self.checkpoint = None;
        self.pending = None;
    }

    fn history_summary(&self) -> String {
        self.history
            .iter()
            .map(|r| format!("{} {}", r.word, r.feedback))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn ensure_active(&self) -> Result<(), SolverError> {
        match self.phase {
            Phase::NotStarted => Err(SolverError::NotStarted),
            Phase::Won | Phase::Lost => Err(SolverError::SessionOver),
            _ => Ok(()),
        }
    }

    /// Abandon the current game and restore the full dictionary
    ///
    /// Bumps the session generation, so any load still in flight is discarded
    /// when it arrives.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.reset_round_state();
    }

    fn reset_round_state(&mut self) {
        self.candidates = self.dictionary.as_ref().clone();
        self.history.clear();
        self.checkpoint = None;
        self.pending = None;
        self.phase = Phase::NotStarted;
        self.state = SessionState::initial(&self.config);
    }

    #[must_use]
    pub fn candidates(&self) -> &[WordEntry] {
        &self.candidates
    }

    /// The full dictionary as loaded, before any filtering
    #[must_use]
    pub fn dictionary(&self) -> Arc<Vec<WordEntry>> {
        Arc::clone(&self.dictionary)
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn checkpoint(&self) -> Option<&GuessRecord> {
        self.checkpoint.as_ref()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&Suggestion> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
