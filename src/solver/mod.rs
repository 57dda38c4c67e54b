//! Solving engine
//!
//! Filters candidates against feedback, ranks them by positional letter
//! frequency, and drives a six-round game through [`Session`].

mod error;
pub mod exploration;
mod frequency;
mod matcher;
pub mod scoring;
pub mod session;

pub use error::SolverError;
pub use exploration::{AnyRandom, MAX_ROUNDS, RandomChoice, SeededRandom, ThreadRandom};
pub use frequency::PositionFrequencies;
pub use matcher::{filter, matches};
pub use session::{
    Confirmation, GuessKind, GuessRecord, LoadStatus, LoadTicket, LossReason, Phase, Session,
    SessionConfig, SessionState, Step, Suggestion,
};
