//! Core domain types for the Wordle assistant
//!
//! Words and feedback marks. Everything here is a plain value: no I/O, no
//! randomness, no shared state.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{WordEntry, WordError, has_repeated_letters, normalize};
pub(crate) use word::RawEntry;
