//! Wordle Assistant
//!
//! A solving engine for Wordle-style games: it filters a dictionary against
//! the colored feedback of each guess, ranks the survivors by positional
//! letter frequency, and occasionally spends a round on untried letters when
//! too many candidates remain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Feedback, WordEntry};
//! use wordle_assist::solver::{Session, SessionConfig, Step, ThreadRandom};
//!
//! let words: Vec<WordEntry> = ["crane", "slate", "trace"]
//!     .iter()
//!     .zip(1..)
//!     .map(|(w, rank)| WordEntry::new(rank, w).unwrap())
//!     .collect();
//! let mut session = Session::with_dictionary(SessionConfig::default(), words, ThreadRandom);
//!
//! let Step::Guess(opening) = session.start().unwrap() else { unreachable!() };
//! assert_eq!(opening.word, "CRANE");
//!
//! // The secret word is SLATE
//! let feedback = Feedback::calculate(&opening.word, "slate");
//! let step = session.submit_feedback(&feedback).unwrap();
//! assert!(matches!(step, Step::Won { ref word, .. } if word == "SLATE"));
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Dictionary providers
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
