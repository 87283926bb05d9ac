//! Core domain types for the puzzle
//!
//! Words, per-letter hints and the crate error type. Everything here is pure
//! and has no knowledge of dictionaries or guess chains.

mod error;
mod hint;
mod word;

pub use error::GradeError;
pub use hint::{Hint, Hints};
pub use word::{WORD_LENGTH, Word, WordError};

/// Number of guess slots in one attempt
pub const MAX_GUESSES: usize = 6;
