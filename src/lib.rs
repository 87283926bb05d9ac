//! Wordle Grader
//!
//! Grades Wordle attempts with information theory: every letter of every guess
//! narrows the candidate list, and the narrowing is scored in bits.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grader::chain::Attempt;
//! use wordle_grader::core::Word;
//! use wordle_grader::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["found", "heart", "clash", "shawl", "shall", "small"]);
//! let mut attempt = Attempt::new(Word::new("shall").unwrap(), dictionary.into());
//!
//! for guess in ["heart", "shall"] {
//!     attempt.submit(Word::new(guess).unwrap()).unwrap();
//! }
//!
//! assert!(attempt.is_solved());
//! println!("Final grade: {:.3}", attempt.final_grade());
//! ```

// Core domain types
pub mod core;

// Constraint tracking, filtering and scoring
pub mod solver;

// Guess chains and attempts
pub mod chain;

// Date to answer lookup
pub mod calendar;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod fixtures;
