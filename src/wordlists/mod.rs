//! Dictionaries for grading
//!
//! The full guessable list seeds every attempt's candidates; the curated
//! answer list backs the date calendar and answers-only filtering.

pub mod loader;

use crate::solver::CandidateList;
use log::info;
use std::io;
use std::path::Path;

/// The two word lists loaded at startup, both immutable
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Every guessable word
    pub words: CandidateList,
    /// Curated answers, in date order
    pub answers: CandidateList,
}

impl Dictionary {
    /// Build a dictionary from in-memory lists
    #[must_use]
    pub const fn from_lists(words: CandidateList, answers: CandidateList) -> Self {
        Self { words, answers }
    }

    /// Load both lists from files
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be read or parsed.
    pub fn load(words: impl AsRef<Path>, answers: impl AsRef<Path>) -> io::Result<Self> {
        let (words, answers) = (words.as_ref(), answers.as_ref());
        let dictionary = Self {
            words: loader::load_from_file(words)?.into(),
            answers: loader::load_from_file(answers)?.into(),
        };

        info!(
            "Loaded {} words from {} and {} answers from {}",
            dictionary.words.len(),
            words.display(),
            dictionary.answers.len(),
            answers.display()
        );
        Ok(dictionary)
    }
}
