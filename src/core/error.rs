//! Grading errors
//!
//! Every failure is local and input-driven: the caller fixes the input and
//! retries. No partial guess or candidate list is produced on failure.

use super::WordError;
use std::fmt;

/// Error type for grading operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// A guess, answer or dictionary word was not a valid 5-letter word
    Word(WordError),
    /// A constraint snapshot was malformed or contradicts itself
    InvalidConstraintShape(String),
    /// A letter's resolution index was read before its guess was ordered
    UnresolvedOrder { position: usize },
    /// The attempt already ended, either solved or out of guess slots
    AttemptFinished { guesses: usize },
    /// A replayed attempt had neither an answer nor a date with a known answer
    MissingAnswer,
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "Invalid word: {e}"),
            Self::InvalidConstraintShape(reason) => {
                write!(f, "Invalid constraint shape: {reason}")
            }
            Self::UnresolvedOrder { position } => write!(
                f,
                "Letter at position {position} has not been placed in resolution order"
            ),
            Self::AttemptFinished { guesses } => {
                write!(f, "Attempt already finished after {guesses} guesses")
            }
            Self::MissingAnswer => write!(f, "No answer given and none could be resolved"),
        }
    }
}

impl std::error::Error for GradeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GradeError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}
