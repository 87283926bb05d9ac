//! Guess chains
//!
//! Each guess classifies its letters, resolves them in order on top of what
//! the previous guess knew, and scores the narrowing. An attempt is the chain
//! of guesses against one answer.

mod attempt;
mod guess;
mod hard_mode;
mod letter;

pub use attempt::{Attempt, ShareData};
pub use guess::Guess;
pub use hard_mode::{HardModeViolation, check_hard_mode};
pub use letter::{Letter, Resolution};
