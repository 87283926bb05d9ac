//! Knowledge tracking and candidate narrowing
//!
//! Constraint snapshots, resolution ordering, candidate filtering and the
//! information metrics computed from them.

mod candidates;
mod constraints;
pub mod information;
mod resolution;

pub use candidates::{CandidateList, filter_candidates};
pub use constraints::{ConstraintSnapshot, LetterSet};
pub use resolution::{ResolutionOrder, ResolutionStep};
