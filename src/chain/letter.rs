//! A single hinted letter of a guess

use crate::core::{GradeError, Hint};
use crate::solver::information::InformationMetrics;
use crate::solver::{CandidateList, ConstraintSnapshot, ResolutionStep};
use log::debug;

/// What a letter contributed once its guess was ordered
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Place in the guess's resolution order (0-4)
    pub index: usize,
    /// Knowledge after this letter and every letter resolved before it
    pub snapshot: ConstraintSnapshot,
    /// Candidates consistent with `snapshot`
    pub candidates: CandidateList,
    /// Narrowing from the previous step's candidates to `candidates`
    pub metrics: InformationMetrics,
}

/// One letter of a guess with its hint
#[derive(Debug, Clone)]
pub struct Letter {
    position: usize,
    letter: u8,
    hint: Hint,
    resolution: Option<Resolution>,
}

impl Letter {
    /// A letter that has not been placed in resolution order yet
    #[must_use]
    pub const fn new(position: usize, letter: u8, hint: Hint) -> Self {
        Self {
            position,
            letter,
            hint,
            resolution: None,
        }
    }

    /// Apply a resolution step to the candidates left by the step before it
    pub(crate) fn resolve(step: &ResolutionStep, before: &CandidateList) -> Self {
        let candidates = before.filter(&step.snapshot);
        let metrics = InformationMetrics::measure(before.len(), candidates.len());

        debug!(
            "step {} '{}' {:?} at {}: {} -> {} candidates ({:.3} bits)",
            step.rank,
            step.letter as char,
            step.hint,
            step.position,
            before.len(),
            candidates.len(),
            metrics.bits
        );

        Self {
            position: step.position,
            letter: step.letter,
            hint: step.hint,
            resolution: Some(Resolution {
                index: step.rank,
                snapshot: step.snapshot,
                candidates,
                metrics,
            }),
        }
    }

    /// Original position in the word (0-4)
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The letter as a lowercase ASCII byte
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[must_use]
    pub const fn hint(&self) -> Hint {
        self.hint
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Everything this letter contributed
    ///
    /// # Errors
    /// Returns `GradeError::UnresolvedOrder` if the letter was never ordered.
    pub fn resolution(&self) -> Result<&Resolution, GradeError> {
        self.resolution.as_ref().ok_or(GradeError::UnresolvedOrder {
            position: self.position,
        })
    }

    /// Place in the guess's resolution order
    ///
    /// # Errors
    /// Returns `GradeError::UnresolvedOrder` if the letter was never ordered.
    pub fn resolution_index(&self) -> Result<usize, GradeError> {
        self.resolution().map(|r| r.index)
    }

    /// Bits earned by this letter's step
    ///
    /// # Errors
    /// Returns `GradeError::UnresolvedOrder` if the letter was never ordered.
    pub fn bits(&self) -> Result<f64, GradeError> {
        self.resolution().map(|r| r.metrics.bits)
    }
}
