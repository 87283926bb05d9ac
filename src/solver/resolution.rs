//! Resolution order of a guess's letters
//!
//! Letters are applied Correct first, then Present, then Absent, each group in
//! original position order. Applying them left to right instead would let a
//! later gray copy of a repeated letter rule out an earlier green or yellow one.

use super::ConstraintSnapshot;
use crate::core::{GradeError, Hint, Hints, WORD_LENGTH, Word};

/// One letter applied on top of everything resolved before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionStep {
    /// Place in the resolution order (0-4)
    pub rank: usize,
    /// Original position in the word (0-4)
    pub position: usize,
    pub letter: u8,
    pub hint: Hint,
    /// Knowledge after this letter and every letter ranked before it
    pub snapshot: ConstraintSnapshot,
}

/// The resolution permutation of one guess, computed once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionOrder {
    positions: [usize; WORD_LENGTH],
    ranks: [usize; WORD_LENGTH],
}

impl ResolutionOrder {
    /// Order positions by hint: Correct, then Present, then Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::core::{Hints, Word};
    /// use wordle_grader::solver::ResolutionOrder;
    ///
    /// let hints = Hints::classify(&Word::new("heart").unwrap(), &Word::new("shall").unwrap());
    /// let order = ResolutionOrder::new(&hints);
    ///
    /// // 'a' (green) first, 'h' (yellow) next, then the grays left to right
    /// assert_eq!(order.positions(), &[2, 0, 1, 3, 4]);
    /// ```
    #[must_use]
    pub fn new(hints: &Hints) -> Self {
        let mut positions = [0; WORD_LENGTH];
        let mut ranks = [0; WORD_LENGTH];

        let mut rank = 0;
        for group in [Hint::Correct, Hint::Present, Hint::Absent] {
            for position in 0..WORD_LENGTH {
                if hints[position] == group {
                    positions[rank] = position;
                    ranks[position] = rank;
                    rank += 1;
                }
            }
        }

        Self { positions, ranks }
    }

    /// Original positions in the order they are resolved
    #[must_use]
    pub const fn positions(&self) -> &[usize; WORD_LENGTH] {
        &self.positions
    }

    /// Original position of the letter resolved at `rank`
    #[must_use]
    pub const fn position_at(&self, rank: usize) -> usize {
        self.positions[rank]
    }

    /// Resolution rank of the letter at an original position
    #[must_use]
    pub const fn rank_of(&self, position: usize) -> usize {
        self.ranks[position]
    }

    /// Build the incremental snapshot for every letter in resolution order
    ///
    /// The snapshot at rank `k` contains `start` plus exactly the letters of this
    /// guess ranked `0..=k`.
    ///
    /// # Errors
    /// Returns `GradeError::InvalidConstraintShape` if a letter contradicts `start`.
    pub fn resolve(
        &self,
        word: &Word,
        hints: &Hints,
        start: &ConstraintSnapshot,
    ) -> Result<[ResolutionStep; WORD_LENGTH], GradeError> {
        let mut marks = [0u8; 26];
        let mut snapshot = *start;
        let mut steps = [ResolutionStep {
            rank: 0,
            position: 0,
            letter: b'a',
            hint: Hint::Absent,
            snapshot: *start,
        }; WORD_LENGTH];

        for (rank, step) in steps.iter_mut().enumerate() {
            let position = self.positions[rank];
            let letter = word.char_at(position);
            let hint = hints[position];

            let count = &mut marks[usize::from(letter - b'a')];
            if hint.is_match() {
                *count += 1;
            }

            snapshot = snapshot.apply(position, letter, hint, *count)?;
            *step = ResolutionStep {
                rank,
                position,
                letter,
                hint,
                snapshot,
            };
        }

        Ok(steps)
    }
}
