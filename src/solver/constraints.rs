//! Accumulated knowledge about the answer
//!
//! A `ConstraintSnapshot` records everything learned after resolving some prefix
//! of letters: which letter is known at each position, which letters are known
//! to be elsewhere, where letters were disproven, and how many copies of each
//! letter the answer must (and may) contain.

use crate::core::{GradeError, Hint, WORD_LENGTH, Word};
use std::fmt;

const ALPHABET: usize = 26;

/// Upper bound used when nothing limits how often a letter may repeat
const UNBOUNDED: u8 = WORD_LENGTH as u8;

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from the letters of a string, ignoring anything outside a-z
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut set = Self::EMPTY;
        for byte in letters.bytes() {
            if byte.is_ascii_lowercase() {
                set.insert(byte);
            }
        }
        set
    }

    /// Add a letter; anything outside a-z is ignored
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter - b'a');
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Everything known about the answer after resolving some letters
///
/// The canonical shape is:
/// - `correct[i]`: the letter known to be at position `i`
/// - `present[i]`: letters known to be in the answer but not at position `i`
/// - `absent[i]`: letters marked absent at exactly position `i`
/// - per-letter minimum and maximum occurrence counts
///
/// A letter marked absent with no correct/present mark has a maximum of zero,
/// so it is excluded everywhere. A letter with both kinds of mark is only
/// excluded where it was marked absent, and capped at the number of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintSnapshot {
    correct: [Option<u8>; WORD_LENGTH],
    present: [LetterSet; WORD_LENGTH],
    absent: [LetterSet; WORD_LENGTH],
    min_counts: [u8; ALPHABET],
    max_counts: [u8; ALPHABET],
}

impl Default for ConstraintSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConstraintSnapshot {
    /// The no-information snapshot every attempt starts from
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            correct: [None; WORD_LENGTH],
            present: [LetterSet::EMPTY; WORD_LENGTH],
            absent: [LetterSet::EMPTY; WORD_LENGTH],
            min_counts: [0; ALPHABET],
            max_counts: [UNBOUNDED; ALPHABET],
        }
    }

    /// Build a snapshot from positional marks
    ///
    /// Each slice must have one entry per position. The marks may merge several
    /// guesses, so repeats are only counted where they are certain: a letter
    /// must appear at least once per correct position, and at least once if it
    /// is marked present anywhere. A letter that is also marked absent somewhere
    /// may appear no more often than that.
    ///
    /// # Errors
    /// Returns `GradeError::InvalidConstraintShape` if a slice is not 5 long, or
    /// the marks contradict each other (a letter both correct and absent or
    /// present at the same position, or more required letters than positions).
    pub fn from_marks(
        correct: &[Option<u8>],
        present: &[LetterSet],
        absent: &[LetterSet],
    ) -> Result<Self, GradeError> {
        let correct: [Option<u8>; WORD_LENGTH] = correct
            .try_into()
            .map_err(|_| shape_error(format!("correct has {} positions", correct.len())))?;
        let present: [LetterSet; WORD_LENGTH] = present
            .try_into()
            .map_err(|_| shape_error(format!("present has {} positions", present.len())))?;
        let absent: [LetterSet; WORD_LENGTH] = absent
            .try_into()
            .map_err(|_| shape_error(format!("absent has {} positions", absent.len())))?;

        let mut marks = [0u8; ALPHABET];
        for (position, &letter) in correct.iter().enumerate() {
            if let Some(letter) = letter {
                if !letter.is_ascii_lowercase() {
                    return Err(shape_error(format!(
                        "position {position} holds non-letter {:?}",
                        letter as char
                    )));
                }
                marks[index(letter)] += 1;
            }
        }
        for set in &present {
            for letter in set.iter() {
                let slot = &mut marks[index(letter)];
                *slot = (*slot).max(1);
            }
        }

        let mut snapshot = Self {
            correct,
            present,
            absent,
            min_counts: marks,
            max_counts: [UNBOUNDED; ALPHABET],
        };
        for set in &absent {
            for letter in set.iter() {
                let slot = &mut snapshot.max_counts[index(letter)];
                *slot = (*slot).min(marks[index(letter)]);
            }
        }

        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse the compact string form used on the command line
    ///
    /// - `correct`: 5 characters, a letter or `_` per position (`"en___"`)
    /// - `present`: 5 comma-separated groups of letters per position
    ///   (`"t,,ro,t,"`), or 5 characters with `_` for unset
    /// - `absent`: a comma-separated list (`"e,u,p"`) or unbroken list
    ///   (`"eupasl"`) of letters absent everywhere. Letters in such a list that
    ///   also carry a correct or present mark are ignored. Without commas, 5
    ///   characters with `_` for unset (`"__ded"`) are read positionally.
    ///
    /// The strings may merge several guesses, so a present mark only proves
    /// the letter occurs once. `"t,,ro,t,"` with `"ro___"` asks for one `r`,
    /// one `o` and one `t`.
    ///
    /// # Errors
    /// Returns `GradeError::InvalidConstraintShape` for malformed input.
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::core::Word;
    /// use wordle_grader::solver::ConstraintSnapshot;
    ///
    /// let snapshot = ConstraintSnapshot::parse("en___", "_____", "__ded").unwrap();
    /// assert!(snapshot.is_satisfied_by(&Word::new("enjoy").unwrap()));
    /// assert!(!snapshot.is_satisfied_by(&Word::new("enemy").unwrap()));
    /// ```
    pub fn parse(correct: &str, present: &str, absent: &str) -> Result<Self, GradeError> {
        let correct = parse_positional(correct, "correct")?;
        let correct: Vec<Option<u8>> = correct.iter().map(|set| set.iter().next()).collect();

        let present = if present.contains(',') {
            let groups: Vec<LetterSet> = present
                .split(',')
                .map(|group| LetterSet::from_letters(&group.to_lowercase()))
                .collect();
            // A trailing comma after the fifth group is tolerated
            match groups.len() {
                WORD_LENGTH => groups,
                6 if present.ends_with(',') => groups[..WORD_LENGTH].to_vec(),
                n => return Err(shape_error(format!("present has {n} positions"))),
            }
        } else if present.trim().is_empty() {
            vec![LetterSet::EMPTY; WORD_LENGTH]
        } else {
            parse_positional(present, "present")?
        };

        let absent = if !absent.contains(',')
            && (absent.contains('_') || absent.trim().chars().count() == WORD_LENGTH)
        {
            parse_positional(absent, "absent")?
        } else {
            let marked = correct
                .iter()
                .flatten()
                .copied()
                .chain(present.iter().flat_map(|set| set.iter()))
                .fold(LetterSet::EMPTY, |mut acc, letter| {
                    acc.insert(letter);
                    acc
                });
            let mut everywhere = LetterSet::EMPTY;
            for letter in LetterSet::from_letters(&absent.to_lowercase()).iter() {
                if !marked.contains(letter) {
                    everywhere.insert(letter);
                }
            }
            vec![everywhere; WORD_LENGTH]
        };

        Self::from_marks(&correct, &present, &absent)
    }

    /// Return a new snapshot with one more resolved letter applied
    ///
    /// `marks` is the number of Correct/Present marks this letter has received
    /// so far within its own guess, including this one when it is a match.
    /// Within a guess, letters resolve Correct first and Absent last, so by the
    /// time an Absent letter is applied `marks` is the guess's full count.
    ///
    /// # Errors
    /// Returns `GradeError::InvalidConstraintShape` if the letter contradicts
    /// what is already known.
    pub fn apply(
        &self,
        position: usize,
        letter: u8,
        hint: Hint,
        marks: u8,
    ) -> Result<Self, GradeError> {
        if position >= WORD_LENGTH || !letter.is_ascii_lowercase() {
            return Err(shape_error(format!(
                "cannot place {:?} at position {position}",
                letter as char
            )));
        }

        let mut next = *self;
        let slot = index(letter);
        match hint {
            Hint::Correct => {
                if let Some(known) = next.correct[position]
                    && known != letter
                {
                    return Err(shape_error(format!(
                        "position {position} is already {:?}, not {:?}",
                        known as char, letter as char
                    )));
                }
                next.correct[position] = Some(letter);
                next.min_counts[slot] = next.min_counts[slot].max(marks);
            }
            Hint::Present => {
                next.present[position].insert(letter);
                next.min_counts[slot] = next.min_counts[slot].max(marks);
            }
            Hint::Absent => {
                next.absent[position].insert(letter);
                next.max_counts[slot] = next.max_counts[slot].min(marks);
            }
        }

        next.validate()?;
        Ok(next)
    }

    /// Check the snapshot for internal contradictions
    fn validate(&self) -> Result<(), GradeError> {
        for position in 0..WORD_LENGTH {
            if let Some(letter) = self.correct[position] {
                if self.absent[position].contains(letter) {
                    return Err(shape_error(format!(
                        "{:?} is both correct and absent at position {position}",
                        letter as char
                    )));
                }
                if self.present[position].contains(letter) {
                    return Err(shape_error(format!(
                        "{:?} is both correct and misplaced at position {position}",
                        letter as char
                    )));
                }
            }
        }

        for letter in b'a'..=b'z' {
            let slot = index(letter);
            if self.min_counts[slot] > self.max_counts[slot] {
                return Err(shape_error(format!(
                    "{:?} needs {} copies but at most {} are allowed",
                    letter as char, self.min_counts[slot], self.max_counts[slot]
                )));
            }
        }

        let required: usize = self.min_counts.iter().map(|&n| usize::from(n)).sum();
        if required > WORD_LENGTH {
            return Err(shape_error(format!(
                "{required} letters are required in a {WORD_LENGTH}-letter word"
            )));
        }

        Ok(())
    }

    /// Check whether a word is consistent with everything known
    ///
    /// A word is retained when all three predicates hold:
    /// - positional: every known correct letter is in place
    /// - inclusion: every known letter appears at least as often as required
    /// - exclusion: no letter sits where it was marked present or absent, and
    ///   no letter appears more often than allowed
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        for (position, &letter) in word.chars().iter().enumerate() {
            if let Some(known) = self.correct[position]
                && known != letter
            {
                return false;
            }
            if self.present[position].contains(letter) || self.absent[position].contains(letter) {
                return false;
            }
        }

        let mut counts = [0u8; ALPHABET];
        for &letter in word.chars() {
            counts[index(letter)] += 1;
        }

        counts
            .iter()
            .zip(self.min_counts.iter().zip(&self.max_counts))
            .all(|(&count, (&min, &max))| count >= min && count <= max)
    }

    /// The letter known at a position, if any
    #[must_use]
    pub const fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct[position]
    }

    /// Letters known to be in the answer but not at this position
    #[must_use]
    pub const fn present_at(&self, position: usize) -> LetterSet {
        self.present[position]
    }

    /// Letters marked absent at exactly this position
    #[must_use]
    pub const fn absent_at(&self, position: usize) -> LetterSet {
        self.absent[position]
    }

    /// Letters that cannot appear anywhere in the answer
    #[must_use]
    pub fn absent_everywhere(&self) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for letter in b'a'..=b'z' {
            if self.max_counts[index(letter)] == 0 {
                set.insert(letter);
            }
        }
        set
    }

    /// Minimum number of times a letter must occur, zero for non-letters
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.min_counts[index(letter)]
        } else {
            0
        }
    }

    /// Maximum number of times a letter may occur, zero for non-letters
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.max_counts[index(letter)]
        } else {
            0
        }
    }

    /// True when nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl fmt::Display for ConstraintSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for known in &self.correct {
            write!(f, "{}", known.map_or('_', char::from))?;
        }
        f.write_str(" present=")?;
        for (position, set) in self.present.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{set}")?;
        }
        write!(f, " absent={}", self.absent_everywhere())
    }
}

/// Slot of a lowercase letter; callers check `is_ascii_lowercase` first
#[inline]
const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

fn shape_error(reason: String) -> GradeError {
    GradeError::InvalidConstraintShape(reason)
}

/// Parse exactly five positions of `letter` or `_`
fn parse_positional(input: &str, name: &str) -> Result<Vec<LetterSet>, GradeError> {
    let chars: Vec<char> = input.trim().to_lowercase().chars().collect();
    if chars.len() != WORD_LENGTH {
        return Err(shape_error(format!(
            "{name} has {} positions, expected {WORD_LENGTH}",
            chars.len()
        )));
    }

    chars
        .into_iter()
        .enumerate()
        .map(|(position, ch)| match ch {
            '_' | '.' | '-' => Ok(LetterSet::EMPTY),
            'a'..='z' => {
                let mut set = LetterSet::EMPTY;
                set.insert(ch as u8);
                Ok(set)
            }
            other => Err(shape_error(format!(
                "{name} has invalid character {other:?} at position {position}"
            ))),
        })
        .collect()
}
