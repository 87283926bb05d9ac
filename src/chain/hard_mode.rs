//! Hard-mode replay rule
//!
//! After the first guess, every green must stay in place and every yellow
//! letter must be reused (green or yellow) in the next guess.

use crate::core::{Hint, Hints, WORD_LENGTH, Word};
use std::fmt;

/// Why a guess broke hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A position that was green in the previous guess holds another letter
    MovedCorrect { position: usize, letter: u8 },
    /// A letter that was yellow in the previous guess was not reused
    MissingPresent { letter: u8 },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovedCorrect { position, letter } => write!(
                f,
                "letter {} must be '{}'",
                position + 1,
                char::from(*letter).to_ascii_uppercase()
            ),
            Self::MissingPresent { letter } => write!(
                f,
                "guess must contain '{}'",
                char::from(*letter).to_ascii_uppercase()
            ),
        }
    }
}

/// Check one guess against the hints of the guess before it
///
/// Only matched letters of `word` count towards reusing a yellow, and letters
/// sitting on the previous guess's green positions are already spoken for.
///
/// # Errors
/// Returns the first rule the guess breaks.
///
/// # Examples
/// ```
/// use wordle_grader::chain::check_hard_mode;
/// use wordle_grader::core::{Hints, Word};
///
/// let answer = Word::new("await").unwrap();
/// let woman = Word::new("woman").unwrap();
/// let word = Word::new("await").unwrap();
///
/// let previous = Hints::classify(&woman, &answer);
/// let hints = Hints::classify(&word, &answer);
/// assert!(check_hard_mode(&woman, &previous, &word, &hints).is_ok());
/// ```
pub fn check_hard_mode(
    previous_word: &Word,
    previous_hints: &Hints,
    word: &Word,
    hints: &Hints,
) -> Result<(), HardModeViolation> {
    let mut pool = [0u8; 26];

    for position in 0..WORD_LENGTH {
        if previous_hints[position] == Hint::Correct {
            let letter = previous_word.char_at(position);
            if word.char_at(position) != letter {
                return Err(HardModeViolation::MovedCorrect { position, letter });
            }
        } else if hints[position].is_match() {
            pool[usize::from(word.char_at(position) - b'a')] += 1;
        }
    }

    for position in 0..WORD_LENGTH {
        if previous_hints[position] == Hint::Present {
            let letter = previous_word.char_at(position);
            let available = &mut pool[usize::from(letter - b'a')];
            if *available == 0 {
                return Err(HardModeViolation::MissingPresent { letter });
            }
            *available -= 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::word;

    fn check(previous: &str, next: &str, answer: &str) -> Result<(), HardModeViolation> {
        let answer = word(answer);
        let (previous, next) = (word(previous), word(next));
        check_hard_mode(
            &previous,
            &Hints::classify(&previous, &answer),
            &next,
            &Hints::classify(&next, &answer),
        )
    }

    #[test]
    fn reused_yellows_keep_hard_mode() {
        assert_eq!(check("woman", "await", "await"), Ok(()));
        assert_eq!(check("heart", "clash", "shall"), Ok(()));
        assert_eq!(check("llama", "shall", "shall"), Ok(()));
    }

    #[test]
    fn moved_green_breaks_hard_mode() {
        assert_eq!(
            check("heart", "found", "shall"),
            Err(HardModeViolation::MovedCorrect {
                position: 2,
                letter: b'a'
            })
        );
        assert_eq!(
            check("enter", "event", "renew"),
            Err(HardModeViolation::MovedCorrect {
                position: 3,
                letter: b'e'
            })
        );
    }

    #[test]
    fn dropped_yellow_breaks_hard_mode() {
        // Every letter of "cater" is yellow; "slate" drops 'c' and 'r'
        assert_eq!(
            check("cater", "slate", "trace"),
            Err(HardModeViolation::MissingPresent { letter: b'c' })
        );
    }

    #[test]
    fn green_is_checked_before_yellows() {
        // "crane" has 'r' green and 'c' yellow; "slate" drops both
        assert_eq!(
            check("crane", "slate", "trace"),
            Err(HardModeViolation::MovedCorrect {
                position: 1,
                letter: b'r'
            })
        );
    }

    #[test]
    fn repeated_yellow_needs_two_matches() {
        // "event" against "renew" yields two yellow 'e's; "enter" reuses
        // both, "niner" only one.
        assert_eq!(check("event", "enter", "renew"), Ok(()));
        assert_eq!(
            check("event", "niner", "renew"),
            Err(HardModeViolation::MissingPresent { letter: b'e' })
        );
    }

    #[test]
    fn violation_messages() {
        let moved = HardModeViolation::MovedCorrect {
            position: 2,
            letter: b'a',
        };
        assert_eq!(moved.to_string(), "letter 3 must be 'A'");
        assert_eq!(
            HardModeViolation::MissingPresent { letter: b'c' }.to_string(),
            "guess must contain 'C'"
        );
    }
}
