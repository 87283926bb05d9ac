//! Per-letter feedback classification
//!
//! Every letter of a guess receives exactly one hint:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the answer
//! - Absent: no unclaimed occurrence of the letter remains in the answer

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Correct,
    Present,
    Absent,
}

impl Hint {
    /// True for Correct and Present, the hints that prove the letter is in the answer
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Square emoji shown for this hint
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The five hints of one guess, in original letter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hints([Hint; WORD_LENGTH]);

impl Hints {
    /// All five letters correct
    pub const SOLVED: Self = Self([Hint::Correct; WORD_LENGTH]);

    /// Wrap an explicit hint array
    #[must_use]
    pub const fn new(hints: [Hint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Classify every letter of `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and remove them from the pool
    /// 2. Second pass, left to right: mark Present while the pool still holds the letter
    ///
    /// Repeated letters therefore earn at most as many Correct/Present marks as the
    /// answer contains, with ties going to the leftmost position.
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::core::{Hint, Hints, Word};
    ///
    /// let guess = Word::new("worry").unwrap();
    /// let answer = Word::new("renew").unwrap();
    /// let hints = Hints::classify(&guess, &answer);
    ///
    /// assert_eq!(hints[2], Hint::Present);
    /// assert_eq!(hints[3], Hint::Absent);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, answer: &Word) -> Self {
        let mut result = [Hint::Absent; WORD_LENGTH];
        let mut remaining = answer.char_counts();

        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = Hint::Correct;

                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Hint::Absent
                && let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Hint::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Hints in original position order
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    /// Number of letters carrying the given hint
    #[must_use]
    pub fn count(&self, hint: Hint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Parse hints from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜/⬛ for Absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut hints = [Hint::Absent; WORD_LENGTH];
        for (slot, ch) in hints.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Hint::Correct,
                'Y' | 'y' | '🟨' => Hint::Present,
                '-' | '_' | '⬜' | '⬛' => Hint::Absent,
                _ => return None,
            };
        }

        Some(Self(hints))
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|h| h.emoji()).collect()
    }
}

impl std::ops::Index<usize> for Hints {
    type Output = Hint;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            let ch = match hint {
                Hint::Correct => 'G',
                Hint::Present => 'Y',
                Hint::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Hint::{Absent, Correct, Present};

    fn classify(guess: &str, answer: &str) -> Hints {
        Hints::classify(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn hints_always_cover_five_letters() {
        for (guess, answer) in [
            ("worry", "renew"),
            ("found", "shall"),
            ("shall", "shall"),
            ("eerie", "geese"),
        ] {
            let hints = classify(guess, answer);
            assert_eq!(
                hints.count(Correct) + hints.count(Present) + hints.count(Absent),
                5
            );
        }
    }

    #[test]
    fn single_guess_hints() {
        let hints = classify("stone", "snout");
        assert_eq!(
            hints.as_array(),
            &[Correct, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn double_letters_only_first_present_is_hinted() {
        let hints = classify("worry", "renew");
        assert_eq!(hints[2], Present);
        assert_eq!(hints[3], Absent);
    }

    #[test]
    fn double_letters_only_correct_is_hinted() {
        let hints = classify("niner", "renew");
        assert_eq!(hints[0], Absent);
        assert_eq!(hints[2], Correct);
    }

    #[test]
    fn double_letters_both_present() {
        let hints = classify("event", "renew");
        assert_eq!(hints[0], Present);
        assert_eq!(hints[2], Present);
    }

    #[test]
    fn double_letters_present_and_correct() {
        let hints = classify("enter", "renew");
        assert_eq!(hints[0], Present);
        assert_eq!(hints[3], Correct);
    }

    #[test]
    fn correct_claims_before_present() {
        // The green 'a' at position 2 is claimed first, leaving no 'a' for
        // the trailing occurrence.
        let hints = classify("llama", "shall");
        assert_eq!(hints.as_array(), &[Present, Present, Correct, Absent, Absent]);

        // The green 'e' at position 4 is claimed before the leftmost 'e' is scanned.
        let hints = classify("eerie", "geese");
        assert_eq!(hints.as_array(), &[Present, Correct, Absent, Absent, Correct]);
    }

    #[test]
    fn solved_hints() {
        let hints = classify("shall", "shall");
        assert!(hints.is_solved());
        assert_eq!(hints, Hints::SOLVED);
        assert!(!classify("shawl", "shall").is_solved());
    }

    #[test]
    fn parse_and_render() {
        let parsed = Hints::parse("GY-_g").unwrap();
        assert_eq!(
            parsed.as_array(),
            &[Correct, Present, Absent, Absent, Correct]
        );
        assert_eq!(parsed.to_emoji(), "🟩🟨⬜⬜🟩");
        assert_eq!(parsed.to_string(), "GY--G");
        assert_eq!(Hints::parse("🟩🟨⬜⬜🟩"), Some(parsed));

        assert!(Hints::parse("GYG").is_none());
        assert!(Hints::parse("GYGGX").is_none());
    }
}
