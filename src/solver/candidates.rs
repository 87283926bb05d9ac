//! Candidate word lists and constraint filtering
//!
//! A `CandidateList` is immutable once built. Filtering never mutates its
//! input; it produces a new list, so intermediate lists can be shared freely
//! between guesses, letters and threads.

use super::ConstraintSnapshot;
use crate::core::Word;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered, immutable, cheaply clonable sequence of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList(Arc<[Word]>);

impl CandidateList {
    /// Wrap a list of words, preserving their order
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self(words.into())
    }

    /// The empty list
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Words consistent with the snapshot, in their original relative order
    ///
    /// See [`filter_candidates`].
    #[must_use]
    pub fn filter(&self, snapshot: &ConstraintSnapshot) -> Self {
        filter_candidates(snapshot, self)
    }

    /// Check whether a word is in the list
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// True when both handles point at the same underlying words
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CandidateList {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Word>> for CandidateList {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<Word> for CandidateList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Filter a word list down to the words consistent with a snapshot
///
/// Linear scan, O(length × 5). When nothing is filtered out the input's
/// storage is shared rather than copied.
///
/// # Examples
/// ```
/// use wordle_grader::core::Word;
/// use wordle_grader::solver::{CandidateList, ConstraintSnapshot, filter_candidates};
///
/// let words: CandidateList = ["touch", "brave", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let snapshot = ConstraintSnapshot::parse("_____", "_____", "touch").unwrap();
///
/// let remaining = filter_candidates(&snapshot, &words);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "brave");
/// ```
#[must_use]
pub fn filter_candidates(snapshot: &ConstraintSnapshot, candidates: &CandidateList) -> CandidateList {
    if snapshot.is_empty() {
        return candidates.clone();
    }

    let retained: Vec<Word> = candidates
        .iter()
        .filter(|word| snapshot.is_satisfied_by(word))
        .copied()
        .collect();

    if retained.len() == candidates.len() {
        candidates.clone()
    } else {
        CandidateList::new(retained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_dictionary;

    fn list(words: &[&str]) -> CandidateList {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn filter_preserves_order_and_input() {
        let words = list(&["shall", "clash", "shawl", "heart", "small"]);
        let snapshot = ConstraintSnapshot::parse("s____", "_____", "").unwrap();

        let remaining = words.filter(&snapshot);

        let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
        assert_eq!(texts, ["shall", "shawl", "small"]);
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn unchanged_list_shares_storage() {
        let words = list(&["shall", "shawl"]);
        let snapshot = ConstraintSnapshot::parse("sha__", "_____", "").unwrap();

        let remaining = words.filter(&snapshot);
        assert!(remaining.shares_storage_with(&words));

        let empty = words.filter(&ConstraintSnapshot::empty());
        assert!(empty.shares_storage_with(&words));
    }

    #[test]
    fn absent_touch_on_dictionary() {
        let dictionary = fixture_dictionary();
        let snapshot = ConstraintSnapshot::parse("_____", "_____", "touch").unwrap();

        let remaining = dictionary.filter(&snapshot);

        assert!(remaining.len() > dictionary.len() / 5);
        assert!(remaining.len() < dictionary.len());
        assert!(!remaining.contains_word(&Word::new("touch").unwrap()));
        for word in remaining.iter() {
            for letter in *b"touch" {
                assert!(!word.has_letter(letter), "{word} contains {}", letter as char);
            }
        }
    }

    #[test]
    fn second_gray_letter_eliminates_double_letter_answers() {
        let dictionary = fixture_dictionary();
        let enemy = Word::new("enemy").unwrap();

        // "vapid": all gray
        let first = ConstraintSnapshot::parse("_____", "_____", "vapid").unwrap();
        let after_vapid = dictionary.filter(&first);
        assert!(after_vapid.contains_word(&enemy));

        // "ended": e and n green, the second 'e' and both 'd's gray
        let second = ConstraintSnapshot::parse("en___", "_____", "__ded").unwrap();
        let after_ended = after_vapid.filter(&second);

        assert!(!after_ended.contains_word(&enemy));
        let texts: Vec<&str> = after_ended.iter().map(Word::text).collect();
        assert_eq!(texts, ["enjoy", "entry"]);
    }

    #[test]
    fn tighter_snapshot_never_grows_list() {
        let dictionary = fixture_dictionary();
        let loose = ConstraintSnapshot::parse("_____", "_____", "vapid").unwrap();
        let tight = ConstraintSnapshot::parse("e____", "_____", "vapid").unwrap();

        let after_loose = dictionary.filter(&loose);
        let after_tight = after_loose.filter(&tight);
        assert!(after_tight.len() <= after_loose.len());
        assert_eq!(after_tight, dictionary.filter(&tight));
    }

    #[test]
    fn empty_list_filters_to_empty() {
        let snapshot = ConstraintSnapshot::parse("s____", "_____", "").unwrap();
        assert!(CandidateList::empty().filter(&snapshot).is_empty());
    }
}
