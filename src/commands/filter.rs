//! Filter command
//!
//! Lists the words consistent with hand-entered constraints.

use crate::core::GradeError;
use crate::solver::{CandidateList, ConstraintSnapshot};

/// Constraint strings as typed on the command line
pub struct FilterConfig {
    pub correct: String,
    pub present: String,
    pub absent: String,
    pub limit: Option<usize>,
}

/// Result of filtering a word list
pub struct FilterResult {
    pub snapshot: ConstraintSnapshot,
    pub total_words: usize,
    pub match_count: usize,
    /// Matches in list order, cut to the configured limit
    pub matches: Vec<String>,
}

/// Filter `words` down to those consistent with the configured constraints
///
/// # Errors
///
/// Returns `GradeError::InvalidConstraintShape` if the constraint strings are
/// malformed or contradict each other.
pub fn filter_words(config: &FilterConfig, words: &CandidateList) -> Result<FilterResult, GradeError> {
    let snapshot = ConstraintSnapshot::parse(&config.correct, &config.present, &config.absent)?;
    let remaining = words.filter(&snapshot);

    Ok(FilterResult {
        snapshot,
        total_words: words.len(),
        match_count: remaining.len(),
        matches: remaining
            .iter()
            .take(config.limit.unwrap_or(usize::MAX))
            .map(|w| w.text().to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_dictionary;

    fn config(correct: &str, present: &str, absent: &str, limit: Option<usize>) -> FilterConfig {
        FilterConfig {
            correct: correct.to_string(),
            present: present.to_string(),
            absent: absent.to_string(),
            limit,
        }
    }

    #[test]
    fn filter_with_double_gray() {
        let result = filter_words(&config("en___", "", "__ded", None), &fixture_dictionary()).unwrap();

        assert_eq!(result.total_words, 758);
        assert_eq!(result.matches, ["enjoy", "entry"]);
        assert_eq!(result.match_count, 2);
    }

    #[test]
    fn limit_cuts_listing_but_not_count() {
        let result = filter_words(&config("_____", "_____", "touch", Some(3)), &fixture_dictionary())
            .unwrap();

        assert_eq!(result.matches.len(), 3);
        assert!(result.match_count > 3);
    }

    #[test]
    fn merged_constraint_strings_find_the_answer() {
        let result =
            filter_words(&config("ro___", "t,,ro,t,", "eupasl", None), &fixture_dictionary()).unwrap();
        assert_eq!(result.matches, ["robot"]);
    }

    #[test]
    fn malformed_constraints_fail() {
        let result = filter_words(&config("abc", "", "", None), &fixture_dictionary());
        assert!(matches!(result, Err(GradeError::InvalidConstraintShape(_))));
    }
}
