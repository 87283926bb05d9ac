//! A whole puzzle attempt
//!
//! The attempt only holds its newest guess; older guesses are reached through
//! each guess's link to its predecessor.

use super::guess::Guess;
use crate::calendar::AnswerCalendar;
use crate::core::{GradeError, MAX_GUESSES, Word};
use crate::solver::CandidateList;
use crate::wordlists::Dictionary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Decoded share data: the words of a finished attempt and how to find its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl ShareData {
    /// Resolve the answer: explicit answer first, then the date, then the last word
    ///
    /// # Errors
    /// Returns `GradeError::MissingAnswer` when there are no words or the date
    /// has no known answer, and `GradeError::Word` for an invalid answer.
    pub fn resolve_answer(&self, calendar: Option<&AnswerCalendar>) -> Result<Word, GradeError> {
        if let Some(answer) = &self.answer {
            return Ok(Word::new(answer)?);
        }

        if let Some(date) = self.date {
            return calendar
                .and_then(|calendar| calendar.answer_for(date))
                .ok_or(GradeError::MissingAnswer);
        }

        let last = self.words.last().ok_or(GradeError::MissingAnswer)?;
        Ok(Word::new(last)?)
    }
}

/// A forward-only chain of guesses against one answer
#[derive(Debug, Clone)]
pub struct Attempt {
    answer: Word,
    date: Option<Date>,
    dictionary: CandidateList,
    latest: Option<Arc<Guess>>,
}

impl Attempt {
    /// Start an attempt; every guess narrows from `dictionary`
    #[must_use]
    pub const fn new(answer: Word, dictionary: CandidateList) -> Self {
        Self {
            answer,
            date: None,
            dictionary,
            latest: None,
        }
    }

    /// Attach the puzzle date this attempt was played on
    #[must_use]
    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Rebuild a shared attempt, failing on the first invalid word
    ///
    /// # Errors
    /// Returns `GradeError::MissingAnswer` if no answer can be resolved,
    /// `GradeError::Word` for an invalid word and `GradeError::AttemptFinished`
    /// for words past the end of the attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::chain::{Attempt, ShareData};
    /// use wordle_grader::core::Word;
    /// use wordle_grader::wordlists::{Dictionary, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["heart", "shall", "shawl", "small"]);
    /// let dictionary = Dictionary::from_lists(words.clone().into(), words.into());
    /// let share: ShareData = serde_json::from_str(r#"{"words": ["heart", "shall"]}"#).unwrap();
    ///
    /// let attempt = Attempt::replay(&share, &dictionary, None).unwrap();
    /// assert_eq!(attempt.len(), 2);
    /// assert!(attempt.is_solved());
    /// ```
    pub fn replay(
        share: &ShareData,
        dictionary: &Dictionary,
        calendar: Option<&AnswerCalendar>,
    ) -> Result<Self, GradeError> {
        let answer = share.resolve_answer(calendar)?;
        let mut attempt = Self::new(answer, dictionary.words.clone());
        attempt.date = share.date;

        for text in &share.words {
            attempt.submit(Word::new(text)?)?;
        }
        Ok(attempt)
    }

    /// Grade the next guess
    ///
    /// # Errors
    /// Returns `GradeError::AttemptFinished` once the answer was found or all
    /// six slots are used.
    pub fn submit(&mut self, word: Word) -> Result<&Arc<Guess>, GradeError> {
        let guess = match &self.latest {
            Some(previous) => Guess::after(word, previous)?,
            None => Guess::first(word, self.answer, &self.dictionary)?,
        };
        Ok(&*self.latest.insert(Arc::new(guess)))
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        self.date
    }

    #[must_use]
    pub const fn latest(&self) -> Option<&Arc<Guess>> {
        self.latest.as_ref()
    }

    /// Every guess, oldest first
    #[must_use]
    pub fn guesses(&self) -> Vec<&Guess> {
        let mut guesses: Vec<&Guess> = self
            .latest
            .as_deref()
            .map(|latest| latest.history().collect())
            .unwrap_or_default();
        guesses.reverse();
        guesses
    }

    /// Number of guesses submitted
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest.as_ref().map_or(0, |guess| guess.index() + 1)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.latest.as_ref().is_some_and(|guess| guess.is_correct())
    }

    /// No more guesses can be submitted
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.latest.as_ref().is_some_and(|guess| guess.is_complete())
    }

    /// Every guess so far kept to hard mode
    #[must_use]
    pub fn hard_mode(&self) -> bool {
        self.latest.as_ref().is_none_or(|guess| guess.hard_mode())
    }

    /// Mean grade over all six slots, each unused slot scoring a full point
    #[must_use]
    pub fn final_grade(&self) -> f64 {
        let guesses = self.guesses();
        let earned: f64 = guesses.iter().map(|guess| guess.grade()).sum();
        let unused = MAX_GUESSES.saturating_sub(guesses.len());
        (earned + unused as f64) / MAX_GUESSES as f64
    }
}
