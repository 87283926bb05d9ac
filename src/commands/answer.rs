//! Answer command
//!
//! Looks up the answer for a puzzle date.

use crate::calendar::{AnswerCalendar, day_index};
use time::Date;

/// Result of an answer lookup
pub struct AnswerResult {
    pub date: Date,
    pub day_index: i64,
    pub answer: Option<String>,
    pub last_date: Option<Date>,
}

/// Resolve the answer for `date`
#[must_use]
pub fn lookup_answer(calendar: &AnswerCalendar, date: Date) -> AnswerResult {
    AnswerResult {
        date,
        day_index: day_index(date),
        answer: calendar.answer_for(date).map(|w| w.text().to_string()),
        last_date: calendar.last_date(),
    }
}
