//! Daily answer calendar
//!
//! Day 0 is 2021-06-19; the curated answer list is in date order, one answer
//! per day from then on.

use crate::core::Word;
use crate::solver::CandidateList;
use time::macros::{date, format_description};
use time::{Date, Duration, OffsetDateTime};

/// The first puzzle date
pub const EPOCH: Date = date!(2021 - 06 - 19);

/// Days since the first puzzle (negative before it)
///
/// # Examples
/// ```
/// use time::macros::date;
/// use wordle_grader::calendar::day_index;
///
/// assert_eq!(day_index(date!(2021 - 06 - 19)), 0);
/// assert_eq!(day_index(date!(2022 - 01 - 01)), 196);
/// ```
#[must_use]
pub fn day_index(date: Date) -> i64 {
    (date - EPOCH).whole_days()
}

/// The date of a day index, or `None` outside the representable range
#[must_use]
pub fn date_for_index(index: i64) -> Option<Date> {
    EPOCH.checked_add(Duration::days(index))
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns the parse error for anything that is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
}

/// Today's date in the local time zone, falling back to UTC
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Resolves a date to that day's answer
#[derive(Debug, Clone)]
pub struct AnswerCalendar {
    answers: CandidateList,
}

impl AnswerCalendar {
    /// Calendar over a date-ordered answer list
    #[must_use]
    pub const fn new(answers: CandidateList) -> Self {
        Self { answers }
    }

    /// The answer for a date, or `None` before the epoch or past the list
    #[must_use]
    pub fn answer_for(&self, date: Date) -> Option<Word> {
        let index = usize::try_from(day_index(date)).ok()?;
        self.answers.get(index).copied()
    }

    /// The last date with a known answer
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        let count = i64::try_from(self.answers.len()).ok()?;
        if count == 0 {
            return None;
        }
        date_for_index(count - 1)
    }
}
