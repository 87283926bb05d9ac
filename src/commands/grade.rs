//! Grade command
//!
//! Grades a sequence of guesses against a known answer.

use crate::chain::{Attempt, Guess, HardModeViolation};
use crate::core::{GradeError, Hint, Hints, Word};
use crate::solver::CandidateList;
use crate::solver::information::letter_grade;
use time::Date;

/// Configuration for grading an attempt
pub struct GradeConfig {
    pub guesses: Vec<String>,
    pub answer: Word,
    pub date: Option<Date>,
}

/// Result of grading an attempt
pub struct GradeResult {
    pub answer: String,
    pub date: Option<Date>,
    pub guesses: Vec<GuessReport>,
    pub solved: bool,
    pub hard_mode: bool,
    pub final_grade: f64,
    pub final_letter_grade: &'static str,
}

/// Everything reported for one guess
pub struct GuessReport {
    pub word: String,
    pub hints: Hints,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub uncertainty: f64,
    pub probability: f64,
    pub bits: f64,
    pub expected_bits: f64,
    pub grade: f64,
    pub letter_grade: &'static str,
    pub hard_mode: bool,
    pub violation: Option<HardModeViolation>,
    /// Letters in resolution order
    pub steps: Vec<LetterStep>,
    /// A few of the remaining candidates
    pub sample: Vec<String>,
}

/// One resolved letter
pub struct LetterStep {
    pub position: usize,
    pub letter: char,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub bits: f64,
}

/// Remaining candidates listed per guess
const SAMPLE_SIZE: usize = 8;

/// Grade every guess in order
///
/// # Errors
///
/// Returns an error if a guess is not a valid word or more guesses are given
/// than the attempt allows.
pub fn grade_attempt(config: &GradeConfig, dictionary: &CandidateList) -> Result<GradeResult, GradeError> {
    let mut attempt = Attempt::new(config.answer, dictionary.clone());
    if let Some(date) = config.date {
        attempt = attempt.with_date(date);
    }

    for text in &config.guesses {
        attempt.submit(Word::new(text)?)?;
    }

    let guesses = attempt
        .guesses()
        .into_iter()
        .map(report)
        .collect::<Result<Vec<_>, _>>()?;
    let final_grade = attempt.final_grade();

    Ok(GradeResult {
        answer: config.answer.text().to_string(),
        date: config.date,
        guesses,
        solved: attempt.is_solved(),
        hard_mode: attempt.hard_mode(),
        final_grade,
        final_letter_grade: letter_grade(final_grade),
    })
}

fn report(guess: &Guess) -> Result<GuessReport, GradeError> {
    let steps = guess
        .resolved_letters()
        .map(|letter| {
            let resolution = letter.resolution()?;
            Ok(LetterStep {
                position: letter.position(),
                letter: char::from(letter.letter()),
                hint: letter.hint(),
                candidates_before: resolution.metrics.candidates_before,
                candidates_after: resolution.metrics.candidates_after,
                bits: resolution.metrics.bits,
            })
        })
        .collect::<Result<Vec<_>, GradeError>>()?;

    let metrics = guess.metrics();
    Ok(GuessReport {
        word: guess.word().text().to_string(),
        hints: *guess.hints(),
        candidates_before: metrics.candidates_before,
        candidates_after: metrics.candidates_after,
        uncertainty: metrics.uncertainty,
        probability: metrics.probability,
        bits: metrics.bits,
        expected_bits: guess.expected_bits(),
        grade: metrics.grade,
        letter_grade: letter_grade(metrics.grade),
        hard_mode: guess.hard_mode(),
        violation: guess.hard_mode_violation(),
        steps,
        sample: guess
            .candidates()
            .iter()
            .take(SAMPLE_SIZE)
            .map(|w| w.text().to_string())
            .collect(),
    })
}
