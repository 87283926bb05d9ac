//! Benchmark command
//!
//! Grades a fixed opening sequence against a sample of answers.

use crate::chain::Attempt;
use crate::core::{GradeError, Word};
use crate::solver::CandidateList;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Averages for one opener slot
#[derive(Debug, Clone, PartialEq)]
pub struct OpenerStats {
    pub word: String,
    /// Attempts still running when this opener was played
    pub played: usize,
    /// Attempts this opener solved outright
    pub solved: usize,
    pub mean_bits: f64,
    pub mean_grade: f64,
    pub mean_remaining: f64,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_answers: usize,
    pub openers: Vec<OpenerStats>,
    pub duration: Duration,
    pub answers_per_second: f64,
}

#[derive(Default, Clone, Copy)]
struct Totals {
    played: usize,
    solved: usize,
    bits: f64,
    grade: f64,
    remaining: usize,
}

impl Totals {
    fn merge(mut self, other: Self) -> Self {
        self.played += other.played;
        self.solved += other.solved;
        self.bits += other.bits;
        self.grade += other.grade;
        self.remaining += other.remaining;
        self
    }
}

/// Pick `count` distinct answers at random (all of them if there are fewer)
pub fn sample_answers<R: Rng + ?Sized>(answers: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    answers.choose_multiple(rng, count).copied().collect()
}

/// Play `openers` in order against every answer and average each slot
///
/// An attempt stops early once an opener hits its answer or the sixth slot is
/// used, so later slots average over fewer attempts.
///
/// # Errors
///
/// Returns an error if grading any opener fails.
pub fn run_benchmark(
    openers: &[Word],
    answers: &[Word],
    dictionary: &CandidateList,
) -> Result<BenchmarkResult, GradeError> {
    let start = Instant::now();

    let per_answer: Vec<Vec<Totals>> = answers
        .par_iter()
        .map(|&answer| play_openers(openers, answer, dictionary))
        .collect::<Result<_, _>>()?;

    let totals = per_answer.into_iter().fold(
        vec![Totals::default(); openers.len()],
        |mut acc, slots| {
            for (total, slot) in acc.iter_mut().zip(slots) {
                *total = total.merge(slot);
            }
            acc
        },
    );

    let duration = start.elapsed();
    let openers = openers
        .iter()
        .zip(totals)
        .map(|(word, total)| {
            let mean = |sum: f64| {
                if total.played > 0 {
                    sum / total.played as f64
                } else {
                    0.0
                }
            };
            OpenerStats {
                word: word.text().to_string(),
                played: total.played,
                solved: total.solved,
                mean_bits: mean(total.bits),
                mean_grade: mean(total.grade),
                mean_remaining: mean(total.remaining as f64),
            }
        })
        .collect();

    Ok(BenchmarkResult {
        total_answers: answers.len(),
        openers,
        duration,
        answers_per_second: answers.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn play_openers(
    openers: &[Word],
    answer: Word,
    dictionary: &CandidateList,
) -> Result<Vec<Totals>, GradeError> {
    let mut attempt = Attempt::new(answer, dictionary.clone());
    let mut slots = vec![Totals::default(); openers.len()];

    for (slot, &opener) in slots.iter_mut().zip(openers) {
        if attempt.is_finished() {
            break;
        }
        let guess = attempt.submit(opener)?;
        *slot = Totals {
            played: 1,
            solved: usize::from(guess.is_correct()),
            bits: guess.bits(),
            grade: guess.grade(),
            remaining: guess.candidates().len(),
        };
    }

    Ok(slots)
}
