//! Batch command
//!
//! Grades many shared attempts in parallel.

use crate::calendar::AnswerCalendar;
use crate::chain::{Attempt, ShareData};
use crate::core::{GradeError, MAX_GUESSES};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A share record that could not be graded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// 1-based line in the input
    pub line: usize,
    pub reason: String,
}

/// Summary of a batch run
#[derive(Debug)]
pub struct BatchResult {
    pub total_records: usize,
    pub graded: usize,
    pub solved: usize,
    pub hard_mode: usize,
    pub mean_final_grade: f64,
    /// Solved attempts by guess count; index 0 is one guess
    pub distribution: [usize; MAX_GUESSES],
    pub failures: Vec<BatchFailure>,
    pub duration: Duration,
}

/// Parse JSON lines of share data, skipping blank lines
///
/// Unparseable lines are returned as failures instead of records.
#[must_use]
pub fn read_share_records(content: &str) -> (Vec<(usize, ShareData)>, Vec<BatchFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ShareData>(line) {
            Ok(share) => records.push((line_number, share)),
            Err(e) => {
                warn!("Skipping unreadable record on line {line_number}: {e}");
                failures.push(BatchFailure {
                    line: line_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    (records, failures)
}

/// Replay and grade every record
///
/// Records are independent attempts and are graded in parallel.
pub fn run_batch(
    records: &[(usize, ShareData)],
    dictionary: &Dictionary,
    calendar: Option<&AnswerCalendar>,
    show_progress: bool,
) -> BatchResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(usize, Result<Attempt, GradeError>)> = records
        .par_iter()
        .map(|(line, share)| {
            let outcome = Attempt::replay(share, dictionary, calendar);
            pb.inc(1);
            (*line, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut graded = 0;
    let mut solved = 0;
    let mut hard_mode = 0;
    let mut grade_sum = 0.0;
    let mut distribution = [0; MAX_GUESSES];
    let mut failures = Vec::new();

    for (line, outcome) in outcomes {
        match outcome {
            Ok(attempt) => {
                graded += 1;
                grade_sum += attempt.final_grade();
                if attempt.hard_mode() {
                    hard_mode += 1;
                }
                if attempt.is_solved() {
                    solved += 1;
                    distribution[attempt.len() - 1] += 1;
                }
            }
            Err(e) => {
                warn!("Could not grade record on line {line}: {e}");
                failures.push(BatchFailure {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }

    let duration = start.elapsed();
    info!(
        "Graded {graded} of {} records in {:.2}s",
        records.len(),
        duration.as_secs_f64()
    );

    BatchResult {
        total_records: records.len(),
        graded,
        solved,
        hard_mode,
        mean_final_grade: if graded > 0 {
            grade_sum / graded as f64
        } else {
            0.0
        },
        distribution,
        failures,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_dictionary;

    fn dictionary() -> Dictionary {
        let words = fixture_dictionary();
        Dictionary::from_lists(words.clone(), words)
    }

    const RECORDS: &str = r#"{"words": ["found", "heart", "clash", "shawl", "shall"]}
{"words": ["stone", "snout"]}

{"words": ["heart", "found", "shall"], "answer": "shall"}
not json
{"words": ["heart", "sh4ll"], "answer": "shall"}
"#;

    #[test]
    fn read_records_and_failures() {
        let (records, failures) = read_share_records(RECORDS);

        let lines: Vec<usize> = records.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, [1, 2, 4, 6]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].line, 5);
    }

    #[test]
    fn batch_summary() {
        let (records, _) = read_share_records(RECORDS);
        let result = run_batch(&records, &dictionary(), None, false);

        assert_eq!(result.total_records, 4);
        assert_eq!(result.graded, 3);
        assert_eq!(result.solved, 3);
        assert_eq!(result.hard_mode, 2);
        assert_eq!(result.distribution, [0, 1, 1, 0, 1, 0]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].line, 6);
        assert!(result.mean_final_grade > 0.0 && result.mean_final_grade <= 1.0);
    }

    #[test]
    fn empty_batch() {
        let result = run_batch(&[], &dictionary(), None, false);
        assert_eq!(result.graded, 0);
        assert!(result.mean_final_grade.abs() < f64::EPSILON);
    }
}
