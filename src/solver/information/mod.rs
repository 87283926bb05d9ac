//! Information-theoretic grading
//!
//! Turns candidate-list narrowing into bits, percentages and grades.

mod calculator;
mod grades;

pub use calculator::{
    InformationMetrics, bits, expected_bits, grade, percentage, probability, uncertainty,
};
pub use grades::{letter_grade, letter_grade_spoken};
