//! Command implementations

pub mod answer;
pub mod batch;
pub mod benchmark;
pub mod filter;
pub mod grade;

pub use answer::{AnswerResult, lookup_answer};
pub use batch::{BatchFailure, BatchResult, read_share_records, run_batch};
pub use benchmark::{BenchmarkResult, OpenerStats, run_benchmark, sample_answers};
pub use filter::{FilterConfig, FilterResult, filter_words};
pub use grade::{GradeConfig, GradeResult, GuessReport, LetterStep, grade_attempt};
