//! Wordle Grader - CLI
//!
//! Grades Wordle attempts letter by letter using information theory.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordle_grader::{
    calendar::{AnswerCalendar, parse_date, today},
    commands::{
        FilterConfig, GradeConfig, filter_words, grade_attempt, lookup_answer, read_share_records,
        run_batch, run_benchmark, sample_answers,
    },
    core::Word,
    output::{
        print_answer_result, print_batch_result, print_benchmark_result, print_filter_result,
        print_grade_result,
    },
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_grader",
    about = "Grade Wordle attempts letter by letter using information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Full guessable word list (text, one word per line, or JSON array)
    #[arg(long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Curated answer list in date order (text or JSON array)
    #[arg(long, global = true, default_value = "data/answers.json")]
    answers: PathBuf,

    /// Log resolution steps and guesses
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a sequence of guesses
    Grade {
        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,

        /// The answer (defaults to the answer for --date, or today's)
        #[arg(short, long, conflicts_with = "date")]
        answer: Option<String>,

        /// Puzzle date, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Show every letter's resolution step
        #[arg(long)]
        steps: bool,
    },

    /// List words consistent with known constraints
    Filter {
        /// Correct letters, e.g. "en___"
        #[arg(short, long, default_value = "_____")]
        correct: String,

        /// Present letters per position, e.g. "t,,ro,t," or "_t___"
        #[arg(short, long, default_value = "_____")]
        present: String,

        /// Absent letters, positional ("__ded") or a list ("vapid")
        #[arg(short, long, default_value = "")]
        absent: String,

        /// Filter the answer list instead of the full word list
        #[arg(long)]
        answers_only: bool,

        /// Maximum number of words to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the answer for a date
    Answer {
        /// Puzzle date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Grade a JSON-lines file of shared attempts
    Batch {
        /// File with one {"words": [...], "answer"?: ..., "date"?: ...} per line
        file: PathBuf,
    },

    /// Grade fixed openers against random answers
    Benchmark {
        /// Comma-separated opening guesses
        #[arg(short, long, value_delimiter = ',', required = true)]
        opener: Vec<String>,

        /// Number of random answers to grade against
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let dictionary = Dictionary::load(&cli.words, &cli.answers).with_context(|| {
        format!(
            "Failed to load word lists from {} and {}",
            cli.words.display(),
            cli.answers.display()
        )
    })?;
    let calendar = AnswerCalendar::new(dictionary.answers.clone());

    match cli.command {
        Commands::Grade {
            guesses,
            answer,
            date,
            steps,
        } => run_grade_command(guesses, answer, date.as_deref(), steps, &dictionary, &calendar),
        Commands::Filter {
            correct,
            present,
            absent,
            answers_only,
            limit,
        } => {
            let config = FilterConfig {
                correct,
                present,
                absent,
                limit,
            };
            let words = if answers_only {
                &dictionary.answers
            } else {
                &dictionary.words
            };
            let result = filter_words(&config, words)?;
            print_filter_result(&result);
            Ok(())
        }
        Commands::Answer { date } => {
            let date = resolve_date(date.as_deref())?;
            print_answer_result(&lookup_answer(&calendar, date));
            Ok(())
        }
        Commands::Batch { file } => run_batch_command(&file, &dictionary, &calendar),
        Commands::Benchmark { opener, count } => {
            run_benchmark_command(&opener, count, &dictionary)
        }
    }
}

fn resolve_date(date: Option<&str>) -> Result<time::Date> {
    date.map_or_else(
        || Ok(today()),
        |text| parse_date(text).with_context(|| format!("Invalid date '{text}'")),
    )
}

fn run_grade_command(
    guesses: Vec<String>,
    answer: Option<String>,
    date: Option<&str>,
    steps: bool,
    dictionary: &Dictionary,
    calendar: &AnswerCalendar,
) -> Result<()> {
    let (answer, date) = if let Some(answer) = answer {
        (Word::new(&answer)?, None)
    } else {
        let date = resolve_date(date)?;
        let Some(answer) = calendar.answer_for(date) else {
            bail!("No known answer for {date}; pass --answer");
        };
        (answer, Some(date))
    };

    let config = GradeConfig {
        guesses,
        answer,
        date,
    };
    let result = grade_attempt(&config, &dictionary.words)?;
    print_grade_result(&result, steps);
    Ok(())
}

fn run_batch_command(
    file: &Path,
    dictionary: &Dictionary,
    calendar: &AnswerCalendar,
) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let (records, mut unreadable) = read_share_records(&content);
    println!("🎯 Grading {} attempts...", records.len());

    let mut result = run_batch(&records, dictionary, Some(calendar), true);
    result.total_records += unreadable.len();
    unreadable.append(&mut result.failures);
    unreadable.sort_by_key(|failure| failure.line);
    result.failures = unreadable;

    print_batch_result(&result);
    Ok(())
}

fn run_benchmark_command(openers: &[String], count: usize, dictionary: &Dictionary) -> Result<()> {
    let openers = openers
        .iter()
        .map(Word::new)
        .collect::<Result<Vec<_>, _>>()?;

    let answers = sample_answers(&dictionary.answers, count, &mut rand::rng());
    println!(
        "Grading {} against {} random answers...",
        openers
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(", "),
        answers.len()
    );

    let result = run_benchmark(&openers, &answers, &dictionary.words)?;
    print_benchmark_result(&result);
    Ok(())
}
