//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, grade_bar, hints_to_emoji, tile};
use crate::commands::{AnswerResult, BatchResult, BenchmarkResult, FilterResult, GradeResult};
use colored::Colorize;

/// Print a graded attempt
pub fn print_grade_result(result: &GradeResult, steps: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    print!(
        "Answer: {}",
        result.answer.to_uppercase().bright_yellow().bold()
    );
    if let Some(date) = result.date {
        print!("  ({date})");
    }
    println!();
    println!("{}", "─".repeat(60).cyan());

    for (i, guess) in result.guesses.iter().enumerate() {
        println!(
            "\nGuess {}: {} {}",
            i + 1,
            colored_tiles(&guess.word, &guess.hints),
            hints_to_emoji(&guess.hints)
        );
        println!(
            "  Candidates:  {} → {}",
            guess.candidates_before, guess.candidates_after
        );
        println!("  Uncertainty: {:.3} bits", guess.uncertainty);
        println!(
            "  Bits:        {:.3} (expected {:.3})",
            guess.bits, guess.expected_bits
        );
        println!("  Probability: {:.4}", guess.probability);
        println!(
            "  Grade:       [{}] {:.3} {}",
            grade_bar(guess.grade, 20),
            guess.grade,
            guess.letter_grade.bold()
        );
        if let Some(violation) = guess.violation {
            println!("  {} {violation}", "Hard mode broken:".red());
        }

        if steps {
            for step in &guess.steps {
                println!(
                    "    {} pos {}  {:5} → {:5}  {:.3} bits",
                    tile(step.letter, step.hint),
                    step.position + 1,
                    step.candidates_before,
                    step.candidates_after,
                    step.bits
                );
            }
        }

        if !guess.sample.is_empty() && guess.candidates_after > 1 {
            let more = guess.candidates_after.saturating_sub(guess.sample.len());
            let listing = guess.sample.join(", ");
            if more > 0 {
                println!("  Remaining:   {listing} … (+{more})");
            } else {
                println!("  Remaining:   {listing}");
            }
        }
    }

    println!();
    let status = if result.solved {
        format!("✅ Solved in {} guesses", result.guesses.len())
            .green()
            .bold()
    } else {
        format!("❌ Not solved after {} guesses", result.guesses.len())
            .red()
            .bold()
    };
    println!("{status}");
    println!(
        "Hard mode:   {}",
        if result.hard_mode {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    println!(
        "Final grade: {} {}",
        format!("{:.3}", result.final_grade).bright_yellow().bold(),
        result.final_letter_grade.bold()
    );
}

/// Print filtered words
pub fn print_filter_result(result: &FilterResult) {
    println!("\n{} {}", "Constraints:".bright_cyan().bold(), result.snapshot);
    println!(
        "{} of {} words match",
        result.match_count.to_string().bright_yellow().bold(),
        result.total_words
    );

    for chunk in result.matches.chunks(10) {
        println!("  {}", chunk.join(" "));
    }
    if result.matches.len() < result.match_count {
        println!(
            "  {}",
            format!("… {} more", result.match_count - result.matches.len()).bright_black()
        );
    }
}

/// Print an answer lookup
pub fn print_answer_result(result: &AnswerResult) {
    match &result.answer {
        Some(answer) => println!(
            "#{} {}: {}",
            result.day_index,
            result.date,
            answer.to_uppercase().bright_green().bold()
        ),
        None => {
            println!(
                "#{} {}: {}",
                result.day_index,
                result.date,
                "no known answer".red()
            );
            if let Some(last) = result.last_date {
                println!("  Answers are known up to {last}");
            }
        }
    }
}

/// Print a batch summary
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Records:          {}", result.total_records);
    println!("   Graded:           {}", result.graded);
    println!("   Solved:           {}", result.solved);
    println!("   Hard mode:        {}", result.hard_mode);
    println!(
        "   Mean final grade: {}",
        format!("{:.3}", result.mean_final_grade)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved > 0 {
        println!("\n📈 {}", "Solved in:".bright_cyan().bold());
        for (i, &count) in result.distribution.iter().enumerate() {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".yellow().bold());
        for failure in result.failures.iter().take(10) {
            println!("   line {}: {}", failure.line, failure.reason);
        }
        if result.failures.len() > 10 {
            println!("   … {} more", result.failures.len() - 10);
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Per opener:".bright_cyan().bold());
    println!(
        "   {:<7} {:>6} {:>6} {:>8} {:>8} {:>10}",
        "word", "played", "solved", "bits", "grade", "remaining"
    );
    for opener in &result.openers {
        println!(
            "   {:<7} {:>6} {:>6} {:>8.3} {:>8.3} {:>10.1}",
            opener.word.to_uppercase(),
            opener.played,
            opener.solved,
            opener.mean_bits,
            opener.mean_grade,
            opener.mean_remaining
        );
    }

    println!("\n   Answers sampled:  {}", result.total_answers);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Answers/second:   {:.1}", result.answers_per_second);
}
