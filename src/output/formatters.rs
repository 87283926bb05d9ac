//! Formatting utilities for terminal output

use crate::core::{Hint, Hints, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Format hints as an emoji string
#[must_use]
pub fn hints_to_emoji(hints: &Hints) -> String {
    hints.to_emoji()
}

/// Render a word as colored tiles, one per letter
#[must_use]
pub fn colored_tiles(word: &str, hints: &Hints) -> String {
    word.chars()
        .take(WORD_LENGTH)
        .enumerate()
        .map(|(i, ch)| tile(ch, hints[i]).to_string())
        .collect()
}

/// A single letter tile
#[must_use]
pub fn tile(letter: char, hint: Hint) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match hint {
        Hint::Correct => text.black().on_green().bold(),
        Hint::Present => text.black().on_yellow().bold(),
        Hint::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a 0-1 grade, colored by how good it is
#[must_use]
pub fn grade_bar(grade: f64, width: usize) -> ColoredString {
    let bar = create_progress_bar(grade, 1.0, width);
    if grade >= 0.9 {
        bar.green()
    } else if grade >= 0.7 {
        bar.yellow()
    } else {
        bar.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_for_hints() {
        let hints = Hints::parse("GY---").unwrap();
        assert_eq!(hints_to_emoji(&hints), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn tiles_keep_letters() {
        colored::control::set_override(false);
        let hints = Hints::parse("GY---").unwrap();
        assert_eq!(colored_tiles("heart", &hints), " H  E  A  R  T ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }
}
