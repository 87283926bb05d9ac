//! Word list loading utilities
//!
//! Lists are plain text (one word per line) or, for `.json` files, a JSON
//! array of strings.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns valid words in file order, skipping (and logging) invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or if a `.json` file is not
/// an array of strings.
///
/// # Examples
/// ```no_run
/// use wordle_grader::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        words_from_json(&content)
    } else {
        Ok(words_from_lines(&content))
    }
}

/// Parse one word per line, ignoring blank lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    words_from_entries(content.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Parse a JSON array of strings
///
/// # Errors
///
/// Returns an `InvalidData` error if the content is not a JSON string array.
pub fn words_from_json(content: &str) -> io::Result<Vec<Word>> {
    let entries: Vec<String> = serde_json::from_str(content)?;
    Ok(words_from_entries(entries.iter().map(String::as_str)))
}

/// Convert string entries to words, skipping invalid ones
///
/// # Examples
/// ```
/// use wordle_grader::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "SLATE"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_entries(slice.iter().copied())
}

fn words_from_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    entries
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping word list entry {entry:?}: {e}");
                None
            }
        })
        .collect()
}
