//! Shared test dictionary

use crate::core::Word;
use crate::solver::CandidateList;

const FIXTURE_WORDS: &str = include_str!("../tests/fixtures/words.txt");

/// Every word of the fixture dictionary, in file order
pub fn fixture_words() -> Vec<Word> {
    FIXTURE_WORDS
        .split_whitespace()
        .map(|w| Word::new(w).unwrap())
        .collect()
}

/// The fixture dictionary as a candidate list
pub fn fixture_dictionary() -> CandidateList {
    CandidateList::new(fixture_words())
}

pub fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}
