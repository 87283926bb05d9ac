//! One graded guess, linked to the guess before it

use super::hard_mode::{HardModeViolation, check_hard_mode};
use super::letter::Letter;
use crate::core::{GradeError, Hints, MAX_GUESSES, WORD_LENGTH, Word};
use crate::solver::information::{InformationMetrics, expected_bits};
use crate::solver::{CandidateList, ConstraintSnapshot, ResolutionOrder};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A submitted word, graded against the answer and everything learned before it
///
/// Guesses are immutable once built. Each one holds a shared handle to its
/// predecessor and never to a later guess.
#[derive(Debug)]
pub struct Guess {
    id: u64,
    word: Word,
    index: usize,
    answer: Word,
    previous: Option<Arc<Guess>>,
    hints: Hints,
    order: ResolutionOrder,
    /// In original position order
    letters: Vec<Letter>,
    start: CandidateList,
    snapshot: ConstraintSnapshot,
    candidates: CandidateList,
    metrics: InformationMetrics,
    hard_mode: bool,
    hard_mode_violation: Option<HardModeViolation>,
}

impl Guess {
    /// Grade the opening guess of an attempt against the full dictionary
    ///
    /// # Errors
    /// Returns `GradeError::InvalidConstraintShape` if the hints contradict
    /// themselves, which classification never produces.
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::chain::Guess;
    /// use wordle_grader::core::Word;
    /// use wordle_grader::solver::CandidateList;
    ///
    /// let dictionary: CandidateList = ["shall", "shawl", "small", "heart"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let answer = Word::new("shall").unwrap();
    ///
    /// let guess = Guess::first(Word::new("heart").unwrap(), answer, &dictionary).unwrap();
    /// assert_eq!(guess.candidates().len(), 2);
    /// assert!(!guess.is_correct());
    /// ```
    pub fn first(word: Word, answer: Word, dictionary: &CandidateList) -> Result<Self, GradeError> {
        Self::build(word, 0, answer, None, dictionary.clone())
    }

    /// Grade the next guess of the attempt `previous` belongs to
    ///
    /// # Errors
    /// Returns `GradeError::AttemptFinished` if `previous` already used the last
    /// slot or already found the answer.
    pub fn after(word: Word, previous: &Arc<Self>) -> Result<Self, GradeError> {
        if previous.is_complete() {
            return Err(GradeError::AttemptFinished {
                guesses: previous.index + 1,
            });
        }

        Self::build(
            word,
            previous.index + 1,
            previous.answer,
            Some(Arc::clone(previous)),
            previous.candidates.clone(),
        )
    }

    fn build(
        word: Word,
        index: usize,
        answer: Word,
        previous: Option<Arc<Self>>,
        start: CandidateList,
    ) -> Result<Self, GradeError> {
        let hints = Hints::classify(&word, &answer);
        let order = ResolutionOrder::new(&hints);
        let carried = previous
            .as_ref()
            .map_or_else(ConstraintSnapshot::empty, |p| p.snapshot);

        let steps = order.resolve(&word, &hints, &carried)?;

        let mut letters = Vec::with_capacity(WORD_LENGTH);
        let mut candidates = start.clone();
        let mut bits = 0.0;
        for step in &steps {
            let letter = Letter::resolve(step, &candidates);
            let resolution = letter.resolution()?;
            bits += resolution.metrics.bits;
            candidates = resolution.candidates.clone();
            letters.push(letter);
        }
        letters.sort_by_key(Letter::position);

        let snapshot = steps[WORD_LENGTH - 1].snapshot;
        let mut metrics = InformationMetrics::with_bits(start.len(), candidates.len(), bits);
        if word == answer {
            metrics = metrics.solved();
        }

        let hard_mode_violation = previous
            .as_ref()
            .and_then(|p| check_hard_mode(&p.word, &p.hints, &word, &hints).err());
        let hard_mode = previous.as_ref().is_none_or(|p| p.hard_mode) && hard_mode_violation.is_none();

        debug!(
            "guess {} '{word}' {hints}: {} -> {} candidates, {bits:.3} bits, grade {:.3}",
            index + 1,
            start.len(),
            candidates.len(),
            metrics.grade
        );

        Ok(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            word,
            index,
            answer,
            previous,
            hints,
            order,
            letters,
            start,
            snapshot,
            candidates,
            metrics,
            hard_mode,
            hard_mode_violation,
        })
    }

    /// Process-unique identifier, increasing in construction order
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// 0-based slot within the attempt
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Self> {
        self.previous.as_deref()
    }

    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    #[must_use]
    pub const fn order(&self) -> &ResolutionOrder {
        &self.order
    }

    /// Letters in original position order
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Letters in the order they were resolved
    pub fn resolved_letters(&self) -> impl Iterator<Item = &Letter> {
        self.order
            .positions()
            .iter()
            .map(|&position| &self.letters[position])
    }

    /// Candidates this guess started from
    #[must_use]
    pub const fn starting_candidates(&self) -> &CandidateList {
        &self.start
    }

    /// Candidates left after every letter was resolved
    #[must_use]
    pub const fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Everything known after this guess
    #[must_use]
    pub const fn snapshot(&self) -> &ConstraintSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn metrics(&self) -> &InformationMetrics {
        &self.metrics
    }

    #[must_use]
    pub const fn bits(&self) -> f64 {
        self.metrics.bits
    }

    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.metrics.grade
    }

    /// Bits this word was expected to earn against its starting candidates
    #[must_use]
    pub fn expected_bits(&self) -> f64 {
        expected_bits(&self.word, &self.start)
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.word == self.answer
    }

    /// The attempt ends with this guess: it found the answer or used the last slot
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_correct() || self.index + 1 >= MAX_GUESSES
    }

    /// The attempt ended here without finding the answer
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.is_complete() && !self.is_correct()
    }

    /// This guess and every guess before it kept to hard mode
    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// The rule this guess itself broke, if any
    #[must_use]
    pub const fn hard_mode_violation(&self) -> Option<HardModeViolation> {
        self.hard_mode_violation
    }

    /// This guess followed by its predecessors, newest first
    pub fn history(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |guess| guess.previous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{fixture_dictionary, word};

    fn chain(words: &[&str], answer: &str) -> Vec<Arc<Guess>> {
        let dictionary = fixture_dictionary();
        let answer = word(answer);
        let mut guesses: Vec<Arc<Guess>> = Vec::new();
        for &text in words {
            let guess = match guesses.last() {
                Some(previous) => Guess::after(word(text), previous).unwrap(),
                None => Guess::first(word(text), answer, &dictionary).unwrap(),
            };
            guesses.push(Arc::new(guess));
        }
        guesses
    }

    #[test]
    fn shall_chain() {
        let guesses = chain(&["found", "heart", "clash", "shawl", "shall"], "shall");

        let correct: Vec<bool> = guesses.iter().map(|g| g.is_correct()).collect();
        assert_eq!(correct, [false, false, false, false, true]);

        let remaining: Vec<usize> = guesses.iter().map(|g| g.candidates().len()).collect();
        assert_eq!(remaining, [264, 4, 2, 1, 1]);
        assert_eq!(guesses[0].starting_candidates().len(), 758);

        for pair in guesses.windows(2) {
            let expected = pair[0].metrics().uncertainty - pair[0].bits();
            assert!((pair[1].metrics().uncertainty - expected).abs() < 1e-9);
        }

        assert!((guesses[4].grade() - 1.0).abs() < f64::EPSILON);
        assert!(guesses.iter().all(|g| g.hard_mode()));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn guess_bits_are_the_sum_of_letter_bits() {
        for guess in chain(&["found", "heart", "clash", "shawl", "shall"], "shall") {
            let mut sum = 0.0;
            for letter in guess.resolved_letters() {
                sum += letter.bits().unwrap();
            }
            assert_eq!(sum, guess.bits());
        }
    }

    #[test]
    fn candidates_shrink_per_letter() {
        let guesses = chain(&["found", "heart"], "shall");
        let heart = &guesses[1];

        let mut previous = heart.starting_candidates().len();
        let mut sizes = Vec::new();
        for letter in heart.resolved_letters() {
            let size = letter.resolution().unwrap().candidates.len();
            assert!(size <= previous);
            previous = size;
            sizes.push(size);
        }
        assert_eq!(sizes, [83, 22, 11, 4, 4]);
    }

    #[test]
    fn letters_keep_position_order_and_resolution_rank() {
        let guesses = chain(&["clash"], "shall");
        let clash = &guesses[0];

        let positions: Vec<usize> = clash.letters().iter().map(Letter::position).collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);

        let ranks: Vec<usize> = clash
            .letters()
            .iter()
            .map(|l| l.resolution_index().unwrap())
            .collect();
        assert_eq!(ranks, [4, 1, 0, 2, 3]);
    }

    #[test]
    fn solved_in_two() {
        let guesses = chain(&["stone", "snout"], "snout");
        assert_eq!(guesses[0].candidates().len(), 1);
        assert_eq!(guesses[0].candidates()[0].text(), "snout");
        assert!((guesses[1].grade() - 1.0).abs() < f64::EPSILON);
        assert!(guesses[1].bits().abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_letter_answer_survives() {
        let guesses = chain(&["worry"], "renew");
        let texts: Vec<&str> = guesses[0].candidates().iter().map(Word::text).collect();
        assert_eq!(texts, ["renew"]);
    }

    #[test]
    fn completion_flags() {
        let guesses = chain(&["found", "heart", "clash", "shawl", "shall"], "shall");
        assert!(!guesses[3].is_complete());
        assert!(guesses[4].is_complete());
        assert!(!guesses[4].is_busted());

        let guesses = chain(
            &["found", "heart", "clash", "small", "chalk", "shawl"],
            "shall",
        );
        assert!(guesses[5].is_complete());
        assert!(guesses[5].is_busted());
        assert!(guesses[..5].iter().all(|g| !g.is_complete()));
    }

    #[test]
    fn no_guess_after_the_answer() {
        let guesses = chain(&["stone", "snout"], "snout");
        assert_eq!(
            Guess::after(word("shall"), &guesses[1]).unwrap_err(),
            GradeError::AttemptFinished { guesses: 2 }
        );
    }

    #[test]
    fn hard_mode_is_sticky() {
        let guesses = chain(&["heart", "found", "shall"], "shall");
        let flags: Vec<bool> = guesses.iter().map(|g| g.hard_mode()).collect();
        assert_eq!(flags, [true, false, false]);
        assert!(guesses[1].hard_mode_violation().is_some());
        assert!(guesses[2].hard_mode_violation().is_none());
    }

    #[test]
    fn hard_mode_reuses_yellows() {
        let guesses = chain(&["woman", "await"], "await");
        assert!(guesses[1].hard_mode());
        assert_eq!(guesses[0].candidates().len(), 5);

        // The green 'r' of "crane" is dropped by "slate"
        let guesses = chain(&["crane", "slate", "irate"], "trace");
        let flags: Vec<bool> = guesses.iter().map(|g| g.hard_mode()).collect();
        assert_eq!(flags, [true, false, false]);
        assert_eq!(
            guesses[1].hard_mode_violation(),
            Some(HardModeViolation::MovedCorrect {
                position: 1,
                letter: b'r'
            })
        );

        let guesses = chain(&["cater", "slate"], "trace");
        assert_eq!(
            guesses[1].hard_mode_violation(),
            Some(HardModeViolation::MissingPresent { letter: b'c' })
        );
    }

    #[test]
    fn history_walks_backwards() {
        let guesses = chain(&["found", "heart", "clash"], "shall");
        let words: Vec<&str> = guesses[2].history().map(|g| g.word().text()).collect();
        assert_eq!(words, ["clash", "heart", "found"]);
        assert!(guesses[0].previous().is_none());
        assert!(guesses[0].id() < guesses[2].id());
    }

    #[test]
    fn expected_bits_are_bounded_by_uncertainty() {
        let guesses = chain(&["found", "heart"], "shall");
        for guess in &guesses {
            let expected = guess.expected_bits();
            assert!(expected > 0.0);
            assert!(expected <= guess.metrics().uncertainty + 1e-9);
        }
    }
}
