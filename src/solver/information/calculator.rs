//! Information scoring of a narrowing step
//!
//! Every metric is a pure function of the candidate count before a step (n0)
//! and after it (n1). Steps can be single letters or whole guesses.

use crate::core::{Hints, Word};
use rustc_hash::FxHashMap;

/// Information metrics of one narrowing step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InformationMetrics {
    /// Candidates before the step (n0)
    pub candidates_before: usize,
    /// Candidates after the step (n1)
    pub candidates_after: usize,
    /// log₂(n0), or 0 when n0 ≤ 1
    pub uncertainty: f64,
    /// n1 / n0, or 0 when n0 = 0
    pub probability: f64,
    /// -log₂(probability), capped at `uncertainty` when probability is 0
    pub bits: f64,
    /// bits / uncertainty, or 0 when there was no uncertainty
    pub percentage: f64,
    /// 1 - (1 - percentage)²
    pub grade: f64,
}

impl InformationMetrics {
    /// Measure a step from its candidate counts
    ///
    /// # Examples
    /// ```
    /// use wordle_grader::solver::information::InformationMetrics;
    ///
    /// let metrics = InformationMetrics::measure(1024, 4);
    /// assert_eq!(metrics.uncertainty, 10.0);
    /// assert_eq!(metrics.bits, 8.0);
    /// assert!((metrics.grade - 0.96).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn measure(candidates_before: usize, candidates_after: usize) -> Self {
        let uncertainty = uncertainty(candidates_before);
        let probability = probability(candidates_before, candidates_after);
        Self::with_bits(
            candidates_before,
            candidates_after,
            bits(probability, uncertainty),
        )
    }

    /// Build metrics for a step whose bits were accumulated elsewhere
    ///
    /// Used for whole guesses, whose bits are the sum of their letters' bits.
    #[must_use]
    pub fn with_bits(candidates_before: usize, candidates_after: usize, bits: f64) -> Self {
        let uncertainty = uncertainty(candidates_before);
        let percentage = percentage(bits, uncertainty);
        Self {
            candidates_before,
            candidates_after,
            uncertainty,
            probability: probability(candidates_before, candidates_after),
            bits,
            percentage,
            grade: grade(percentage),
        }
    }

    /// The same metrics with the grade forced to 1 (the guess was the answer)
    #[must_use]
    pub const fn solved(self) -> Self {
        Self { grade: 1.0, ..self }
    }
}

/// Bits needed to single out one of `count` candidates
#[must_use]
pub fn uncertainty(count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        (count as f64).log2()
    }
}

/// Share of candidates that survived a step
#[must_use]
pub fn probability(before: usize, after: usize) -> f64 {
    if before == 0 {
        0.0
    } else {
        after as f64 / before as f64
    }
}

/// Information gained by a step with the given survival probability
///
/// A probability of 0 (nothing survived) is capped at the full uncertainty
/// rather than treated as infinite.
#[must_use]
pub fn bits(probability: f64, uncertainty: f64) -> f64 {
    if probability > 0.0 {
        // Subtracting from 0.0 keeps -log2(1) at +0.0 instead of -0.0
        0.0 - probability.log2()
    } else {
        uncertainty
    }
}

/// Fraction of the uncertainty removed by a step
#[must_use]
pub fn percentage(bits: f64, uncertainty: f64) -> f64 {
    if uncertainty > 0.0 {
        bits / uncertainty
    } else {
        0.0
    }
}

/// Squared-shortfall grade curve
#[must_use]
pub fn grade(percentage: f64) -> f64 {
    let shortfall = 1.0 - percentage;
    1.0 - shortfall * shortfall
}

/// Expected bits a guess would earn against a candidate list
///
/// Shannon entropy of the hint patterns the guess produces across all
/// candidates: H = -Σ p · log₂(p). Reported next to the bits actually earned.
///
/// # Examples
/// ```
/// use wordle_grader::core::Word;
/// use wordle_grader::solver::information::expected_bits;
///
/// let guess = Word::new("shall").unwrap();
/// let candidates = [Word::new("shall").unwrap(), Word::new("vapid").unwrap()];
/// assert!((expected_bits(&guess, &candidates) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn expected_bits(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut pattern_counts: FxHashMap<Hints, usize> = FxHashMap::default();
    for candidate in candidates {
        *pattern_counts
            .entry(Hints::classify(guess, candidate))
            .or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncertainty_edges() {
        assert!(uncertainty(0).abs() < f64::EPSILON);
        assert!(uncertainty(1).abs() < f64::EPSILON);
        assert!((uncertainty(2) - 1.0).abs() < f64::EPSILON);
        assert!((uncertainty(8192) - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn probability_edges() {
        assert!(probability(0, 0).abs() < f64::EPSILON);
        assert!((probability(4, 1) - 0.25).abs() < f64::EPSILON);
        assert!((probability(4, 4) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bits_halving() {
        let metrics = InformationMetrics::measure(264, 132);
        assert!((metrics.bits - 1.0).abs() < 1e-12);
        assert!((metrics.probability - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn no_narrowing_earns_nothing() {
        let metrics = InformationMetrics::measure(100, 100);
        assert!(metrics.bits.abs() < f64::EPSILON);
        assert!(metrics.bits.is_sign_positive());
        assert!(metrics.grade.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_result_is_capped_at_uncertainty() {
        let metrics = InformationMetrics::measure(16, 0);
        assert!(metrics.probability.abs() < f64::EPSILON);
        assert!((metrics.bits - 4.0).abs() < f64::EPSILON);
        assert!((metrics.percentage - 1.0).abs() < f64::EPSILON);
        assert!((metrics.grade - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nothing_to_learn_from_single_candidate() {
        let metrics = InformationMetrics::measure(1, 1);
        assert!(metrics.uncertainty.abs() < f64::EPSILON);
        assert!(metrics.bits.abs() < f64::EPSILON);
        assert!(metrics.percentage.abs() < f64::EPSILON);
        assert!(metrics.grade.abs() < f64::EPSILON);

        let metrics = InformationMetrics::measure(0, 0);
        assert!(metrics.bits.abs() < f64::EPSILON);
    }

    #[test]
    fn grade_curve() {
        assert!(grade(0.0).abs() < f64::EPSILON);
        assert!((grade(0.5) - 0.75).abs() < f64::EPSILON);
        assert!((grade(1.0) - 1.0).abs() < f64::EPSILON);
        // The curve rewards early progress more than late progress
        assert!(grade(0.25) > 0.25);
    }

    #[test]
    fn solved_overrides_grade_only() {
        let metrics = InformationMetrics::measure(1, 1).solved();
        assert!((metrics.grade - 1.0).abs() < f64::EPSILON);
        assert!(metrics.bits.abs() < f64::EPSILON);
    }

    #[test]
    fn with_bits_uses_supplied_bits() {
        let metrics = InformationMetrics::with_bits(1024, 4, 8.0);
        assert!((metrics.percentage - 0.8).abs() < 1e-12);
        assert!((metrics.probability - 4.0 / 1024.0).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_bits_bounds() {
        let words: Vec<Word> = ["shall", "shawl", "small", "clash", "heart", "found"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let guess = Word::new("shall").unwrap();

        let entropy = expected_bits(&guess, &words);
        assert!(entropy > 0.0);
        assert!(entropy <= (words.len() as f64).log2() + 1e-12);
        assert!(expected_bits(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_bits_zero_when_all_patterns_match() {
        let guess = Word::new("zzzzz").unwrap();
        let words: Vec<Word> = ["aaaaa", "bbbbb", "ccccc"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        assert!(expected_bits(&guess, &words).abs() < 1e-12);
    }
}
