//! School-style letter grades for 0-1 scores

/// Lower bounds of each letter grade, best first
const THRESHOLDS: [(f64, &str); 12] = [
    (0.97, "A+"),
    (0.93, "A"),
    (0.90, "A-"),
    (0.87, "B+"),
    (0.83, "B"),
    (0.80, "B-"),
    (0.77, "C+"),
    (0.73, "C"),
    (0.70, "C-"),
    (0.67, "D+"),
    (0.63, "D"),
    (0.60, "D-"),
];

/// Convert a 0-1 grade to a letter grade ("A+" down to "F")
///
/// # Examples
/// ```
/// use wordle_grader::solver::information::letter_grade;
///
/// assert_eq!(letter_grade(1.0), "A+");
/// assert_eq!(letter_grade(0.85), "B");
/// assert_eq!(letter_grade(0.2), "F");
/// ```
#[must_use]
pub fn letter_grade(grade: f64) -> &'static str {
    THRESHOLDS
        .iter()
        .find(|&&(bound, _)| grade >= bound)
        .map_or("F", |&(_, letter)| letter)
}

/// Letter grade spelled out for screen readers ("b plus", "a minus")
#[must_use]
pub fn letter_grade_spoken(grade: f64) -> String {
    letter_grade(grade)
        .to_lowercase()
        .replace('+', " plus")
        .replace('-', " minus")
}
