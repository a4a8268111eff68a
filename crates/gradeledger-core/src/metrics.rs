//! Deterministic scoring engine.
//!
//! Pure integer functions over a student's grade history and inputs.
//! Everything here floors: means truncate, the improvement rate truncates,
//! and the weighted prediction truncates. No floats, no randomness, so a
//! given input always reproduces the same score.

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Study hours per week treated as a full load; anything at or above this
/// normalizes to 100.
pub const FULL_STUDY_LOAD_HOURS: u8 = 40;

/// Integer-floor mean of a grade history. Zero for an empty history.
pub fn average_grade(grades: &[u8]) -> u8 {
    if grades.is_empty() {
        return 0;
    }
    let sum: u32 = grades.iter().map(|&g| u32::from(g)).sum();
    (sum / grades.len() as u32) as u8
}

/// Percentage growth between the first and second half of the grade
/// history, in [0,100].
///
/// The first half is `grades[..n/2]`; the second half is the remainder
/// (always at least as long). Fewer than two grades, a zero first-half
/// mean, or a second-half mean that does not exceed the first all yield
/// zero — there is no signed rate, so decline reads as zero rather than
/// negative. The rate is clamped to 100.
pub fn improvement_rate(grades: &[u8]) -> u8 {
    if grades.len() < 2 {
        return 0;
    }
    let mid = grades.len() / 2;
    let first = u32::from(average_grade(&grades[..mid]));
    let second = u32::from(average_grade(&grades[mid..]));
    if first == 0 || second <= first {
        return 0;
    }
    (((second - first) * 100) / first).min(100) as u8
}

/// Scale weekly study hours to a 0–100 range, capped at a 40-hour load.
pub fn normalized_study_hours(hours: u8) -> u8 {
    ((u32::from(hours) * 100) / u32::from(FULL_STUDY_LOAD_HOURS)).min(100) as u8
}

/// Weighted prediction: 50% average grade, 30% attendance, 20% normalized
/// study hours, floored and capped at 100.
///
/// The cap is redundant for in-range inputs but kept as an explicit
/// safety bound.
pub fn predict_score(average: u8, attendance_pct: u8, normalized_hours: u8) -> u8 {
    let weighted = u32::from(average) * 50
        + u32::from(attendance_pct) * 30
        + u32::from(normalized_hours) * 20;
    ((weighted / 100).min(100)) as u8
}

impl Category {
    /// Map a predicted score to its category. Thresholds are evaluated in
    /// descending order; the first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Category::Excellent,
            75.. => Category::Good,
            60.. => Category::Average,
            _ => Category::NeedsImprovement,
        }
    }
}

/// Outcome of an explicit prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub score: u8,
    pub category: Category,
    pub confidence: u8,
}

impl Prediction {
    /// Run the full prediction pipeline over raw inputs.
    pub fn compute(grades: &[u8], attendance_pct: u8, study_hours: u8) -> Self {
        let average = average_grade(grades);
        let normalized = normalized_study_hours(study_hours);
        let score = predict_score(average, attendance_pct, normalized);
        let category = Category::from_score(score);
        Self {
            score,
            category,
            confidence: category.confidence(),
        }
    }
}
