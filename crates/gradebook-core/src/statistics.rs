//! Per-student score statistics and letter grading.

use serde::{Deserialize, Serialize};

use crate::model::Grade;

/// Lower bound (inclusive) of each grade, checked from the top down.
const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (85.0, Grade::A),
    (75.0, Grade::B),
    (65.0, Grade::C),
    (50.0, Grade::D),
];

/// Summary of a score sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Arithmetic mean, 0.0 when there are no scores.
    pub average: f64,
    /// Highest score, 0 when there are no scores.
    pub max: i64,
    /// Lowest score, 0 when there are no scores.
    pub min: i64,
    /// Grade of the average.
    pub grade: Grade,
}

/// Compute average, max, min and grade for a score sequence.
///
/// An empty sequence yields zeros and grade E. No range checks are done here;
/// out-of-range values stored on disk are summarised as they are.
pub fn compute_stats(scores: &[i64]) -> Stats {
    let (average, max, min) = match (scores.iter().max(), scores.iter().min()) {
        (Some(&max), Some(&min)) => {
            let sum: f64 = scores.iter().map(|&s| s as f64).sum();
            (sum / scores.len() as f64, max, min)
        }
        _ => (0.0, 0, 0),
    };

    Stats {
        average,
        max,
        min,
        grade: determine_grade(average),
    }
}

/// Map an average to a letter grade.
pub fn determine_grade(average: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(lower, _)| average >= *lower)
        .map(|&(_, grade)| grade)
        .unwrap_or(Grade::E)
}
