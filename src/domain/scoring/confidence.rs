//! Overall confidence in a result.

use super::ScoreVector;
use crate::domain::foundation::Percentage;
use crate::domain::quiz::MAX_ANSWER_MAGNITUDE;

/// Maps the mean absolute score onto 0-100.
///
/// `round(clamp(mean(|score|) / max_magnitude * 100, 0, 100))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEstimator {
    max_magnitude: f64,
}

impl Default for ConfidenceEstimator {
    fn default() -> Self {
        Self {
            max_magnitude: MAX_ANSWER_MAGNITUDE,
        }
    }
}

impl ConfidenceEstimator {
    /// Non-positive or non-finite magnitudes fall back to the default.
    pub fn new(max_magnitude: f64) -> Self {
        if max_magnitude.is_finite() && max_magnitude > 0.0 {
            Self { max_magnitude }
        } else {
            Self::default()
        }
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn estimate(&self, scores: &ScoreVector) -> Percentage {
        Percentage::from_f64_rounded(scores.mean_magnitude() / self.max_magnitude * 100.0)
    }
}
