//! The scored outcome of a test.

use serde::{Deserialize, Serialize};

use super::{ScoreVector, Strength};
use crate::domain::foundation::Percentage;
use crate::domain::personality::TypeCode;
use crate::domain::quiz::{Dimension, Pole};

/// Breakdown of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
    /// The letter chosen for this dimension.
    pub preference: Pole,
    pub strength: Strength,
}

impl DimensionScore {
    pub fn from_score(dimension: Dimension, score: f64) -> Self {
        Self {
            dimension,
            score,
            preference: dimension.pole_for_score(score),
            strength: Strength::for_score(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub type_code: TypeCode,
    pub scores: ScoreVector,
    pub confidence: Percentage,
    pub dimension_scores: Vec<DimensionScore>,
}

impl QuizResult {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimension_scores.iter().find(|d| d.dimension == dimension)
    }
}
