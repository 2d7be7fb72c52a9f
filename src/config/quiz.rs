//! Quiz and scoring configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::foundation::Percentage;
use crate::domain::personality::TypeCode;
use crate::domain::scoring::{
    AnswerSetValidator, ConfidenceEstimator, ScoringEngine, TypeResolver,
};

/// Scoring and catalog settings
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Questions in a full run, used when no catalog is at hand
    #[serde(default = "default_expected_questions")]
    pub expected_questions: usize,

    /// Minimum completeness percentage before a result is produced
    #[serde(default = "default_completeness_threshold")]
    pub completeness_threshold: u8,

    /// Type code shown when the resolved code has no profile
    #[serde(default = "default_type_code")]
    pub default_type_code: String,

    /// Largest absolute answer value
    #[serde(default = "default_max_answer_magnitude")]
    pub max_answer_magnitude: f64,

    /// Replaces the embedded question catalog
    pub questions_path: Option<PathBuf>,

    /// Replaces the embedded personality catalog
    pub personality_types_path: Option<PathBuf>,
}

impl QuizConfig {
    /// Parsed fallback type code
    pub fn default_type(&self) -> Result<TypeCode, ValidationError> {
        self.default_type_code
            .parse()
            .map_err(|_| ValidationError::InvalidDefaultTypeCode(self.default_type_code.clone()))
    }

    /// Builds the scoring engine these settings describe
    pub fn scoring_engine(&self) -> Result<ScoringEngine, ValidationError> {
        self.validate()?;
        Ok(ScoringEngine::new(
            TypeResolver::new(self.default_type()?),
            ConfidenceEstimator::new(self.max_answer_magnitude),
            AnswerSetValidator::new(
                self.expected_questions,
                Percentage::new(self.completeness_threshold),
                self.max_answer_magnitude,
            ),
        ))
    }

    /// Validate quiz configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.completeness_threshold > 100 {
            return Err(ValidationError::InvalidCompletenessThreshold(
                self.completeness_threshold,
            ));
        }
        if self.expected_questions == 0 {
            return Err(ValidationError::InvalidExpectedQuestions);
        }
        if !self.max_answer_magnitude.is_finite() || self.max_answer_magnitude <= 0.0 {
            return Err(ValidationError::InvalidAnswerMagnitude);
        }
        self.default_type()?;
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            expected_questions: default_expected_questions(),
            completeness_threshold: default_completeness_threshold(),
            default_type_code: default_type_code(),
            max_answer_magnitude: default_max_answer_magnitude(),
            questions_path: None,
            personality_types_path: None,
        }
    }
}

fn default_expected_questions() -> usize {
    18
}

fn default_completeness_threshold() -> u8 {
    70
}

fn default_type_code() -> String {
    "ENFP".to_string()
}

fn default_max_answer_magnitude() -> f64 {
    2.0
}
