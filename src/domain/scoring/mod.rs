//! Scoring module - from recorded answers to a type code.
//!
//! - `accumulator` - Signed sums and counts per dimension, then averages
//! - `type_resolver` - One letter per dimension, with a fallback code
//! - `confidence` - Overall decisiveness as a percentage
//! - `strength` - Qualitative label per dimension
//! - `validator` - Completeness, pole coverage and value checks
//! - `engine` - Ties the pieces together behind the completeness gate

mod accumulator;
mod confidence;
mod engine;
mod errors;
mod result;
mod score_vector;
mod strength;
mod type_resolver;
mod validator;

pub use accumulator::ScoreAccumulator;
pub use confidence::ConfidenceEstimator;
pub use engine::ScoringEngine;
pub use errors::ScoringError;
pub use result::{DimensionScore, QuizResult};
pub use score_vector::ScoreVector;
pub use strength::{Strength, CLEAR_THRESHOLD, MODERATE_THRESHOLD, VERY_CLEAR_THRESHOLD};
pub use type_resolver::TypeResolver;
pub use validator::{
    AnswerIssue, AnswerSetValidator, ValidationReport, DEFAULT_COMPLETENESS_THRESHOLD,
    DEFAULT_EXPECTED_QUESTIONS,
};
