//! Scoring-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Too few questions answered to produce a result.
    #[error("Test incomplete: {completeness} completed. At least {required} required.")]
    IncompleteInput {
        completeness: Percentage,
        required: Percentage,
    },

    /// A string that is not one of the sixteen type codes.
    #[error("Unknown type code: '{0}'")]
    UnknownTypeCode(String),

    /// An answer whose value or pole cannot be scored.
    #[error("Malformed answer for question '{question_id}': {reason}")]
    MalformedAnswer { question_id: String, reason: String },
}

impl ScoringError {
    pub fn incomplete(completeness: Percentage, required: Percentage) -> Self {
        ScoringError::IncompleteInput {
            completeness,
            required,
        }
    }

    pub fn unknown_type_code(code: impl Into<String>) -> Self {
        ScoringError::UnknownTypeCode(code.into())
    }

    pub fn malformed(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoringError::MalformedAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::IncompleteInput { .. } => ErrorCode::IncompleteInput,
            ScoringError::UnknownTypeCode(_) => ErrorCode::UnknownTypeCode,
            ScoringError::MalformedAnswer { .. } => ErrorCode::MalformedAnswer,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.to_string());
        match err {
            ScoringError::IncompleteInput {
                completeness,
                required,
            } => error
                .with_detail("completeness", completeness.value().to_string())
                .with_detail("required", required.value().to_string()),
            ScoringError::UnknownTypeCode(type_code) => error.with_detail("type_code", type_code),
            ScoringError::MalformedAnswer { question_id, .. } => {
                error.with_detail("question_id", question_id)
            }
        }
    }
}
