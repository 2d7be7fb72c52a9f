//! Errors surfaced by test-session operations.

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, SessionId, ValidationError};
use crate::domain::personality::TypeCode;
use crate::domain::scoring::ScoringError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Session was not found.
    NotFound(SessionId),
    /// Too few answers to produce a result; the user should keep answering.
    Incomplete {
        completeness: Percentage,
        required: Percentage,
    },
    /// A type code that is not one of the sixteen.
    UnknownTypeCode(String),
    /// A valid code with no descriptive content.
    ProfileNotFound(TypeCode),
    /// Bad question, answer or navigation input.
    ValidationFailed { field: String, message: String },
    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl QuizError {
    pub fn not_found(id: SessionId) -> Self {
        QuizError::NotFound(id)
    }
    pub fn profile_not_found(code: TypeCode) -> Self {
        QuizError::ProfileNotFound(code)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuizError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuizError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::NotFound(_) => ErrorCode::SessionNotFound,
            QuizError::Incomplete { .. } => ErrorCode::IncompleteInput,
            QuizError::UnknownTypeCode(_) => ErrorCode::UnknownTypeCode,
            QuizError::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            QuizError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuizError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            QuizError::NotFound(id) => format!("Session not found: {}", id),
            QuizError::Incomplete {
                completeness,
                required,
            } => format!(
                "Test incomplete: {} completed. At least {} required.",
                completeness, required
            ),
            QuizError::UnknownTypeCode(code) => format!("Unknown type code: '{}'", code),
            QuizError::ProfileNotFound(code) => format!("No travel profile for {}", code),
            QuizError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            QuizError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// True when the user should be sent back into the question flow.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, QuizError::Incomplete { .. })
    }
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuizError {}

impl From<ScoringError> for QuizError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::IncompleteInput {
                completeness,
                required,
            } => QuizError::Incomplete {
                completeness,
                required,
            },
            ScoringError::UnknownTypeCode(code) => QuizError::UnknownTypeCode(code),
            ScoringError::MalformedAnswer {
                question_id,
                reason,
            } => QuizError::validation(question_id, reason),
        }
    }
}

impl From<ValidationError> for QuizError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
            ValidationError::UnknownReference { kind, .. } => kind.to_string(),
        };
        QuizError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for QuizError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::UnknownQuestion
            | ErrorCode::UnknownAnswer => QuizError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => QuizError::Infrastructure(err.to_string()),
        }
    }
}
