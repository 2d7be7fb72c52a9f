//! Session Store Port - Interface for persisting test sessions.
//!
//! Stores hold whole sessions. A loaded session always carries its complete
//! answer sheet, so results are recomputed rather than patched.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UpcastError};
use crate::domain::quiz::{QuizError, TestSession};

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("Failed to migrate stored session: {0}")]
    MigrationFailed(#[from] UpcastError),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        let code = match &err {
            SessionStoreError::NotFound(_) => ErrorCode::SessionNotFound,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<SessionStoreError> for QuizError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => QuizError::NotFound(id),
            other => QuizError::Infrastructure(other.to_string()),
        }
    }
}

/// Port for persisting and loading test sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a session, replacing any earlier copy
    ///
    /// # Errors
    /// Returns `SessionStoreError` if save fails
    async fn save(&self, session: &TestSession) -> Result<(), SessionStoreError>;

    /// Load a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: SessionId) -> Result<TestSession, SessionStoreError>;

    /// Check if a session exists
    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_store_error_not_found() {
        let err = SessionStoreError::NotFound(SessionId::new());
        assert!(err.to_string().contains("Session not found"));
    }

    #[test]
    fn test_not_found_maps_to_session_not_found_code() {
        let err: DomainError = SessionStoreError::NotFound(SessionId::new()).into();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_io_error_maps_to_storage_code() {
        let err: DomainError = SessionStoreError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
