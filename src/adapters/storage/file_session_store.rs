//! File-based Session Store Adapter
//!
//! Stores each test session as a versioned YAML snapshot, one directory per
//! session id. Older snapshot versions are migrated on load.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::SessionId;
use crate::domain::quiz::{SessionSnapshot, TestSession};
use crate::ports::{SessionStore, SessionStoreError};

const STATE_FILE: &str = "state.yaml";

/// File-based storage for test sessions
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_dir(&self, id: SessionId) -> PathBuf {
        self.base_path.join(id.to_string())
    }

    /// Path of the snapshot file for a session
    pub fn state_file_path(&self, id: SessionId) -> PathBuf {
        self.session_dir(id).join(STATE_FILE)
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), SessionStoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &TestSession) -> Result<(), SessionStoreError> {
        let id = session.id();
        self.ensure_dir(&self.session_dir(id)).await?;

        let snapshot = SessionSnapshot::new(session.clone());
        let yaml = serde_yaml::to_string(&snapshot)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.state_file_path(id), yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        tracing::debug!(session_id = %id, answers = session.answers().len(), "Saved session");
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<TestSession, SessionStoreError> {
        let file_path = self.state_file_path(id);

        if !file_path.exists() {
            return Err(SessionStoreError::NotFound(id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        // Legacy JSON documents are valid YAML too.
        let document: JsonValue = serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        let session = SessionSnapshot::decode(document, id)?.into_session();
        if session.id() != id {
            return Err(SessionStoreError::DeserializationFailed(format!(
                "file for session {} holds session {}",
                id,
                session.id()
            )));
        }

        tracing::debug!(session_id = %id, answers = session.answers().len(), "Loaded session");
        Ok(session)
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.state_file_path(id).exists())
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let dir = self.session_dir(id);

        if dir.exists() {
            fs::remove_dir_all(&dir)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnswerId;
    use crate::domain::quiz::QuestionCatalog;
    use tempfile::TempDir;

    fn answered_session(count: usize) -> TestSession {
        let catalog = QuestionCatalog::builtin();
        let mut session = TestSession::new();
        for _ in 0..count {
            let answer_id = session.current_question(catalog).unwrap().answers[0].id.clone();
            session.answer_current(catalog, &answer_id).unwrap();
        }
        session
    }

    #[tokio::test]
    async fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        let session = answered_session(5);
        store.save(&session).await.unwrap();

        let loaded = store.load(session.id()).await.unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.answers().len(), 5);
        assert_eq!(loaded.current_question_index(), 5);
    }

    #[tokio::test]
    async fn test_file_store_writes_current_schema_version() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        let session = answered_session(1);
        store.save(&session).await.unwrap();

        let yaml = std::fs::read_to_string(store.state_file_path(session.id())).unwrap();
        assert!(yaml.contains("schema_version: 2"));
    }

    #[tokio::test]
    async fn test_file_store_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        let result = store.load(SessionId::new()).await;
        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_migrates_legacy_browser_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let id = SessionId::new();

        let legacy = r#"{
            "currentQuestionIndex": 1,
            "answers": [
                {"questionId": "q1", "answerId": "q1a3", "value": -2, "dimension": "I"}
            ],
            "isCompleted": false,
            "startTime": "2024-05-01T10:00:00Z"
        }"#;
        std::fs::create_dir_all(temp_dir.path().join(id.to_string())).unwrap();
        std::fs::write(store.state_file_path(id), legacy).unwrap();

        let session = store.load(id).await.unwrap();
        assert_eq!(session.id(), id);
        assert_eq!(session.current_question_index(), 1);
        let answer = session.answers().as_slice()[0].clone();
        assert_eq!(answer.answer_id, AnswerId::new("q1a3").unwrap());
        assert_eq!(answer.value, -2.0);
    }

    #[tokio::test]
    async fn test_file_store_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let id = SessionId::new();

        std::fs::create_dir_all(temp_dir.path().join(id.to_string())).unwrap();
        std::fs::write(store.state_file_path(id), "schema_version: 2\nsession: 7\n").unwrap();

        assert!(store.load(id).await.is_err());
    }

    #[tokio::test]
    async fn test_file_store_exists_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        let session = answered_session(0);
        assert!(!store.exists(session.id()).await.unwrap());

        store.save(&session).await.unwrap();
        assert!(store.exists(session.id()).await.unwrap());

        store.delete(session.id()).await.unwrap();
        assert!(!store.exists(session.id()).await.unwrap());

        // Deleting again is fine
        store.delete(session.id()).await.unwrap();
    }
}
