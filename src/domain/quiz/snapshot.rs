//! Versioned persistence format for test sessions.
//!
//! A snapshot stores the complete answer sheet, never derived scores; a
//! restored session is always re-scored from scratch.
//!
//! Version 1 is the browser's saved test state (camelCase keys, no session
//! id, no version field). Version 2 is the current snake_case layout.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};
use std::sync::Arc;

use super::TestSession;
use crate::domain::foundation::{SessionId, UpcastError, Upcaster, UpcasterRegistry};

/// Schema version written by this build.
pub const CURRENT_SNAPSHOT_VERSION: u32 = 2;

/// Version assumed for documents without a `schema_version` field.
pub const LEGACY_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub schema_version: u32,
    pub session: TestSession,
}

impl SessionSnapshot {
    pub fn new(session: TestSession) -> Self {
        Self {
            schema_version: CURRENT_SNAPSHOT_VERSION,
            session,
        }
    }

    pub fn into_session(self) -> TestSession {
        self.session
    }

    /// Decodes a snapshot of any known version.
    ///
    /// `session_id` is assigned to legacy documents, which carry no id.
    pub fn decode(document: JsonValue, session_id: SessionId) -> Result<Self, UpcastError> {
        let version = match document.get("schema_version") {
            Some(v) => v
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| UpcastError::InvalidValue(format!("schema_version: {}", v)))?,
            None => LEGACY_SNAPSHOT_VERSION,
        };

        let registry = UpcasterRegistry::new(CURRENT_SNAPSHOT_VERSION)
            .with(Arc::new(BrowserStateUpcaster { session_id }));

        let current = registry.upcast_to_current(version, document)?;
        Ok(serde_json::from_value(current)?)
    }

    pub fn encode(&self) -> Result<JsonValue, UpcastError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// v1 → v2: converts the browser's saved test state.
struct BrowserStateUpcaster {
    session_id: SessionId,
}

impl BrowserStateUpcaster {
    fn field<'a>(payload: &'a JsonValue, name: &str) -> Result<&'a JsonValue, UpcastError> {
        payload
            .get(name)
            .ok_or_else(|| UpcastError::MissingField(name.to_string()))
    }

    fn convert_answer(answer: &JsonValue) -> Result<JsonValue, UpcastError> {
        let question_id = Self::field(answer, "questionId")?;
        let answer_id = Self::field(answer, "answerId")?;
        let value = Self::field(answer, "value")?;
        let pole = Self::field(answer, "dimension")?;
        Ok(json!({
            "question_id": question_id,
            "answer_id": answer_id,
            "value": value,
            "pole": pole,
        }))
    }
}

impl Upcaster for BrowserStateUpcaster {
    fn source_version(&self) -> u32 {
        LEGACY_SNAPSHOT_VERSION
    }

    fn upcast(&self, payload: JsonValue) -> Result<JsonValue, UpcastError> {
        let answers = Self::field(&payload, "answers")?
            .as_array()
            .ok_or_else(|| UpcastError::InvalidValue("answers must be an array".to_string()))?
            .iter()
            .map(Self::convert_answer)
            .collect::<Result<Vec<_>, _>>()?;

        let index = payload
            .get("currentQuestionIndex")
            .cloned()
            .unwrap_or_else(|| json!(0));
        let started_at = Self::field(&payload, "startTime")?.clone();

        let is_completed = payload
            .get("isCompleted")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        let completed_type = if is_completed {
            payload
                .get("result")
                .and_then(|r| r.get("code"))
                .cloned()
                .unwrap_or(JsonValue::Null)
        } else {
            JsonValue::Null
        };
        let completed_at = if completed_type.is_null() {
            JsonValue::Null
        } else {
            payload
                .get("completionTime")
                .cloned()
                .unwrap_or(JsonValue::Null)
        };

        let mut session = Map::new();
        session.insert("id".into(), json!(self.session_id));
        session.insert("current_question_index".into(), index);
        session.insert("answers".into(), JsonValue::Array(answers));
        session.insert("completed_type".into(), completed_type);
        session.insert("started_at".into(), started_at);
        session.insert("completed_at".into(), completed_at);

        Ok(json!({
            "schema_version": CURRENT_SNAPSHOT_VERSION,
            "session": JsonValue::Object(session),
        }))
    }
}
