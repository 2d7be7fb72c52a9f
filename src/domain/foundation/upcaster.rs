//! Schema upcasting for persisted documents.
//!
//! Stored documents carry a `schema_version`. When the current schema moves
//! forward, older documents are transformed one version step at a time until
//! they match the current shape, then deserialized as usual.
//!
//! # Architecture
//!
//! - `Upcaster` trait - Transforms a single version step (v1 → v2)
//! - `UpcasterRegistry` - Chains upcasters to reach the current version
//! - `UpcastError` - Error types for failed transformations

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during upcasting.
#[derive(Debug, Error)]
pub enum UpcastError {
    /// Required field is missing from the source document.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Field value is invalid or cannot be converted.
    #[error("invalid field value: {0}")]
    InvalidValue(String),

    /// No upcaster path exists from source to target version.
    #[error("incompatible version transition: v{from} → v{to}")]
    IncompatibleVersions { from: u32, to: u32 },

    /// Document was written by a newer schema than this build understands.
    #[error("schema version v{found} is newer than supported v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// JSON serialization/deserialization error during transformation.
    #[error("JSON transformation error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Transforms a document from `source_version()` to `source_version() + 1`.
///
/// Transformations must be deterministic and must not panic; return
/// `UpcastError` instead.
pub trait Upcaster: Send + Sync {
    /// Version this upcaster reads.
    fn source_version(&self) -> u32;

    /// Transform the payload into the next schema version.
    fn upcast(&self, payload: JsonValue) -> Result<JsonValue, UpcastError>;
}

/// Registry that chains upcasters up to a current version.
pub struct UpcasterRegistry {
    upcasters: HashMap<u32, Arc<dyn Upcaster>>,
    current_version: u32,
}

impl UpcasterRegistry {
    /// Creates an empty registry targeting `current_version`.
    pub fn new(current_version: u32) -> Self {
        Self {
            upcasters: HashMap::new(),
            current_version,
        }
    }

    /// Registers an upcaster for its source version.
    pub fn register(&mut self, upcaster: Arc<dyn Upcaster>) {
        self.upcasters.insert(upcaster.source_version(), upcaster);
    }

    /// Builder-style registration.
    pub fn with(mut self, upcaster: Arc<dyn Upcaster>) -> Self {
        self.register(upcaster);
        self
    }

    /// The version every document is upcast to.
    pub fn current_version(&self) -> u32 {
        self.current_version
    }

    /// Upcasts `payload` from `version` to the current version.
    ///
    /// Returns the payload unchanged when it is already current.
    pub fn upcast_to_current(
        &self,
        version: u32,
        payload: JsonValue,
    ) -> Result<JsonValue, UpcastError> {
        if version > self.current_version {
            return Err(UpcastError::UnsupportedVersion {
                found: version,
                supported: self.current_version,
            });
        }

        let mut current = payload;
        for step in version..self.current_version {
            let upcaster =
                self.upcasters
                    .get(&step)
                    .ok_or(UpcastError::IncompatibleVersions {
                        from: step,
                        to: self.current_version,
                    })?;
            current = upcaster.upcast(current)?;
        }

        Ok(current)
    }
}
