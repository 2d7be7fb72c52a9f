//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Completeness threshold must be between 0 and 100, got {0}")]
    InvalidCompletenessThreshold(u8),

    #[error("Expected question count must be greater than zero")]
    InvalidExpectedQuestions,

    #[error("Maximum answer magnitude must be a positive number")]
    InvalidAnswerMagnitude,

    #[error("Unknown default type code: '{0}'")]
    InvalidDefaultTypeCode(String),

    #[error("Share base URL must start with http:// or https://")]
    InvalidShareBaseUrl,

    #[error("Storage data directory must not be empty")]
    EmptyDataDir,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
