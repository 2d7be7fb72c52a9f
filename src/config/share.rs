//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where shared result links point
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Origin of the public site, without the results path
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Validate share configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidShareBaseUrl);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}
