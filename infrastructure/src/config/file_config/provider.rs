//! Model provider configuration from TOML (`[provider]` section)

use crate::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiConfig, GeminiError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Value shipped in sample `.env` files; never a real key
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Raw `[provider]` configuration
///
/// The API key normally comes from `GEMINI_API_KEY` rather than a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    /// Configured key, unless blank or the sample placeholder
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn to_gemini_config(&self) -> Result<GeminiConfig, GeminiError> {
        let api_key = self.api_key().ok_or(GeminiError::MissingApiKey)?;

        Ok(GeminiConfig::new(api_key)
            .with_model(self.model.clone())
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs.max(1))))
    }
}
