//! Gemini gateway - LlmGateway implementation over HTTP

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use quiz_application::{GatewayError, LlmGateway};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{endpoint}/models/{model}:generateContent` (without the key)
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Single-turn text gateway to the Gemini `generateContent` API.
///
/// Holds one pooled HTTP client; safe to share between all questions.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GeminiError::ClientBuild)?;

        debug!(model = %config.model, endpoint = %config.endpoint, "Gemini gateway initialized");
        Ok(Self { client, config })
    }

    /// Send one prompt and return the first candidate's text.
    ///
    /// Returns an empty string when the API answered without candidates.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        if let Some(reason) = parsed.block_reason() {
            warn!(model = %self.config.model, reason, "Gemini blocked the prompt");
        }

        Ok(parsed.text())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        self.generate(prompt).await.map_err(GatewayError::from)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-1.5-pro")
            .with_endpoint("https://example.test/v1beta/");
        assert_eq!(
            config.generate_url(),
            "https://example.test/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_api_key() {
        let result = GeminiGateway::new(GeminiConfig::new("  "));
        assert!(matches!(result, Err(GeminiError::MissingApiKey)));
    }

    #[test]
    fn test_model_name() {
        let gateway = GeminiGateway::new(GeminiConfig::new("key").with_model("gemini-x")).unwrap();
        assert_eq!(gateway.model_name(), "gemini-x");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let gateway = GeminiGateway::new(
            GeminiConfig::new("key")
                .with_endpoint("http://127.0.0.1:1")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let err = gateway.send("hello").await.unwrap_err();

        assert!(
            matches!(err, GatewayError::ConnectionError(_)),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_api_key_never_appears_in_errors() {
        let key = "SUPERSECRETKEY123";
        let gateway = GeminiGateway::new(
            GeminiConfig::new(key)
                .with_endpoint("http://127.0.0.1:1")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let err = gateway.send("hello").await.unwrap_err();

        let message = err.to_string();
        assert!(!message.contains(key), "key leaked: {message}");
        assert!(!format!("{err:?}").contains(key));
    }
}
