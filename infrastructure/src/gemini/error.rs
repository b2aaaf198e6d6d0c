//! Error types for the Gemini adapter

use quiz_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY or provider.api_key)")]
    MissingApiKey,

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to connect to Gemini API: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Gemini API request timed out")]
    Timeout,

    #[error("Gemini API request failed (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Gemini API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Gemini API request error: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs end up in user-facing error text
        let e = e.without_url();
        if e.is_timeout() {
            GeminiError::Timeout
        } else if e.is_connect() {
            GeminiError::Connection(e)
        } else if e.is_decode() {
            GeminiError::Decode(e)
        } else {
            GeminiError::Request(e)
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::Connection(_) => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Status { .. } | GeminiError::Decode(_) | GeminiError::Request(_) => {
                GatewayError::RequestFailed(e.to_string())
            }
            GeminiError::MissingApiKey | GeminiError::ClientBuild(_) => {
                GatewayError::Other(e.to_string())
            }
        }
    }
}
