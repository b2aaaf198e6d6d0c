//! LLM Gateway port
//!
//! Defines the interface for sending a prompt to a language model and
//! getting its text back. Which provider or model sits behind it is an
//! infrastructure decision.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// A single text-in/text-out primitive. Implementations may fail for any
/// reason; retrying is the caller's business (see
/// [`ResilientClient`](crate::use_cases::resilient_call::ResilientClient)).
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt and get the model's reply
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Human-readable name of the model behind this gateway (for logs)
    fn model_name(&self) -> &str {
        "unknown"
    }
}
