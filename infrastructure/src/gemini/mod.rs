//! Google Gemini adapter
//!
//! Implements the [`LlmGateway`](quiz_application::LlmGateway) port on top of
//! the `generateContent` REST endpoint.

pub mod error;
pub mod gateway;
mod types;

pub use error::GeminiError;
pub use gateway::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiConfig, GeminiGateway};
