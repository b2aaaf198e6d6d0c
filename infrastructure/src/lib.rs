//! Infrastructure layer for quiz-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and question-file input.

pub mod config;
pub mod gemini;
pub mod input;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileConsensusConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileRetryConfig, FileWorkersConfig,
};
pub use gemini::{GeminiConfig, GeminiError, GeminiGateway};
pub use input::{AnswerItem, QuestionFileError, QuestionFileLoader, QuestionItem};
pub use logging::JsonlConversationLogger;
