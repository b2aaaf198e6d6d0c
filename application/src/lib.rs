//! Application layer for quiz-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, RetryPolicy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{BatchProgressNotifier, NoBatchProgress},
};
pub use use_cases::process_batch::ProcessBatchUseCase;
pub use use_cases::propose_answer::ProposerAgent;
pub use use_cases::resilient_call::{CallError, ResilientClient};
pub use use_cases::review_answer::CriticAgent;
pub use use_cases::role::{Role, RoleError};
pub use use_cases::run_consensus::{RunConsensusError, RunConsensusUseCase};
