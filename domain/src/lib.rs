//! Domain layer for quiz-quorum
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Proposer / Critic
//!
//! Every multiple-choice [`Question`] is answered by two cooperating roles:
//!
//! - **Proposer**: selects an option letter and explains why
//! - **Critic**: reviews the selection and returns AGREE or DISAGREE (+ criticism)
//!
//! The roles alternate until the critic agrees or an iteration bound is hit
//! (a *forced stop*). The result is a [`ConsensusOutcome`].
//!
//! ## Batches
//!
//! Many questions are answered concurrently; each one yields a
//! [`BatchItemResult`] that is either an answer or an error, never both.

pub mod batch;
pub mod config;
pub mod consensus;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use batch::{BatchItemOutcome, BatchItemResult, BatchSummary};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{
    ConsensusOutcome, ConsensusState, LabeledLines, ProposalResult, ResponseParseError,
    ReviewResult, Verdict, parse_proposal_response, parse_review_response,
};
pub use core::{
    error::DomainError,
    option::{AnswerOption, MAX_OPTIONS, OptionLetter},
    question::Question,
};
pub use prompt::PromptTemplate;
