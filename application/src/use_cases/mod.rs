//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod process_batch;
pub mod propose_answer;
pub mod resilient_call;
pub mod review_answer;
pub mod role;
pub mod run_consensus;
