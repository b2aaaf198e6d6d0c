//! Execution parameters — consensus loop and dispatcher control.
//!
//! [`ExecutionParams`] groups the static parameters read once at startup and
//! fixed for the lifetime of a batch. These are application-layer concerns,
//! not domain policy.

use super::retry_policy::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Batch execution control parameters.
///
/// | Field | Used by |
/// |-------|---------|
/// | `max_concurrent_workers` | ProcessBatchUseCase (admission gate size) |
/// | `max_iterations` | RunConsensusUseCase (round-trip bound) |
/// | `retry` | ResilientClient |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of consensus loops running at once (>= 1).
    pub max_concurrent_workers: usize,
    /// Maximum proposer/critic round trips per question (>= 1).
    pub max_iterations: usize,
    /// Retry policy for every remote call.
    pub retry: RetryPolicy,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_concurrent_workers: 5,
            max_iterations: 5,
            retry: RetryPolicy::default(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_concurrent_workers(mut self, max: usize) -> Self {
        self.max_concurrent_workers = max.max(1);
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
