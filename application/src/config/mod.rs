//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ExecutionParams`] — concurrency cap and iteration bound
//! - [`RetryPolicy`] — bounded exponential backoff for remote calls

pub mod execution_params;
pub mod retry_policy;

pub use execution_params::ExecutionParams;
pub use retry_policy::RetryPolicy;
