//! Batch result types returned by the dispatcher

pub mod result;

pub use result::{BatchItemOutcome, BatchItemResult, BatchSummary};
