//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch is processed.

use quiz_domain::{BatchItemResult, BatchSummary};

/// Callback for progress updates during batch execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain log lines, ...).
/// Callbacks are invoked from concurrently running question tasks.
pub trait BatchProgressNotifier: Send + Sync {
    /// Called once before any question is admitted
    fn on_batch_start(&self, total_questions: usize);

    /// Called when a question passes the admission gate and starts running
    fn on_question_start(&self, _question_id: &str) {}

    /// Called when a question finishes, successfully or not
    fn on_question_complete(&self, result: &BatchItemResult);

    /// Called after every question has a result
    fn on_batch_complete(&self, summary: &BatchSummary);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoBatchProgress;

impl BatchProgressNotifier for NoBatchProgress {
    fn on_batch_start(&self, _total_questions: usize) {}
    fn on_question_complete(&self, _result: &BatchItemResult) {}
    fn on_batch_complete(&self, _summary: &BatchSummary) {}
}
