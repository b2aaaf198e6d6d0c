//! Process Batch use case
//!
//! Runs many questions concurrently, each through its own consensus loop.
//! A counting semaphore (the admission gate) bounds how many loops are in
//! flight; results come back in input order regardless of completion order.

use super::run_consensus::RunConsensusUseCase;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{BatchProgressNotifier, NoBatchProgress};
use quiz_domain::{BatchItemResult, BatchSummary, Question};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{Instrument, error, info, info_span};

/// Use case for answering a batch of questions with bounded concurrency
pub struct ProcessBatchUseCase<G: LlmGateway + 'static> {
    consensus: Arc<RunConsensusUseCase<G>>,
    gate: Arc<Semaphore>,
    max_concurrent: usize,
}

impl<G: LlmGateway + 'static> ProcessBatchUseCase<G> {
    /// `max_concurrent` is clamped to at least 1.
    pub fn new(consensus: Arc<RunConsensusUseCase<G>>, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            consensus,
            gate: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Process every question; one result per question, in input order.
    pub async fn process(&self, questions: Vec<Question>) -> Vec<BatchItemResult> {
        self.process_with_progress(questions, Arc::new(NoBatchProgress))
            .await
            .0
    }

    /// Process every question with progress callbacks.
    ///
    /// Never fails as a whole: a question whose loop errors (or whose task
    /// dies) becomes a failed item while its siblings continue.
    pub async fn process_with_progress(
        &self,
        questions: Vec<Question>,
        progress: Arc<dyn BatchProgressNotifier>,
    ) -> (Vec<BatchItemResult>, BatchSummary) {
        let started = Instant::now();
        let total = questions.len();
        progress.on_batch_start(total);

        if questions.is_empty() {
            let summary = BatchSummary::from_results(&[], 0);
            progress.on_batch_complete(&summary);
            return (Vec::new(), summary);
        }

        info!(
            total,
            max_concurrent = self.max_concurrent,
            "Starting batch"
        );

        let ids: Vec<String> = questions.iter().map(|q| q.id().to_string()).collect();
        let mut join_set = JoinSet::new();

        for (idx, question) in questions.into_iter().enumerate() {
            let consensus = Arc::clone(&self.consensus);
            let gate = Arc::clone(&self.gate);
            let progress = Arc::clone(&progress);
            let span = info_span!("question", id = question.id());

            join_set.spawn(
                async move {
                    let item = match gate.acquire_owned().await {
                        Ok(_permit) => {
                            progress.on_question_start(question.id());
                            let question_started = Instant::now();
                            let item = match consensus.execute(&question).await {
                                Ok(outcome) => BatchItemResult::answered(
                                    question.id(),
                                    outcome,
                                    elapsed_ms(question_started),
                                ),
                                Err(e) => {
                                    let role_error = e.role_error();
                                    let cause = if role_error.is_remote_unavailable() {
                                        "model unavailable"
                                    } else if role_error.is_malformed() {
                                        "malformed reply"
                                    } else {
                                        "role failure"
                                    };
                                    error!(error = %e, cause, "Question failed");
                                    BatchItemResult::failed(
                                        question.id(),
                                        e.to_string(),
                                        elapsed_ms(question_started),
                                    )
                                }
                            };
                            progress.on_question_complete(&item);
                            item
                        }
                        Err(_) => {
                            let item = BatchItemResult::failed(
                                question.id(),
                                "admission gate closed",
                                0,
                            );
                            progress.on_question_complete(&item);
                            item
                        }
                    };
                    (idx, item)
                }
                .instrument(span),
            );
        }

        let mut slots: Vec<Option<BatchItemResult>> = vec![None; total];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, item)) => slots[idx] = Some(item),
                Err(e) => error!(error = %e, "Question task failed"),
            }
        }

        let results: Vec<BatchItemResult> = slots
            .into_iter()
            .zip(ids)
            .map(|(slot, id)| {
                slot.unwrap_or_else(|| {
                    BatchItemResult::failed(id, "question task terminated unexpectedly", 0)
                })
            })
            .collect();

        let summary = BatchSummary::from_results(&results, elapsed_ms(started));
        info!(
            total = summary.total,
            agreed = summary.agreed,
            forced = summary.forced,
            failed = summary.failed,
            elapsed_ms = summary.elapsed_ms,
            "Batch complete"
        );
        progress.on_batch_complete(&summary);

        (results, summary)
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}
