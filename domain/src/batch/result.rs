//! Per-question batch results

use crate::consensus::ConsensusOutcome;
use crate::core::option::OptionLetter;
use serde::{Deserialize, Serialize};

/// What happened to one question of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItemOutcome {
    /// The consensus loop produced an answer
    Answered(ConsensusOutcome),
    /// The consensus loop failed; the message is meant for humans
    Failed { error: String },
}

/// Result of one question as seen by the caller of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemResult {
    /// Identifier of the question this result belongs to
    pub id: String,
    /// Wall-clock time from admission to completion, in whole milliseconds
    pub elapsed_ms: u64,
    pub outcome: BatchItemOutcome,
}

impl BatchItemResult {
    pub fn answered(id: impl Into<String>, outcome: ConsensusOutcome, elapsed_ms: u64) -> Self {
        Self {
            id: id.into(),
            elapsed_ms,
            outcome: BatchItemOutcome::Answered(outcome),
        }
    }

    pub fn failed(id: impl Into<String>, error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            id: id.into(),
            elapsed_ms,
            outcome: BatchItemOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchItemOutcome::Answered(_))
    }

    pub fn selection(&self) -> Option<OptionLetter> {
        match &self.outcome {
            BatchItemOutcome::Answered(o) => Some(o.selection),
            BatchItemOutcome::Failed { .. } => None,
        }
    }

    /// Iterations executed; 0 for failed questions
    pub fn iterations(&self) -> usize {
        match &self.outcome {
            BatchItemOutcome::Answered(o) => o.iterations,
            BatchItemOutcome::Failed { .. } => 0,
        }
    }

    pub fn consensus_reached(&self) -> bool {
        matches!(&self.outcome, BatchItemOutcome::Answered(o) if o.consensus_reached)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchItemOutcome::Answered(_) => None,
            BatchItemOutcome::Failed { error } => Some(error),
        }
    }
}

/// Aggregate counts for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Answered with the critic's agreement
    pub agreed: usize,
    /// Answered after exhausting the iteration bound
    pub forced: usize,
    pub failed: usize,
    pub elapsed_ms: u64,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchItemResult], elapsed_ms: u64) -> Self {
        let mut summary = Self {
            total: results.len(),
            elapsed_ms,
            ..Self::default()
        };
        for result in results {
            match &result.outcome {
                BatchItemOutcome::Answered(o) if o.consensus_reached => summary.agreed += 1,
                BatchItemOutcome::Answered(_) => summary.forced += 1,
                BatchItemOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    pub fn answered(&self) -> usize {
        self.agreed + self.forced
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> OptionLetter {
        OptionLetter::try_from(c).unwrap()
    }

    #[test]
    fn test_answered_accessors() {
        let r = BatchItemResult::answered("1", ConsensusOutcome::agreed(letter('B'), 2), 150);
        assert!(r.is_success());
        assert_eq!(r.selection(), Some(letter('B')));
        assert_eq!(r.iterations(), 2);
        assert!(r.consensus_reached());
        assert!(r.error().is_none());
    }

    #[test]
    fn test_failed_accessors() {
        let r = BatchItemResult::failed("2", "remote unavailable", 30);
        assert!(!r.is_success());
        assert!(r.selection().is_none());
        assert_eq!(r.iterations(), 0);
        assert!(!r.consensus_reached());
        assert_eq!(r.error(), Some("remote unavailable"));
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            BatchItemResult::answered("1", ConsensusOutcome::agreed(letter('A'), 1), 10),
            BatchItemResult::answered("2", ConsensusOutcome::forced(letter('C'), 5), 10),
            BatchItemResult::failed("3", "boom", 10),
        ];
        let summary = BatchSummary::from_results(&results, 42);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.agreed, 1);
        assert_eq!(summary.forced, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.answered(), 2);
        assert!(!summary.all_succeeded());
    }
}
