//! Proposer output

use crate::core::option::OptionLetter;
use serde::{Deserialize, Serialize};

/// An answer proposed by the proposer role for one iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResult {
    selection: OptionLetter,
    rationale: String,
}

impl ProposalResult {
    pub fn new(selection: OptionLetter, rationale: impl Into<String>) -> Self {
        Self {
            selection,
            rationale: rationale.into(),
        }
    }

    pub fn selection(&self) -> OptionLetter {
        self.selection
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}
