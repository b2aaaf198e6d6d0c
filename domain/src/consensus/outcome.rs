//! Consensus loop states and final outcome

use crate::core::option::OptionLetter;
use serde::{Deserialize, Serialize};

/// State of a single proposer/critic consensus loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusState {
    /// Waiting for the proposer to select an option
    Proposing,
    /// Waiting for the critic to judge the latest proposal
    Reviewing,
    /// Critic agreed (terminal)
    Agreed,
    /// Iteration budget exhausted without agreement (terminal)
    ForcedStop,
}

impl ConsensusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsensusState::Proposing => "proposing",
            ConsensusState::Reviewing => "reviewing",
            ConsensusState::Agreed => "agreed",
            ConsensusState::ForcedStop => "forced_stop",
        }
    }
}

impl std::fmt::Display for ConsensusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final result of a consensus loop
///
/// `iterations` is always within `1..=max_iterations` of the loop that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusOutcome {
    pub selection: OptionLetter,
    pub iterations: usize,
    pub consensus_reached: bool,
}

impl ConsensusOutcome {
    /// Critic agreed with `selection` on iteration `iterations`
    pub fn agreed(selection: OptionLetter, iterations: usize) -> Self {
        Self {
            selection,
            iterations,
            consensus_reached: true,
        }
    }

    /// Budget ran out; `selection` is the last proposal
    pub fn forced(selection: OptionLetter, iterations: usize) -> Self {
        Self {
            selection,
            iterations,
            consensus_reached: false,
        }
    }

    /// Terminal state this outcome corresponds to
    pub fn state(&self) -> ConsensusState {
        if self.consensus_reached {
            ConsensusState::Agreed
        } else {
            ConsensusState::ForcedStop
        }
    }
}
