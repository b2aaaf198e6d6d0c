//! Consensus loop configuration from TOML (`[consensus]` section)

use serde::{Deserialize, Serialize};

/// Raw `[consensus]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Proposer/critic round trips before a forced stop
    pub max_iterations: usize,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        Self { max_iterations: 5 }
    }
}
