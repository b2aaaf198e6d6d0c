//! Worker pool configuration from TOML (`[workers]` section)

use serde::{Deserialize, Serialize};

/// Raw `[workers]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkersConfig {
    /// Size of the admission gate (questions answered at once)
    pub max_concurrent: usize,
}

impl Default for FileWorkersConfig {
    fn default() -> Self {
        Self { max_concurrent: 5 }
    }
}
