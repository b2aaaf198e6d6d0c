//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod consensus;
mod logging;
mod output;
mod provider;
mod retry;
mod workers;

pub use consensus::FileConsensusConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;
pub use workers::FileWorkersConfig;

use quiz_application::ExecutionParams;
use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Admission gate size
    pub workers: FileWorkersConfig,
    /// Proposer/critic loop bound
    pub consensus: FileConsensusConfig,
    /// Backoff for every model call
    pub retry: FileRetryConfig,
    /// Gemini model, key and endpoint
    pub provider: FileProviderConfig,
    /// Diagnostic level and conversation transcript
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors: zero workers, iterations, attempts or multiplier; missing API key.
    /// Warnings: unknown log level.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let minimums = [
            ("workers.max_concurrent", self.workers.max_concurrent as u64),
            ("consensus.max_iterations", self.consensus.max_iterations as u64),
            ("retry.max_attempts", u64::from(self.retry.max_attempts)),
            ("retry.multiplier", u64::from(self.retry.multiplier)),
        ];
        for (field, value) in minimums {
            if value < 1 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::BelowMinimum {
                        field: field.to_string(),
                        minimum: 1,
                    },
                    format!("{field}: must be at least 1, got {value}"),
                ));
            }
        }

        if !self.provider.has_api_key() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "provider.api_key".to_string(),
                },
                "provider.api_key: no API key configured (set GEMINI_API_KEY)",
            ));
        }

        issues.extend(self.logging.parse_level().1);

        issues
    }

    /// Execution parameters for the batch dispatcher and consensus loop
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_concurrent_workers(self.workers.max_concurrent)
            .with_max_iterations(self.consensus.max_iterations)
            .with_retry(self.retry.to_policy())
    }
}
