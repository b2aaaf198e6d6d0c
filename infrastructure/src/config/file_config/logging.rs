//! Logging configuration from TOML (`[logging]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Raw `[logging]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log level (`LOG_LEVEL`)
    pub level: String,
    /// JSONL transcript of every proposal and review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<PathBuf>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            conversation_log: None,
        }
    }
}

impl FileLoggingConfig {
    /// Normalized `tracing` level name, with issues for unknown values.
    ///
    /// Accepts the Python-style names `WARNING` and `CRITICAL` as well.
    /// Unknown values fall back to `info`.
    pub fn parse_level(&self) -> (&'static str, Vec<ConfigIssue>) {
        let normalized = match self.level.trim().to_ascii_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            other => other.to_string(),
        };

        match VALID_LEVELS.iter().copied().find(|l| *l == normalized) {
            Some(level) => (level, Vec::new()),
            None => (
                "info",
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "logging.level".to_string(),
                        value: self.level.clone(),
                        valid_values: VALID_LEVELS.iter().map(|s| s.to_string()).collect(),
                    },
                    format!(
                        "logging.level: unknown value '{}', falling back to 'info'",
                        self.level
                    ),
                )],
            ),
        }
    }
}
