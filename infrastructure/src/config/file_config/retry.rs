//! Retry configuration from TOML (`[retry]` section)

use quiz_application::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Raw `[retry]` configuration
///
/// ```toml
/// [retry]
/// max_attempts = 3
/// base_delay_ms = 1000
/// multiplier = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub multiplier: u32,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            base_delay_ms: policy.base_delay_ms,
            multiplier: policy.multiplier,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.base_delay_ms, self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_policy() {
        let config = FileRetryConfig {
            max_attempts: 4,
            base_delay_ms: 250,
            multiplier: 3,
        };
        let policy = config.to_policy();
        assert_eq!(policy.max_attempts, 4);
        assert_eq!(policy.base_delay_ms, 250);
        assert_eq!(policy.multiplier, 3);
    }
}
