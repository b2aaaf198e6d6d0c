//! Retry policy for remote model calls.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded exponential backoff.
///
/// Attempt 1 runs immediately; after failed attempt `n` (while `n < max_attempts`)
/// the caller waits `base_delay_ms * multiplier^(n-1)` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one (>= 1).
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub base_delay_ms: u64,
    /// Growth factor between consecutive delays (>= 1).
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay_ms: u64, multiplier: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms,
            multiplier: multiplier.max(1),
        }
    }

    /// Delay to wait after failed attempt `attempt` (1-based), or `None`
    /// when that attempt was the last one.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt >= self.max_attempts {
            return None;
        }
        let factor = (self.multiplier.max(1) as u64).saturating_pow(attempt - 1);
        Some(Duration::from_millis(self.base_delay_ms.saturating_mul(factor)))
    }

    /// Sum of all delays a call that fails every attempt will sleep through
    pub fn total_backoff(&self) -> Duration {
        (1..self.max_attempts)
            .filter_map(|attempt| self.delay_after(attempt))
            .sum()
    }
}
