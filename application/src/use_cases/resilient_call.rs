//! Resilient model calls
//!
//! Wraps an [`LlmGateway`] with bounded retry and exponential backoff so the
//! proposer and critic can survive transient upstream failures.

use crate::config::RetryPolicy;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors surfaced after the retry budget is spent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("Remote model unavailable after {attempts} attempt(s): {last_error}")]
    RemoteUnavailable {
        attempts: u32,
        last_error: GatewayError,
    },
}

/// Text-in/text-out client with bounded exponential backoff.
///
/// Shared read-only between all concurrently running questions.
pub struct ResilientClient<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    policy: RetryPolicy,
}

impl<G: LlmGateway + 'static> ResilientClient<G> {
    pub fn new(gateway: Arc<G>, policy: RetryPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Send `prompt`, retrying failed or empty replies.
    ///
    /// Returns the first non-empty reply. Sleeps `policy.delay_after(n)`
    /// between attempts and never after the last one.
    pub async fn invoke(&self, prompt: &str) -> Result<String, CallError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_error = GatewayError::Other("no attempt made".to_string());

        for attempt in 1..=max_attempts {
            debug!(
                attempt,
                max_attempts,
                model = self.gateway.model_name(),
                "Model call attempt"
            );

            match self.gateway.send(prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(attempt, "Model call succeeded");
                    return Ok(text);
                }
                Ok(_) => last_error = GatewayError::EmptyResponse,
                Err(e) => last_error = e,
            }

            warn!(
                attempt,
                max_attempts,
                error = %last_error,
                "Model call failed"
            );

            if let Some(delay) = self.policy.delay_after(attempt) {
                info!(delay_ms = delay.as_millis() as u64, "Retrying model call");
                tokio::time::sleep(delay).await;
            }
        }

        error!(
            attempts = max_attempts,
            error = %last_error,
            "Model call failed after all attempts"
        );
        Err(CallError::RemoteUnavailable {
            attempts: max_attempts,
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    // ==================== Test Mocks ====================

    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                calls: AtomicUsize::new(0),
            }
        }

        fn always_failing() -> Self {
            Self::new(Vec::new())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn send(&self, _prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::ConnectionError("down".to_string())))
        }
    }

    fn client(
        gateway: ScriptedGateway,
        policy: RetryPolicy,
    ) -> (ResilientClient<ScriptedGateway>, Arc<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        (ResilientClient::new(Arc::clone(&gateway), policy), gateway)
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_first_success_returns_immediately() {
        let (client, gateway) = client(
            ScriptedGateway::new(vec![Ok("SELECTED: A".to_string())]),
            RetryPolicy::new(3, 1000, 2),
        );
        let start = Instant::now();

        let reply = client.invoke("prompt").await.unwrap();

        assert_eq!(reply, "SELECTED: A");
        assert_eq!(gateway.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sustained_failure_retries_m_minus_one_times() {
        let (client, gateway) = client(ScriptedGateway::always_failing(), RetryPolicy::new(3, 1000, 2));
        let start = Instant::now();

        let err = client.invoke("prompt").await.unwrap_err();

        assert_eq!(gateway.calls(), 3);
        let CallError::RemoteUnavailable {
            attempts,
            last_error,
        } = err;
        assert_eq!(attempts, 3);
        assert_eq!(last_error, GatewayError::ConnectionError("down".to_string()));

        // 1000 + 2000, and nothing after the third attempt
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(3050), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_retry_waits_only_first_delay() {
        let (client, gateway) = client(
            ScriptedGateway::new(vec![
                Err(GatewayError::Timeout),
                Ok("VERDICT: AGREE".to_string()),
            ]),
            RetryPolicy::new(4, 250, 3),
        );
        let start = Instant::now();

        let reply = client.invoke("prompt").await.unwrap();

        assert_eq!(reply, "VERDICT: AGREE");
        assert_eq!(gateway.calls(), 2);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(250), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(300), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_reply_counts_as_failure() {
        let (client, gateway) = client(
            ScriptedGateway::new(vec![
                Ok(String::new()),
                Ok("   \n".to_string()),
                Ok("REASONING: ok".to_string()),
            ]),
            RetryPolicy::new(3, 0, 1),
        );

        let reply = client.invoke("prompt").await.unwrap();

        assert_eq!(reply, "REASONING: ok");
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_replies_exhaust_budget() {
        let (client, _) = client(
            ScriptedGateway::new(vec![Ok(String::new()), Ok(String::new())]),
            RetryPolicy::new(2, 0, 1),
        );

        let err = client.invoke("prompt").await.unwrap_err();

        assert_eq!(
            err,
            CallError::RemoteUnavailable {
                attempts: 2,
                last_error: GatewayError::EmptyResponse,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_never_sleeps() {
        let (client, gateway) = client(ScriptedGateway::always_failing(), RetryPolicy::new(1, 5000, 2));
        let start = Instant::now();

        assert!(client.invoke("prompt").await.is_err());

        assert_eq!(gateway.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_error_message_mentions_attempts() {
        let err = CallError::RemoteUnavailable {
            attempts: 3,
            last_error: GatewayError::Timeout,
        };
        assert_eq!(
            err.to_string(),
            "Remote model unavailable after 3 attempt(s): Timeout"
        );
    }
}
