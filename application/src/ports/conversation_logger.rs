//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording what the proposer
//! and critic said for each question (proposals, verdicts, anomalies, final
//! outcomes) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! proposer/critic transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the sink.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier (e.g., "proposal", "review", "forced_stop").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event scoped to one question and iteration.
    ///
    /// `fields` must be a JSON object; `question_id` and `iteration` are
    /// merged into it.
    pub fn for_question(
        event_type: &'static str,
        question_id: &str,
        iteration: usize,
        fields: Value,
    ) -> Self {
        let mut payload = match fields {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        payload.insert("question_id".to_string(), Value::from(question_id));
        payload.insert("iteration".to_string(), Value::from(iteration));
        Self::new(event_type, Value::Object(payload))
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible; logging failures never
/// disrupt consensus.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
