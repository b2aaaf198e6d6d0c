//! End-to-end batch scenarios against a scripted model.
//!
//! The scripted gateway decides per question (by title) how the proposer and
//! critic behave, so one batch can mix agreement, forced stops, transient
//! outages and hard failures.

use async_trait::async_trait;
use quiz_application::{
    BatchProgressNotifier, ConversationEvent, ConversationLogger, GatewayError, LlmGateway,
    ProcessBatchUseCase, ResilientClient, RetryPolicy, RunConsensusUseCase,
};
use quiz_domain::{AnswerOption, BatchItemResult, BatchSummary, Question};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behaviour keyed by a marker in the question title
struct ScriptedModel {
    /// Remaining transient failures per marker
    outages: Mutex<HashMap<&'static str, usize>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new() -> Self {
        Self {
            outages: Mutex::new(HashMap::from([("flaky", 1)])),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedModel {
    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;

        if prompt.contains("broken") {
            return Err(GatewayError::ConnectionError("connection refused".to_string()));
        }
        if prompt.contains("flaky") {
            let mut outages = self.outages.lock().unwrap();
            if let Some(left) = outages.get_mut("flaky")
                && *left > 0
            {
                *left -= 1;
                return Err(GatewayError::Timeout);
            }
        }

        let is_critic = prompt.contains("VERDICT:");
        if prompt.contains("stubborn") {
            return Ok(if is_critic {
                "VERDICT: DISAGREE\nCRITICISM: still not convinced".to_string()
            } else {
                "SELECTED: A\nREASONING: I stand by it".to_string()
            });
        }
        if prompt.contains("gibberish") && !is_critic {
            return Ok("I think the answer is the first one.".to_string());
        }

        Ok(if is_critic {
            "VERDICT: AGREE".to_string()
        } else {
            "SELECTED: C\nREASONING: it fits best".to_string()
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

#[derive(Default)]
struct EventCollector {
    events: Mutex<Vec<ConversationEvent>>,
}

impl ConversationLogger for EventCollector {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Default)]
struct CountingProgress {
    completed: AtomicUsize,
    summary: Mutex<Option<BatchSummary>>,
}

impl BatchProgressNotifier for CountingProgress {
    fn on_batch_start(&self, _total_questions: usize) {}

    fn on_question_complete(&self, _result: &BatchItemResult) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        *self.summary.lock().unwrap() = Some(*summary);
    }
}

fn question(id: &str, title: &str) -> Question {
    Question::try_new(
        id,
        title,
        "Pick the option that fits best.",
        vec![
            AnswerOption::new("first"),
            AnswerOption::new("second"),
            AnswerOption::new("third"),
        ],
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn mixed_batch_produces_one_result_per_question() {
    let model = Arc::new(ScriptedModel::new());
    let logger = Arc::new(EventCollector::default());
    let client = Arc::new(ResilientClient::new(
        Arc::clone(&model),
        RetryPolicy::new(3, 1000, 2),
    ));
    let consensus = RunConsensusUseCase::new(client, 4).with_conversation_logger(logger.clone());
    let batch = ProcessBatchUseCase::new(Arc::new(consensus), 2);
    let progress = Arc::new(CountingProgress::default());

    let (results, summary) = batch
        .process_with_progress(
            vec![
                question("1", "easy"),
                question("2", "stubborn"),
                question("3", "flaky"),
                question("4", "broken"),
                question("5", "gibberish"),
            ],
            progress.clone(),
        )
        .await;

    assert_eq!(results.len(), 5);
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    // agreed on the first round trip
    assert_eq!(results[0].selection().map(|l| l.as_char()), Some('C'));
    assert_eq!(results[0].iterations(), 1);
    assert!(results[0].consensus_reached());

    // forced stop returns the last proposal
    assert_eq!(results[1].selection().map(|l| l.as_char()), Some('A'));
    assert_eq!(results[1].iterations(), 4);
    assert!(!results[1].consensus_reached());

    // one timeout, then recovery after the first backoff
    assert!(results[2].consensus_reached());
    assert!(results[2].elapsed_ms >= 1000);

    // outage outlasts the retry budget
    let error = results[3].error().unwrap();
    assert!(error.contains("3 attempt(s)"), "{error}");
    assert!(error.contains("connection refused"), "{error}");

    // proposer reply without labels
    let error = results[4].error().unwrap();
    assert!(error.contains("Malformed proposer response"), "{error}");

    assert_eq!(summary.total, 5);
    assert_eq!(summary.agreed, 2);
    assert_eq!(summary.forced, 1);
    assert_eq!(summary.failed, 2);
    assert_eq!(progress.completed.load(Ordering::SeqCst), 5);
    assert_eq!(*progress.summary.lock().unwrap(), Some(summary));

    let events = logger.events.lock().unwrap();
    let forced: Vec<_> = events
        .iter()
        .filter(|e| e.event_type == "forced_stop")
        .collect();
    assert_eq!(forced.len(), 1);
    assert_eq!(forced[0].payload["question_id"], "2");
}

#[tokio::test(start_paused = true)]
async fn every_question_gets_a_result_when_the_model_is_down() {
    let model = Arc::new(ScriptedModel::new());
    let client = Arc::new(ResilientClient::new(
        Arc::clone(&model),
        RetryPolicy::new(2, 0, 1),
    ));
    let batch = ProcessBatchUseCase::new(Arc::new(RunConsensusUseCase::new(client, 5)), 3);

    let questions: Vec<Question> = (0..7)
        .map(|i| question(&format!("q{i}"), "broken"))
        .collect();
    let results = batch.process(questions).await;

    assert_eq!(results.len(), 7);
    assert!(results.iter().all(|r| !r.is_success()));
    assert!(results.iter().all(|r| r.selection().is_none()));
    // only proposer calls, two attempts each
    assert_eq!(model.calls.load(Ordering::SeqCst), 14);
}
