//! Run Consensus use case
//!
//! Drives one question through the proposer/critic loop:
//!
//! ```text
//! Proposing ──▶ Reviewing ──AGREE──▶ Agreed
//!     ▲             │
//!     └──DISAGREE───┤ (iteration < max)
//!                   └──DISAGREE──▶ ForcedStop (iteration == max)
//! ```

use super::propose_answer::ProposerAgent;
use super::resilient_call::ResilientClient;
use super::review_answer::CriticAgent;
use super::role::RoleError;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use quiz_domain::{ConsensusOutcome, ConsensusState, OptionLetter, ProposalResult, Question};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a consensus loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunConsensusError {
    #[error("Proposer failed: {0}")]
    Proposer(RoleError),

    #[error("Critic failed: {0}")]
    Critic(RoleError),
}

impl RunConsensusError {
    pub fn role_error(&self) -> &RoleError {
        match self {
            RunConsensusError::Proposer(e) | RunConsensusError::Critic(e) => e,
        }
    }
}

enum LoopState {
    Proposing {
        previous: Option<OptionLetter>,
        criticism: Option<String>,
    },
    Reviewing(ProposalResult),
    Finished(ConsensusOutcome),
}

/// Use case for answering a single question by proposer/critic consensus
///
/// Stateless between calls; one instance is shared by every question in a
/// batch.
pub struct RunConsensusUseCase<G: LlmGateway + 'static> {
    proposer: ProposerAgent<G>,
    critic: CriticAgent<G>,
    max_iterations: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunConsensusUseCase<G> {
    pub fn new(client: Arc<ResilientClient<G>>, max_iterations: usize) -> Self {
        Self {
            proposer: ProposerAgent::new(Arc::clone(&client)),
            critic: CriticAgent::new(client),
            max_iterations: max_iterations.max(1),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Run the loop until the critic agrees or the iteration budget is spent.
    ///
    /// The first role failure aborts the loop; nothing is retried here beyond
    /// what the resilient client already did.
    pub async fn execute(&self, question: &Question) -> Result<ConsensusOutcome, RunConsensusError> {
        let mut iteration = 1;
        let mut state = LoopState::Proposing {
            previous: None,
            criticism: None,
        };

        loop {
            state = match state {
                LoopState::Proposing {
                    previous,
                    criticism,
                } => {
                    debug!(
                        question_id = question.id(),
                        iteration,
                        state = %ConsensusState::Proposing,
                        "Calling proposer"
                    );
                    let proposal = self
                        .proposer
                        .propose(question, previous, criticism.as_deref())
                        .await
                        .map_err(RunConsensusError::Proposer)?;

                    self.conversation_logger.log(ConversationEvent::for_question(
                        "proposal",
                        question.id(),
                        iteration,
                        json!({
                            "selection": proposal.selection(),
                            "rationale": proposal.rationale(),
                        }),
                    ));
                    LoopState::Reviewing(proposal)
                }

                LoopState::Reviewing(proposal) => {
                    debug!(
                        question_id = question.id(),
                        iteration,
                        state = %ConsensusState::Reviewing,
                        "Calling critic"
                    );
                    let review = self
                        .critic
                        .review(question, proposal.selection(), proposal.rationale())
                        .await
                        .map_err(RunConsensusError::Critic)?;

                    self.conversation_logger.log(ConversationEvent::for_question(
                        "review",
                        question.id(),
                        iteration,
                        json!({
                            "selection": proposal.selection(),
                            "verdict": review.verdict(),
                            "criticism": review.criticism(),
                        }),
                    ));

                    let selection = proposal.selection();
                    if review.agrees() {
                        LoopState::Finished(ConsensusOutcome::agreed(selection, iteration))
                    } else if iteration >= self.max_iterations {
                        LoopState::Finished(ConsensusOutcome::forced(selection, iteration))
                    } else {
                        if review.is_anomalous() {
                            self.conversation_logger.log(ConversationEvent::for_question(
                                "anomalous_verdict",
                                question.id(),
                                iteration,
                                json!({ "selection": selection }),
                            ));
                        }
                        iteration += 1;
                        LoopState::Proposing {
                            previous: Some(selection),
                            criticism: review.criticism().map(str::to_string),
                        }
                    }
                }

                LoopState::Finished(outcome) => {
                    self.log_outcome(question, &outcome);
                    return Ok(outcome);
                }
            };
        }
    }

    fn log_outcome(&self, question: &Question, outcome: &ConsensusOutcome) {
        if outcome.consensus_reached {
            info!(
                question_id = question.id(),
                selection = %outcome.selection,
                iterations = outcome.iterations,
                "Consensus reached"
            );
            self.conversation_logger.log(ConversationEvent::for_question(
                "consensus_reached",
                question.id(),
                outcome.iterations,
                json!({ "selection": outcome.selection, "state": outcome.state() }),
            ));
        } else {
            warn!(
                question_id = question.id(),
                selection = %outcome.selection,
                iterations = outcome.iterations,
                "Max iterations reached without consensus"
            );
            self.conversation_logger.log(ConversationEvent::for_question(
                "forced_stop",
                question.id(),
                outcome.iterations,
                json!({ "selection": outcome.selection, "state": outcome.state() }),
            ));
        }
    }
}
