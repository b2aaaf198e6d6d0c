//! Proposer role
//!
//! Asks the model to pick one option (optionally reconsidering a previous
//! pick in light of criticism) and parses the `SELECTED:`/`REASONING:` reply.

use super::resilient_call::ResilientClient;
use super::role::{Role, RoleError};
use crate::ports::llm_gateway::LlmGateway;
use quiz_domain::{OptionLetter, PromptTemplate, ProposalResult, Question, parse_proposal_response};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The proposer side of the consensus loop
pub struct ProposerAgent<G: LlmGateway + 'static> {
    client: Arc<ResilientClient<G>>,
}

impl<G: LlmGateway + 'static> ProposerAgent<G> {
    pub fn new(client: Arc<ResilientClient<G>>) -> Self {
        Self { client }
    }

    /// Select an answer for `question`.
    ///
    /// `previous_selection` and `criticism` are only shown to the model when
    /// both are present.
    pub async fn propose(
        &self,
        question: &Question,
        previous_selection: Option<OptionLetter>,
        criticism: Option<&str>,
    ) -> Result<ProposalResult, RoleError> {
        info!(question_id = question.id(), "Proposing answer");

        let prompt = PromptTemplate::proposer_prompt(question, previous_selection, criticism);
        debug!(question_id = question.id(), %prompt, "Proposer prompt");

        let reply = self.client.invoke(&prompt).await?;
        debug!(question_id = question.id(), %reply, "Proposer reply");

        match parse_proposal_response(question, &reply) {
            Ok(proposal) => {
                info!(
                    question_id = question.id(),
                    selection = %proposal.selection(),
                    "Proposer selected"
                );
                Ok(proposal)
            }
            Err(e) => {
                warn!(question_id = question.id(), error = %e, "Failed to parse proposer reply");
                Err(RoleError::malformed(Role::Proposer, e))
            }
        }
    }
}
