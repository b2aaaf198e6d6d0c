//! Critic role
//!
//! Asks the model to judge a proposed selection and parses the
//! `VERDICT:`/`CRITICISM:` reply.

use super::resilient_call::ResilientClient;
use super::role::{Role, RoleError};
use crate::ports::llm_gateway::LlmGateway;
use quiz_domain::{OptionLetter, PromptTemplate, Question, ReviewResult, parse_review_response};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The critic side of the consensus loop
pub struct CriticAgent<G: LlmGateway + 'static> {
    client: Arc<ResilientClient<G>>,
}

impl<G: LlmGateway + 'static> CriticAgent<G> {
    pub fn new(client: Arc<ResilientClient<G>>) -> Self {
        Self { client }
    }

    /// Review `selection` for `question`.
    ///
    /// A DISAGREE without criticism is returned as-is after a warning.
    pub async fn review(
        &self,
        question: &Question,
        selection: OptionLetter,
        rationale: &str,
    ) -> Result<ReviewResult, RoleError> {
        info!(question_id = question.id(), %selection, "Reviewing answer");

        let prompt = PromptTemplate::critic_prompt(question, selection, rationale);
        debug!(question_id = question.id(), %prompt, "Critic prompt");

        let reply = self.client.invoke(&prompt).await?;
        debug!(question_id = question.id(), %reply, "Critic reply");

        let review = parse_review_response(&reply).map_err(|e| {
            warn!(question_id = question.id(), error = %e, "Failed to parse critic reply");
            RoleError::malformed(Role::Critic, e)
        })?;

        if review.is_anomalous() {
            warn!(
                question_id = question.id(),
                "Critic disagreed but did not provide criticism"
            );
        }

        info!(question_id = question.id(), verdict = %review.verdict(), "Critic verdict");
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use quiz_domain::{AnswerOption, Verdict};

    struct FixedGateway(String);

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn send(&self, _prompt: &str) -> Result<String, GatewayError> {
            Ok(self.0.clone())
        }
    }

    fn critic(reply: &str) -> CriticAgent<FixedGateway> {
        let client = ResilientClient::new(
            Arc::new(FixedGateway(reply.to_string())),
            RetryPolicy::new(1, 0, 1),
        );
        CriticAgent::new(Arc::new(client))
    }

    fn question() -> Question {
        Question::try_new(
            "q",
            "Primes",
            "Which number is prime?",
            vec![AnswerOption::new("4"), AnswerOption::new("7")],
        )
        .unwrap()
    }

    fn b() -> OptionLetter {
        OptionLetter::try_from('B').unwrap()
    }

    #[tokio::test]
    async fn test_review_agree() {
        let review = critic("VERDICT: AGREE").review(&question(), b(), "7 is prime").await.unwrap();
        assert!(review.agrees());
    }

    #[tokio::test]
    async fn test_review_disagree_with_criticism() {
        let review = critic("VERDICT: DISAGREE\nCRITICISM: 4 = 2 x 2, but B is right anyway")
            .review(&question(), b(), "because")
            .await
            .unwrap();
        assert_eq!(review.verdict(), Verdict::Disagree);
        assert!(review.criticism().is_some());
    }

    #[tokio::test]
    async fn test_review_disagree_without_criticism_is_not_an_error() {
        let review = critic("VERDICT: Disagree")
            .review(&question(), b(), "because")
            .await
            .unwrap();
        assert!(review.is_anomalous());
    }

    #[tokio::test]
    async fn test_review_invalid_verdict_is_malformed() {
        let err = critic("VERDICT: unsure\nCRITICISM: hmm")
            .review(&question(), b(), "because")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RoleError::MalformedResponse {
                role: Role::Critic,
                ..
            }
        ));
    }
}
