//! Prompt templates for the proposer and critic roles

use crate::consensus::parsing::{CRITICISM_LABEL, REASONING_LABEL, SELECTED_LABEL, VERDICT_LABEL};
use crate::core::option::OptionLetter;
use crate::core::question::Question;

/// Templates for generating role prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the proposer to pick one option.
    ///
    /// The "reconsider" block is only added when there is both a previous
    /// selection and a non-empty criticism to react to.
    pub fn proposer_prompt(
        question: &Question,
        previous_selection: Option<OptionLetter>,
        criticism: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            r#"You are an expert at analyzing multiple-choice questions and selecting the best answer.

{}"#,
            Self::question_block(question)
        );

        if let (Some(previous), Some(criticism)) =
            (previous_selection, criticism.filter(|c| !c.trim().is_empty()))
        {
            prompt.push_str(&format!(
                r#"
Previous Selection: {}
Validator Criticism: {}
Please reconsider your answer based on this feedback.
"#,
                previous, criticism
            ));
        }

        prompt.push_str(&format!(
            r#"
Task: Select the single best answer from the options above. Provide your selection and brief reasoning.

Format your response as:
{} [letter only - {}]
{} [your explanation]
"#,
            SELECTED_LABEL,
            Self::letter_list(question),
            REASONING_LABEL
        ));

        prompt
    }

    /// Prompt asking the critic to judge a proposal
    pub fn critic_prompt(question: &Question, selection: OptionLetter, rationale: &str) -> String {
        let selected_text = question
            .option(selection)
            .map(|o| format!("{}. {}", selection, o.content()))
            .unwrap_or_else(|| selection.to_string());

        format!(
            r#"You are a critical reviewer evaluating answer selections for multiple-choice questions.

{}
Proposed Answer:
{}

Answerer's Reasoning:
{}

Task: Critically evaluate whether the proposed answer is the best choice. Consider:
- Does it accurately address the question?
- Are there better options available?
- Is the reasoning sound?

Format your response as:
{} [AGREE or DISAGREE]
If you DISAGREE, also provide:
{} [specific issues and suggested alternative letter]
"#,
            Self::question_block(question),
            selected_text,
            rationale,
            VERDICT_LABEL,
            CRITICISM_LABEL
        )
    }

    fn question_block(question: &Question) -> String {
        let mut block = format!(
            "Question Content:\n{}\n\nQuestion Title:\n{}\n\nAvailable Answers:\n",
            question.content(),
            question.title()
        );
        for (letter, option) in question.lettered_options() {
            block.push_str(&format!("{}. {}\n", letter, option.content()));
        }
        block
    }

    /// "A, B, C, or D"
    fn letter_list(question: &Question) -> String {
        let letters: Vec<String> = question.letters().iter().map(|l| l.to_string()).collect();
        match letters.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}
