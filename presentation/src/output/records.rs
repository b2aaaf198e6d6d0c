//! Serializable output records
//!
//! JSON shapes emitted by the `json`, `simple` and `annotated` formats.
//! Field names are camelCase to match the question-file wire format.

use quiz_domain::{BatchItemResult, Question};
use serde::Serialize;

/// Full result record (`json` format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord<'a> {
    pub question_number: &'a str,
    pub selected_answer: Option<String>,
    pub error: Option<&'a str>,
    pub validation_iterations: usize,
    pub consensus_reached: bool,
    pub processing_time_ms: u64,
}

impl<'a> From<&'a BatchItemResult> for AnswerRecord<'a> {
    fn from(result: &'a BatchItemResult) -> Self {
        Self {
            question_number: &result.id,
            selected_answer: result.selection().map(|l| l.to_string()),
            error: result.error(),
            validation_iterations: result.iterations(),
            consensus_reached: result.consensus_reached(),
            processing_time_ms: result.elapsed_ms,
        }
    }
}

/// Minimal record (`simple` format); `selectedAnswer` is null on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAnswerRecord<'a> {
    pub question_number: &'a str,
    pub selected_answer: Option<String>,
}

impl<'a> From<&'a BatchItemResult> for SimpleAnswerRecord<'a> {
    fn from(result: &'a BatchItemResult) -> Self {
        Self {
            question_number: &result.id,
            selected_answer: result.selection().map(|l| l.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedAnswer<'a> {
    pub content: &'a str,
    pub is_right: bool,
}

/// Input question echoed back with the selection flagged (`annotated` format)
///
/// On success exactly the selected answer has `isRight = true`. On failure
/// the input flags are kept and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedQuestion<'a> {
    pub question_number: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub answers: Vec<AnnotatedAnswer<'a>>,
    pub selected_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> AnnotatedQuestion<'a> {
    pub fn new(question: &'a Question, result: &'a BatchItemResult) -> Self {
        let selection = result.selection();
        let answers = question
            .lettered_options()
            .map(|(letter, option)| AnnotatedAnswer {
                content: option.content(),
                is_right: match selection {
                    Some(selected) => selected == letter,
                    None => option.is_right(),
                },
            })
            .collect();

        Self {
            question_number: question.id(),
            title: question.title(),
            content: question.content(),
            answers,
            selected_answer: selection.map(|l| l.to_string()),
            error: result.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{AnswerOption, ConsensusOutcome, OptionLetter};

    fn question() -> Question {
        Question::try_new(
            "7",
            "Capital",
            "Which city is the capital of France?",
            vec![
                AnswerOption::new("Berlin").with_is_right(true),
                AnswerOption::new("Paris"),
                AnswerOption::new("Rome"),
            ],
        )
        .unwrap()
    }

    fn answered(letter: char) -> BatchItemResult {
        let letter = OptionLetter::try_from(letter).unwrap();
        BatchItemResult::answered("7", ConsensusOutcome::agreed(letter, 2), 1500)
    }

    #[test]
    fn test_answer_record_json_shape() {
        let result = answered('B');
        let json = serde_json::to_value(AnswerRecord::from(&result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "questionNumber": "7",
                "selectedAnswer": "B",
                "error": null,
                "validationIterations": 2,
                "consensusReached": true,
                "processingTimeMs": 1500
            })
        );
    }

    #[test]
    fn test_failed_answer_record() {
        let result = BatchItemResult::failed("9", "Proposer failed: boom", 20);
        let record = AnswerRecord::from(&result);
        assert_eq!(record.selected_answer, None);
        assert_eq!(record.error, Some("Proposer failed: boom"));
        assert_eq!(record.validation_iterations, 0);
        assert!(!record.consensus_reached);
    }

    #[test]
    fn test_annotated_flags_only_selection() {
        let question = question();
        let result = answered('B');

        let annotated = AnnotatedQuestion::new(&question, &result);

        let flags: Vec<bool> = annotated.answers.iter().map(|a| a.is_right).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(annotated.selected_answer.as_deref(), Some("B"));
        let json = serde_json::to_value(&annotated).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["answers"][1]["isRight"], true);
    }

    #[test]
    fn test_annotated_failure_keeps_input_flags() {
        let question = question();
        let result = BatchItemResult::failed("7", "Critic failed: timeout", 10);

        let annotated = AnnotatedQuestion::new(&question, &result);

        let flags: Vec<bool> = annotated.answers.iter().map(|a| a.is_right).collect();
        assert_eq!(flags, vec![true, false, false]);
        assert_eq!(annotated.error, Some("Critic failed: timeout"));
    }
}
