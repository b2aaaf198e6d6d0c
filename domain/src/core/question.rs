//! Question value object

use super::error::DomainError;
use super::option::{AnswerOption, MAX_OPTIONS, OptionLetter};
use serde::Serialize;

/// A multiple-choice question to be answered by the proposer/critic pair (Value Object)
///
/// Always holds at least two non-empty options and a non-empty identifier.
/// Instances only come out of [`Question::try_new`], so everything downstream
/// can rely on those invariants without re-checking them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: String,
    title: String,
    content: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Validate and create a new question
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let title = title.into();
        let content = content.into();

        if id.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question identifier cannot be empty".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question {id}: content cannot be empty"
            )));
        }
        if title.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question {id}: title cannot be empty"
            )));
        }
        if options.len() < 2 {
            return Err(DomainError::InvalidQuestion(format!(
                "question {id}: must have at least 2 answer options, got {}",
                options.len()
            )));
        }
        if options.len() > MAX_OPTIONS {
            return Err(DomainError::InvalidQuestion(format!(
                "question {id}: at most {MAX_OPTIONS} answer options are supported, got {}",
                options.len()
            )));
        }
        if let Some(pos) = options.iter().position(|o| o.content().trim().is_empty()) {
            return Err(DomainError::InvalidQuestion(format!(
                "question {id}: answer option {} is empty",
                pos + 1
            )));
        }

        Ok(Self {
            id,
            title,
            content,
            options,
        })
    }

    /// Caller-supplied identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Option named by `letter`, if the question has that many options
    pub fn option(&self, letter: OptionLetter) -> Option<&AnswerOption> {
        self.options.get(letter.index())
    }

    /// Whether `letter` names one of this question's options
    pub fn has_option(&self, letter: OptionLetter) -> bool {
        letter.index() < self.options.len()
    }

    /// Options paired with their letters, in original order
    pub fn lettered_options(&self) -> impl Iterator<Item = (OptionLetter, &AnswerOption)> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(i, o)| OptionLetter::from_index(i).map(|l| (l, o)))
    }

    /// Letters valid for this question, e.g. `[A, B, C, D]` for four options
    pub fn letters(&self) -> Vec<OptionLetter> {
        self.lettered_options().map(|(l, _)| l).collect()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<AnswerOption> {
        items.iter().map(|s| AnswerOption::from(*s)).collect()
    }

    #[test]
    fn test_question_creation() {
        let q = Question::try_new(
            "1",
            "Capital",
            "What is the capital of France?",
            options(&["Berlin", "Paris", "Rome"]),
        )
        .unwrap();
        assert_eq!(q.id(), "1");
        assert_eq!(q.options().len(), 3);
        assert_eq!(q.letters().last().map(|l| l.as_char()), Some('C'));
    }

    #[test]
    fn test_lettered_options_keep_order() {
        let q = Question::try_new("q", "t", "c", options(&["one", "two", "three", "four"])).unwrap();
        let rendered: Vec<String> = q
            .lettered_options()
            .map(|(l, o)| format!("{}. {}", l, o.content()))
            .collect();
        assert_eq!(rendered, vec!["A. one", "B. two", "C. three", "D. four"]);
    }

    #[test]
    fn test_rejects_single_option() {
        let err = Question::try_new("q", "t", "c", options(&["only"])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_rejects_blank_option() {
        let err = Question::try_new("q", "t", "c", options(&["a", "   "])).unwrap_err();
        assert!(err.to_string().contains("option 2"));
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(Question::try_new("", "t", "c", options(&["a", "b"])).is_err());
        assert!(Question::try_new("q", " ", "c", options(&["a", "b"])).is_err());
        assert!(Question::try_new("q", "t", "", options(&["a", "b"])).is_err());
    }

    #[test]
    fn test_rejects_more_options_than_letters() {
        let many: Vec<AnswerOption> = (0..27).map(|i| AnswerOption::new(format!("o{i}"))).collect();
        assert!(Question::try_new("q", "t", "c", many).is_err());
    }

    #[test]
    fn test_supports_eight_options() {
        let eight: Vec<AnswerOption> = (0..8).map(|i| AnswerOption::new(format!("o{i}"))).collect();
        let q = Question::try_new("q", "t", "c", eight).unwrap();
        assert_eq!(q.letters().len(), 8);
        assert!(q.has_option("H".parse().unwrap()));
        assert!(!q.has_option("I".parse().unwrap()));
    }
}
