//! JSON question-file loader
//!
//! The file holds an array of question records:
//!
//! ```json
//! [
//!   {
//!     "questionNumber": "1",
//!     "title": "Capital of France",
//!     "content": "Which city is the capital of France?",
//!     "type": "option",
//!     "column": "single",
//!     "answers": [{"content": "Berlin"}, {"content": "Paris", "isRight": false}]
//!   }
//! ]
//! ```
//!
//! Every record is validated; all failures are reported together, each with
//! its position in the array.

use quiz_domain::{AnswerOption, DomainError, Question};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// One answer in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    pub content: String,
    #[serde(default)]
    pub is_right: bool,
}

/// One question record in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub question_number: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub answers: Vec<AnswerItem>,
}

impl QuestionItem {
    /// Validate into a domain question
    pub fn to_question(&self) -> Result<Question, DomainError> {
        let options = self
            .answers
            .iter()
            .map(|a| AnswerOption::new(a.content.clone()).with_is_right(a.is_right))
            .collect();
        Question::try_new(
            self.question_number.clone(),
            self.title.clone(),
            self.content.clone(),
            options,
        )
    }
}

/// Errors from reading a question file
#[derive(Error, Debug)]
pub enum QuestionFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid question file JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Question file contains no questions")]
    Empty,

    #[error("{} invalid question(s):\n{}", .0.len(), format_invalid(.0))]
    Invalid(Vec<(usize, DomainError)>),
}

fn format_invalid(errors: &[(usize, DomainError)]) -> String {
    errors
        .iter()
        .map(|(idx, e)| format!("  [{idx}] {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Loads and validates question files
pub struct QuestionFileLoader;

impl QuestionFileLoader {
    /// Read and validate every question in `path`
    pub fn load(path: &Path) -> Result<Vec<Question>, QuestionFileError> {
        let json = std::fs::read_to_string(path).map_err(|source| QuestionFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let questions = Self::parse(&json)?;
        info!(path = %path.display(), count = questions.len(), "Loaded questions");
        Ok(questions)
    }

    /// Parse and validate a JSON array of question records
    pub fn parse(json: &str) -> Result<Vec<Question>, QuestionFileError> {
        let items: Vec<QuestionItem> = serde_json::from_str(json)?;
        if items.is_empty() {
            return Err(QuestionFileError::Empty);
        }
        debug!(count = items.len(), "Parsed question records");
        Self::validate(&items)
    }

    /// Validate records, collecting every failure
    pub fn validate(items: &[QuestionItem]) -> Result<Vec<Question>, QuestionFileError> {
        let mut questions = Vec::with_capacity(items.len());
        let mut invalid = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            match item.to_question() {
                Ok(q) => questions.push(q),
                Err(e) => invalid.push((idx, e)),
            }
        }

        if invalid.is_empty() {
            Ok(questions)
        } else {
            Err(QuestionFileError::Invalid(invalid))
        }
    }
}
