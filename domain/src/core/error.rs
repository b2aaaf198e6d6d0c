//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid option letter: {0}")]
    InvalidOptionLetter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_question_display() {
        let error = DomainError::InvalidQuestion("title is empty".to_string());
        assert_eq!(error.to_string(), "Invalid question: title is empty");
    }
}
