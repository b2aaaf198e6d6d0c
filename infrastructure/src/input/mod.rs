//! Question input files
//!
//! Loads batches of questions from JSON and validates them into domain
//! [`Question`](quiz_domain::Question)s before they reach the core.

mod question_file;

pub use question_file::{AnswerItem, QuestionFileError, QuestionFileLoader, QuestionItem};
