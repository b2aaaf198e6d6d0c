//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated multiple-choice question
//! - [`option::AnswerOption`] / [`option::OptionLetter`] — options and their letters
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod option;
pub mod question;
