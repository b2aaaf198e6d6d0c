//! Labeled-line response parsing for the proposer and critic roles.
//!
//! Model replies are expected to carry `LABEL: value` lines somewhere in the
//! text. [`LabeledLines`] is a deliberately small extractor: it scans lines,
//! recognizes a leading label, and keeps the rest of the line as the value.
//! It is not a grammar; anything it does not recognize is ignored.
//!
//! | Function | Role | Labels |
//! |----------|------|--------|
//! | [`parse_proposal_response`] | Proposer | `SELECTED:` + `REASONING:` (both required) |
//! | [`parse_review_response`] | Critic | `VERDICT:` (required) + `CRITICISM:` (optional) |

use super::proposal::ProposalResult;
use super::review::{ReviewResult, Verdict};
use crate::core::option::OptionLetter;
use crate::core::question::Question;
use thiserror::Error;

pub const SELECTED_LABEL: &str = "SELECTED:";
pub const REASONING_LABEL: &str = "REASONING:";
pub const VERDICT_LABEL: &str = "VERDICT:";
pub const CRITICISM_LABEL: &str = "CRITICISM:";

/// Why a role response could not be turned into a structured result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("missing required label(s): {}", .0.join(", "))]
    MissingLabels(Vec<&'static str>),

    #[error("selection '{value}' is not one of the options {valid}")]
    UnknownOption { value: String, valid: String },
}

/// First-wins extraction of `LABEL: value` lines.
pub struct LabeledLines<'a> {
    text: &'a str,
}

impl<'a> LabeledLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Value of the first line carrying `label` with a non-empty remainder.
    pub fn first(&self, label: &str) -> Option<&'a str> {
        self.values(label).next()
    }

    /// Values of every line carrying `label`, in order, empty ones skipped.
    pub fn values(&self, label: &str) -> impl Iterator<Item = &'a str> {
        self.text
            .lines()
            .filter_map(move |line| strip_label(line, label))
            .filter(|value| !value.is_empty())
    }
}

/// Strip `label` from the start of `line`, ignoring case and markdown decoration.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let line = line
        .trim()
        .trim_start_matches(['*', '_', '#', '>', '-', '`'])
        .trim_start();
    let head = line.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let value = line[label.len()..]
        .trim_start_matches(['*', '_', '`'])
        .trim()
        .trim_end_matches(['*', '_', '`'])
        .trim_end();
    Some(value)
}

/// Parse a proposer reply into a [`ProposalResult`].
///
/// Both `SELECTED:` and `REASONING:` are required and the selection must name
/// one of the question's options.
pub fn parse_proposal_response(
    question: &Question,
    response: &str,
) -> Result<ProposalResult, ResponseParseError> {
    let lines = LabeledLines::new(response);
    let selected = lines.first(SELECTED_LABEL);
    let reasoning = lines.first(REASONING_LABEL);

    let (selected, reasoning) = match (selected, reasoning) {
        (Some(s), Some(r)) => (s, r),
        (s, r) => {
            let mut missing = Vec::new();
            if s.is_none() {
                missing.push(SELECTED_LABEL);
            }
            if r.is_none() {
                missing.push(REASONING_LABEL);
            }
            return Err(ResponseParseError::MissingLabels(missing));
        }
    };

    let letter = OptionLetter::parse_selection(selected)
        .filter(|l| question.has_option(*l))
        .ok_or_else(|| ResponseParseError::UnknownOption {
            value: selected.to_string(),
            valid: letter_range(question),
        })?;

    Ok(ProposalResult::new(letter, reasoning))
}

/// Parse a critic reply into a [`ReviewResult`].
///
/// Only `VERDICT:` lines whose value is exactly AGREE or DISAGREE (any case)
/// count; others are skipped as if the label were absent. A missing
/// `CRITICISM:` is left to the caller to report.
pub fn parse_review_response(response: &str) -> Result<ReviewResult, ResponseParseError> {
    let lines = LabeledLines::new(response);

    let verdict = lines
        .values(VERDICT_LABEL)
        .find_map(|v| v.parse::<Verdict>().ok())
        .ok_or_else(|| ResponseParseError::MissingLabels(vec![VERDICT_LABEL]))?;

    let criticism = lines.first(CRITICISM_LABEL).map(str::to_string);

    Ok(ReviewResult::new(verdict, criticism))
}

fn letter_range(question: &Question) -> String {
    let letters = question.letters();
    match (letters.first(), letters.last()) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => String::new(),
    }
}
