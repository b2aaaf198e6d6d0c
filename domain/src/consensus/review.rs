//! Critic output

use serde::{Deserialize, Serialize};

/// Critic's judgement of a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Agree,
    Disagree,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Agree => "AGREE",
            Verdict::Disagree => "DISAGREE",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("AGREE") {
            Ok(Verdict::Agree)
        } else if s.eq_ignore_ascii_case("DISAGREE") {
            Ok(Verdict::Disagree)
        } else {
            Err(format!("Invalid verdict: {s}. Must be AGREE or DISAGREE"))
        }
    }
}

/// Critic output for one iteration: a verdict plus optional criticism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    criticism: Option<String>,
}

impl ReviewResult {
    pub fn new(verdict: Verdict, criticism: Option<String>) -> Self {
        let criticism = criticism.filter(|c| !c.trim().is_empty());
        Self { verdict, criticism }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn agrees(&self) -> bool {
        self.verdict == Verdict::Agree
    }

    pub fn criticism(&self) -> Option<&str> {
        self.criticism.as_deref()
    }

    /// A disagreement that came without any criticism to act on
    pub fn is_anomalous(&self) -> bool {
        self.verdict == Verdict::Disagree && self.criticism.is_none()
    }
}
