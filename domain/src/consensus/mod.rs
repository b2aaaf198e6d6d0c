//! Proposer/critic consensus domain
//!
//! One question is answered by alternating two roles:
//!
//! ```text
//!   ┌────────────┐  selection + rationale  ┌────────────┐
//!   │ Proposing  │ ──────────────────────▶ │ Reviewing  │
//!   └────────────┘                          └────────────┘
//!         ▲        DISAGREE + criticism        │      │
//!         └────────────────────────────────────┘      │
//!                       AGREE ──▶ Agreed               │
//!          DISAGREE at the iteration bound ──▶ ForcedStop
//! ```
//!
//! This module holds the values exchanged between the roles and the parser
//! that extracts them from model replies. The loop itself lives in the
//! application layer.

pub mod outcome;
pub mod parsing;
pub mod proposal;
pub mod review;

pub use outcome::{ConsensusOutcome, ConsensusState};
pub use parsing::{LabeledLines, ResponseParseError, parse_proposal_response, parse_review_response};
pub use proposal::ProposalResult;
pub use review::{ReviewResult, Verdict};
