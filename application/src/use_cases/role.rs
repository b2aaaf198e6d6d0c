//! Errors shared by the proposer and critic roles

use super::resilient_call::CallError;
use quiz_domain::ResponseParseError;
use thiserror::Error;

/// Which side of the consensus loop produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Proposer,
    Critic,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Proposer => "proposer",
            Role::Critic => "critic",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from a single role invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error(transparent)]
    Remote(#[from] CallError),

    #[error("Malformed {role} response: {reason}")]
    MalformedResponse {
        role: Role,
        reason: ResponseParseError,
    },
}

impl RoleError {
    pub fn malformed(role: Role, reason: ResponseParseError) -> Self {
        RoleError::MalformedResponse { role, reason }
    }

    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, RoleError::Remote(CallError::RemoteUnavailable { .. }))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RoleError::MalformedResponse { .. })
    }
}
