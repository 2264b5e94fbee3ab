//! # Admission Decisions
//!
//! What the connection layer receives back from the admission hook.

use std::fmt;

/// Which admit branch of the decision tree was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitPath {
    /// Case 1: placeholder bound to the connecting identity.
    FirstJoin,
    /// Case 2: name and identity already match.
    Verified,
    /// Case 4a: known identity under a new name.
    Renamed,
}

impl fmt::Display for AdmitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmitPath::FirstJoin => write!(f, "first-join"),
            AdmitPath::Verified => write!(f, "verified"),
            AdmitPath::Renamed => write!(f, "renamed"),
        }
    }
}

/// Why a session was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Case 3: the name is bound to a different identity.
    IdentityMismatch,
    /// Case 4b: neither the name nor the identity is known.
    NotWhitelisted,
    /// The connection layer supplied an empty name or identity.
    MalformedPrincipal,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::IdentityMismatch => write!(f, "identity mismatch"),
            RejectReason::NotWhitelisted => write!(f, "not whitelisted"),
            RejectReason::MalformedPrincipal => write!(f, "malformed principal"),
        }
    }
}

/// A refusal together with the user-facing disconnect message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectReason,
    pub message: String,
}

/// Result of one admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// Let the session proceed.
    Admit(AdmitPath),
    /// Terminate the session with `Rejection::message`.
    Reject(Rejection),
}

impl AdmissionDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionDecision::Admit(_))
    }

    /// Disconnect message, if rejected.
    pub fn message(&self) -> Option<&str> {
        match self {
            AdmissionDecision::Admit(_) => None,
            AdmissionDecision::Reject(rejection) => Some(&rejection.message),
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            AdmissionDecision::Admit(_) => None,
            AdmissionDecision::Reject(rejection) => Some(rejection.reason),
        }
    }
}
