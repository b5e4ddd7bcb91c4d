//! Categorized application errors
//!
//! Structured error types shared by the view state and workflow layers.
//! Frontends use the category helpers to pick severity and copy; the core
//! never retries on its own.

use crate::views::selection::MAX_TEAM_SIZE;
use thiserror::Error;

/// Errors from team selection mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selection already holds the maximum number of members.
    #[error("a team is limited to {MAX_TEAM_SIZE} members")]
    CapacityExceeded,
}

/// Errors surfaced by the workflow layer's external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Backend or transport failure from an external call.
    #[error("network error: {0}")]
    Network(String),
    /// The login provider reported a failure.
    #[error("login failed: {0}")]
    Login(String),
    /// The host key/value store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Whether a retry by the user is likely to help.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Short label for log and toast prefixes.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "Network",
            Self::Login(_) => "Login",
            Self::Storage(_) => "Storage",
        }
    }
}
