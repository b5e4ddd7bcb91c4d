//! Core identifier types used across Stride
//!
//! Identifiers are opaque tokens minted by external services; Stride never
//! inspects their contents, only compares and stores them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Friend identifier
///
/// An opaque, unique token assigned by the external friend source. Used as
/// the key for roster buckets and team selection membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    /// Create a friend ID from an externally supplied token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FriendId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for FriendId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<FriendId> for String {
    fn from(id: FriendId) -> Self {
        id.0
    }
}

/// Authenticated user identifier
///
/// The opaque token the external identity provider assigns to the logged-in
/// user. Read once at launch to resolve the initial session state, and by
/// the participant-creation call after login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from an externally supplied token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
