//! Externally supplied user preferences
//!
//! These facts come from the host platform's contact settings and are read
//! once per roster load; Stride never persists them.

use serde::{Deserialize, Serialize};

/// Contact sort-order preference
///
/// Decides which name field derives a friend's roster bucket key. The host
/// platform may not expose a deterministic ordering at all, in which case
/// every friend lands in the default bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Bucket by the first character of the given (first) name
    GivenName,
    /// Bucket by the first character of the family (last) name
    #[default]
    FamilyName,
    /// No deterministic ordering available; everything goes to `#`
    UserDefault,
}
