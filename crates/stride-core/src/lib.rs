//! Stride Core - Contract Types
//!
//! Foundational types shared by every consumer of the Stride application
//! core: opaque identifier newtypes and externally supplied preferences.
//! This crate holds no application logic.

pub mod identifiers;
pub mod prefs;

pub use identifiers::{FriendId, UserId};
pub use prefs::SortOrder;
