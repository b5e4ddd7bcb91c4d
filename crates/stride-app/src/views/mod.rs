//! # View State Module
//!
//! Domain view-state backing the team picker: the bucketed friend roster and
//! the bounded selection. These types are serializable, hold no rendering
//! concerns, and are mutated only through their typed methods.

pub mod roster;
pub mod selection;

pub use roster::{BucketKey, Friend, Roster};
pub use selection::{TeamSelection, MAX_TEAM_SIZE};
