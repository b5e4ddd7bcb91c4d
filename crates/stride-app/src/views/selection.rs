//! # Team Selection View State
//!
//! The bounded multi-selection backing the team picker. The cap is a
//! business rule (team size limit) enforced at the point of mutation, so
//! the picker can reject the 12th tap immediately instead of at submission.

use crate::errors::SelectionError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use stride_core::FriendId;

/// Maximum number of members a team can hold.
pub const MAX_TEAM_SIZE: usize = 11;

/// Duplicate-free, capped selection of friends for team creation.
///
/// Membership references identifiers owned by the roster; the selection
/// itself never validates them (out-of-roster ids are a caller error).
/// Iteration order is insertion order, but no consumer may rely on it:
/// the selection is handed off as a plain member set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamSelection {
    members: IndexSet<FriendId>,
}

impl TeamSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Add a friend to the selection.
    ///
    /// Idempotent when the friend is already selected. Fails with
    /// [`SelectionError::CapacityExceeded`] when the cap is reached and the
    /// friend is not already a member; the selection is left unchanged.
    /// The cap counts distinct current members, never cumulative taps.
    pub fn select(&mut self, id: FriendId) -> Result<(), SelectionError> {
        if self.members.contains(&id) {
            return Ok(());
        }
        if self.members.len() >= MAX_TEAM_SIZE {
            return Err(SelectionError::CapacityExceeded);
        }
        self.members.insert(id);
        Ok(())
    }

    /// Remove a friend from the selection. No-op if not selected.
    pub fn deselect(&mut self, id: &FriendId) {
        self.members.shift_remove(id);
    }

    /// Drop every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    // ─── Queries ─────────────────────────────────────────────

    /// Whether a friend is currently selected.
    pub fn contains(&self, id: &FriendId) -> bool {
        self.members.contains(id)
    }

    /// Number of selected members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether another distinct member would be rejected.
    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    /// The selected members.
    pub fn members(&self) -> impl Iterator<Item = &FriendId> {
        self.members.iter()
    }

    /// Consume the selection into the member set handed to team creation.
    pub fn into_members(self) -> IndexSet<FriendId> {
        self.members
    }
}
