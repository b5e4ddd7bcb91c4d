//! Roster load workflow
//!
//! Drains a [`FriendSource`] into the roster. Reloads are clear-and-rebuild:
//! the roster is emptied before ingestion so a refreshed friend list never
//! appends duplicate entries on top of a previous load.

use crate::services::FriendSource;
use crate::views::roster::Roster;
use stride_core::SortOrder;

/// Replace the roster's contents with the source's current friend list.
///
/// Records are ingested one at a time in arrival order; the per-bucket
/// order of the rebuilt roster is therefore the source's delivery order.
/// Returns the number of records ingested.
pub async fn load_roster(
    roster: &mut Roster,
    sort_order: SortOrder,
    source: &dyn FriendSource,
) -> usize {
    roster.clear();

    let mut incoming = source.subscribe().await;
    let mut count = 0;
    while let Some(friend) = incoming.recv().await {
        roster.ingest(friend, sort_order);
        count += 1;
    }

    tracing::info!(count, buckets = roster.bucket_count(), "roster loaded");
    count
}
