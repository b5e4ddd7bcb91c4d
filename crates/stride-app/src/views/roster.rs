//! # Friend Roster View State
//!
//! The roster ingests friend records one at a time, as they arrive from the
//! external friend source, and maintains the bucketed, sorted structure the
//! indexed picker list renders from. Buckets are keyed by the first letter
//! of the name field selected by the user's sort-order preference, with a
//! `#` default bucket for everything that has no usable letter.
//!
//! The roster is a pure accumulator: `ingest` never blocks and never loses
//! a record, and per-bucket order is insertion order. Re-ingesting the same
//! id appends it again; callers that reload the roster clear it first.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use stride_core::{FriendId, SortOrder};

/// A friend record from the external friend source.
///
/// Immutable once ingested. `picture_url` is an opaque reference; the core
/// never resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Opaque unique identifier from the friend source
    pub id: FriendId,
    /// Given name; may be empty for sources that only supply a display name
    pub first_name: String,
    /// Family name; may be empty for sources that only supply a display name
    pub last_name: String,
    /// Name shown in the picker row
    pub display_name: String,
    /// Opaque avatar reference, resolved by the presentation layer
    pub picture_url: String,
}

/// Key of a roster bucket.
///
/// A letter bucket holds friends whose selected name field starts with that
/// (uppercased) letter; the default bucket holds everything else. The
/// variant order is load-bearing: raw character ordering would put `#`
/// before `A`, but the picker index shows the default bucket last, so
/// `Default` must compare greater than every `Letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BucketKey {
    /// Uppercase first letter of the selected name field
    Letter(char),
    /// The `#` bucket for friends with no usable letter
    Default,
}

impl BucketKey {
    /// Derive the bucket key for a friend under a sort-order preference.
    ///
    /// An empty or non-alphabetic leading character falls back to the
    /// default bucket rather than failing the ingest.
    fn derive(friend: &Friend, sort_order: SortOrder) -> Self {
        let field = match sort_order {
            SortOrder::GivenName => &friend.first_name,
            SortOrder::FamilyName => &friend.last_name,
            SortOrder::UserDefault => return Self::Default,
        };

        match field.chars().next() {
            Some(first) if first.is_alphabetic() => {
                // `to_uppercase` can expand to multiple chars for a handful
                // of scripts; the first one is the index letter.
                match first.to_uppercase().next() {
                    Some(upper) => Self::Letter(upper),
                    None => Self::Default,
                }
            }
            Some(_) => Self::Default,
            None => {
                tracing::warn!(
                    friend_id = %friend.id,
                    ?sort_order,
                    "friend record has no usable name for bucketing, filing under #"
                );
                Self::Default
            }
        }
    }

    /// The character the picker index displays for this bucket.
    #[must_use]
    pub fn as_char(&self) -> char {
        match self {
            Self::Letter(c) => *c,
            Self::Default => '#',
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Bucketed friend roster.
///
/// Owns the bucket map exclusively. Buckets iterate in ascending key order
/// (`A`..`Z`, then `#`); friends within a bucket keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    buckets: BTreeMap<BucketKey, Vec<FriendId>>,
    records: HashMap<FriendId, Friend>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Ingestion ───────────────────────────────────────────

    /// Ingest one friend record, returning the bucket it was filed under.
    ///
    /// Not idempotent: ingesting the same id twice appends it to its bucket
    /// twice. Reload paths must [`clear`](Self::clear) first.
    pub fn ingest(&mut self, friend: Friend, sort_order: SortOrder) -> BucketKey {
        let key = BucketKey::derive(&friend, sort_order);
        tracing::debug!(friend_id = %friend.id, bucket = %key, "ingesting friend");
        self.buckets.entry(key).or_default().push(friend.id.clone());
        self.records.insert(friend.id.clone(), friend);
        key
    }

    /// Remove every bucket and record.
    ///
    /// The reload workflow calls this before re-ingesting so a refreshed
    /// friend list rebuilds from scratch instead of appending duplicates.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.records.clear();
    }

    // ─── Queries ─────────────────────────────────────────────

    /// All buckets in ascending key order, each with its ordered member ids.
    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &[FriendId])> {
        self.buckets.iter().map(|(key, ids)| (*key, ids.as_slice()))
    }

    /// Friends in one bucket, in insertion order.
    ///
    /// Empty for a key with no bucket.
    pub fn friends_in(&self, key: BucketKey) -> impl Iterator<Item = &Friend> {
        self.buckets
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.records.get(id))
    }

    /// Bucket keys in display order (the picker's section index titles).
    pub fn bucket_keys(&self) -> impl Iterator<Item = BucketKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of buckets currently present.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total entries across all buckets (counts literal re-ingestions).
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Look up a friend record by id.
    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.records.get(id)
    }

    /// Bucket key at a display position, if the position exists.
    pub fn bucket_at(&self, section: usize) -> Option<BucketKey> {
        self.buckets.keys().nth(section).copied()
    }

    /// Friend at a (section, row) display position, if it exists.
    ///
    /// Absence is an ordinary outcome here (stale index paths during a
    /// reload), never a panic.
    pub fn friend_at(&self, section: usize, row: usize) -> Option<&Friend> {
        let key = self.bucket_at(section)?;
        let id = self.buckets.get(&key)?.get(row)?;
        self.records.get(id)
    }

    /// Filter friends by a search query.
    ///
    /// Case-insensitive substring match on the display name; an empty query
    /// returns every record. Order follows bucket display order.
    pub fn filter(&self, query: &str) -> Vec<&Friend> {
        let query = query.to_lowercase();
        self.buckets
            .values()
            .flatten()
            .filter_map(|id| self.records.get(id))
            .filter(|f| query.is_empty() || f.display_name.to_lowercase().contains(&query))
            .collect()
    }
}
