//! Review Store: the persisted collection of review items.
//!
//! Every operation reads and writes the whole collection. Storage failures
//! are logged and swallowed here: a failed read looks like an empty store and
//! a failed write is dropped, so callers keep working without persistence.

use crate::database::storage::{KeyValueStorage, MemoryStorage};
use crate::models::{ItemKey, ReviewItem};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Storage key holding the JSON array of review items.
pub const SRS_ITEMS_KEY: &str = "srs_items";

pub struct ReviewStore {
    storage: Box<dyn KeyValueStorage>,
}

impl ReviewStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    /// Returns every stored item, or nothing if storage is missing or unreadable.
    pub fn load_all(&self) -> Vec<ReviewItem> {
        let raw = match self.storage.get(SRS_ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read review items, treating store as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ReviewItem>>(&raw) {
            Ok(items) => repair_invalid(dedupe(items)),
            Err(e) => {
                warn!(error = %e, "stored review items are corrupt, treating store as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the whole persisted collection. Failures are logged and dropped;
    /// the return value says whether the write reached storage.
    pub fn save_all(&self, items: &[ReviewItem]) -> bool {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize review items, not saved");
                return false;
            }
        };

        match self.storage.set(SRS_ITEMS_KEY, &json) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, count = items.len(), "failed to save review items");
                false
            }
        }
    }

    /// Starts tracking an item. Returns `false` if it was already tracked.
    pub fn add(&self, key: ItemKey, now: DateTime<Utc>) -> bool {
        let mut items = self.load_all();
        if items.iter().any(|item| item.matches(key)) {
            debug!(item = %key, "review item already exists");
            return false;
        }

        items.push(ReviewItem::new(key.id, key.item_type, now));
        self.save_all(&items);
        debug!(item = %key, "review item added");
        true
    }

    /// Stops tracking an item. Returns `false` if it was not tracked.
    pub fn remove(&self, key: ItemKey) -> bool {
        let mut items = self.load_all();
        let before = items.len();
        items.retain(|item| !item.matches(key));

        if items.len() == before {
            return false;
        }

        self.save_all(&items);
        debug!(item = %key, "review item removed");
        true
    }

    pub fn get(&self, key: ItemKey) -> Option<ReviewItem> {
        self.load_all().into_iter().find(|item| item.matches(key))
    }
}

/// Keeps the first record for each (id, type) pair.
pub(crate) fn dedupe(items: Vec<ReviewItem>) -> Vec<ReviewItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();
    let unique: Vec<ReviewItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.key()))
        .collect();

    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "dropped duplicate review items"
        );
    }
    unique
}

/// Clamps records that break the scheduling invariants instead of failing the read.
pub(crate) fn repair_invalid(mut items: Vec<ReviewItem>) -> Vec<ReviewItem> {
    for item in &mut items {
        if let Some(reason) = item.invalid_reason() {
            warn!(item = %item.key(), reason, "repairing invalid review item");
            item.repair();
        }
    }
    items
}
