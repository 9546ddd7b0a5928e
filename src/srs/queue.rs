//! Queue Selector: which items are due today, and recording review outcomes.
use super::clock::end_of_day;
use super::store::ReviewStore;
use crate::models::{ItemKey, ItemType, Quality, ReviewItem, sm2};
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, warn};

/// Interval (days) from which an item counts as mature.
pub const MATURE_INTERVAL_DAYS: u32 = 21;

/// Items due at or before the end of `now`'s calendar day, in stored order.
pub fn due_queue(store: &ReviewStore, now: DateTime<Utc>, offset: FixedOffset) -> Vec<ReviewItem> {
    let cutoff = end_of_day(now, offset);
    store
        .load_all()
        .into_iter()
        .filter(|item| item.is_due_by(cutoff))
        .collect()
}

/// Reschedules the stored item matching `key` and persists the collection.
///
/// Returns `None` without touching the store if the item is not tracked.
pub fn update_item(
    store: &ReviewStore,
    key: ItemKey,
    quality: Quality,
    now: DateTime<Utc>,
) -> Option<ReviewItem> {
    let mut items = store.load_all();
    let Some(slot) = items.iter_mut().find(|item| item.matches(key)) else {
        warn!(item = %key, "review item not found, update skipped");
        return None;
    };

    let updated = sm2::compute_next(slot, quality, now);
    *slot = updated.clone();
    store.save_all(&items);

    debug!(item = %key, due = %updated.due_date, "review recorded");
    Some(updated)
}

/// Items of a type that have at least one successful review.
pub fn reviewed_items(items: &[ReviewItem], item_type: ItemType) -> Vec<ReviewItem> {
    items
        .iter()
        .filter(|item| item.item_type == item_type && item.repetitions > 0)
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewStats {
    pub total: usize,
    pub due: usize,
    pub new: usize,
    pub learning: usize,
    pub mature: usize,
    pub words: usize,
    pub sentences: usize,
}

impl ReviewStats {
    pub fn compute(items: &[ReviewItem], now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let cutoff = end_of_day(now, offset);
        let mut stats = Self {
            total: items.len(),
            ..Self::default()
        };

        for item in items {
            if item.is_due_by(cutoff) {
                stats.due += 1;
            }
            if item.is_new() {
                stats.new += 1;
            }
            if item.interval >= MATURE_INTERVAL_DAYS {
                stats.mature += 1;
            } else if item.repetitions > 0 {
                stats.learning += 1;
            }
            match item.item_type {
                ItemType::Word => stats.words += 1,
                ItemType::Sentence => stats.sentences += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 20, 9, 0, 0).unwrap()
    }

    fn item_due(id: i64, due: DateTime<Utc>) -> ReviewItem {
        let mut item = ReviewItem::new(id, ItemType::Word, morning());
        item.due_date = due;
        item
    }

    #[test]
    fn test_due_queue_uses_end_of_day() {
        let store = ReviewStore::in_memory();
        let now = morning();
        store.save_all(&[
            item_due(1, now - Duration::days(1)),
            item_due(2, now),
            item_due(3, now + Duration::hours(10)),
            item_due(4, now + Duration::days(1)),
            item_due(5, Utc.with_ymd_and_hms(2024, 7, 21, 0, 0, 0).unwrap()),
        ]);

        let ids: Vec<i64> = due_queue(&store, now, utc()).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_due_queue_honours_timezone() {
        let store = ReviewStore::in_memory();
        // 20:00 UTC on the 20th is already the 21st in UTC+5
        let now = Utc.with_ymd_and_hms(2024, 7, 20, 20, 0, 0).unwrap();
        store.save_all(&[item_due(1, Utc.with_ymd_and_hms(2024, 7, 21, 12, 0, 0).unwrap())]);

        assert!(due_queue(&store, now, utc()).is_empty());
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(due_queue(&store, now, plus_five).len(), 1);
    }

    #[test]
    fn test_update_item_persists() {
        let store = ReviewStore::in_memory();
        store.add(ItemKey::word(1), morning());
        store.add(ItemKey::sentence(1), morning());

        let updated = update_item(&store, ItemKey::word(1), Quality::new(4).unwrap(), morning())
            .unwrap();
        assert_eq!(updated.repetitions, 1);
        assert_eq!(updated.due_date, morning() + Duration::days(1));

        let stored = store.get(ItemKey::word(1)).unwrap();
        assert_eq!(stored, updated);
        // The sentence with the same id is untouched
        assert!(store.get(ItemKey::sentence(1)).unwrap().is_new());
        // Reviewed today, due tomorrow: no longer in today's queue
        assert_eq!(due_queue(&store, morning(), utc()).len(), 1);
    }

    #[test]
    fn test_update_missing_item() {
        let store = ReviewStore::in_memory();
        store.add(ItemKey::word(1), morning());

        let result = update_item(&store, ItemKey::sentence(1), Quality::new(5).unwrap(), morning());
        assert!(result.is_none());
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn test_reviewed_items_filter() {
        let mut reviewed = ReviewItem::new(1, ItemType::Word, morning());
        reviewed.repetitions = 1;
        let items = vec![
            reviewed.clone(),
            ReviewItem::new(2, ItemType::Word, morning()),
            ReviewItem::new(1, ItemType::Sentence, morning()),
        ];

        assert_eq!(reviewed_items(&items, ItemType::Word), vec![reviewed]);
        assert!(reviewed_items(&items, ItemType::Sentence).is_empty());
    }

    #[test]
    fn test_stats() {
        let now = morning();
        let mut learning = item_due(2, now + Duration::days(6));
        learning.repetitions = 2;
        learning.interval = 6;
        learning.last_reviewed_at = Some(now);
        let mut mature = item_due(3, now + Duration::days(40));
        mature.repetitions = 4;
        mature.interval = 40;
        mature.last_reviewed_at = Some(now);
        let mut lapsed = ReviewItem::new(1, ItemType::Sentence, now);
        lapsed.interval = 1;
        lapsed.last_reviewed_at = Some(now - Duration::days(1));

        let items = vec![item_due(1, now), learning, mature, lapsed];
        let stats = ReviewStats::compute(&items, now, utc());

        assert_eq!(
            stats,
            ReviewStats {
                total: 4,
                due: 2,
                new: 1,
                learning: 1,
                mature: 1,
                words: 3,
                sentences: 1,
            }
        );
    }
}
