//! Entry point used by the UI layer and the custom content handlers.
use super::clock::Clock;
use super::store::ReviewStore;
use super::{deck, queue};
use crate::models::{ItemKey, ItemType, Quality, ReviewItem, Sentence, Word};
use chrono::{DateTime, FixedOffset, Utc};

/// Ties the review store to a clock and the timezone that defines "today".
pub struct SrsService {
    store: ReviewStore,
    clock: Box<dyn Clock>,
    offset: FixedOffset,
}

impl SrsService {
    pub fn new(store: ReviewStore, clock: Box<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            store,
            clock,
            offset,
        }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn initialize_deck(&self, words: &[Word], sentences: &[Sentence]) -> usize {
        deck::initialize_deck(&self.store, words, sentences, self.now())
    }

    pub fn load_all(&self) -> Vec<ReviewItem> {
        self.store.load_all()
    }

    pub fn due_queue(&self) -> Vec<ReviewItem> {
        queue::due_queue(&self.store, self.now(), self.offset)
    }

    pub fn due_count(&self) -> usize {
        self.due_queue().len()
    }

    /// Records a review of `item`. `None` means the item is no longer tracked.
    pub fn update_item(&self, item: &ReviewItem, quality: Quality) -> Option<ReviewItem> {
        self.update(item.key(), quality)
    }

    pub fn update(&self, key: ItemKey, quality: Quality) -> Option<ReviewItem> {
        queue::update_item(&self.store, key, quality, self.now())
    }

    pub fn add(&self, key: ItemKey) -> bool {
        self.store.add(key, self.now())
    }

    pub fn remove(&self, key: ItemKey) -> bool {
        self.store.remove(key)
    }

    pub fn reviewed_items(&self, item_type: ItemType) -> Vec<ReviewItem> {
        queue::reviewed_items(&self.store.load_all(), item_type)
    }

    pub fn stats(&self) -> queue::ReviewStats {
        queue::ReviewStats::compute(&self.store.load_all(), self.now(), self.offset)
    }
}
