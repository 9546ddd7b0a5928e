//! Deck Initializer: seeds one review item per built-in word and sentence.
use super::store::{ReviewStore, dedupe};
use crate::models::{ReviewItem, Sentence, Word};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Seeds the store if it is empty and returns the number of items created.
///
/// The only guard is existing data: seeding with empty lists leaves the store
/// empty, so a later call with content still seeds it.
pub fn initialize_deck(
    store: &ReviewStore,
    words: &[Word],
    sentences: &[Sentence],
    now: DateTime<Utc>,
) -> usize {
    if !store.load_all().is_empty() {
        debug!("review deck already initialized");
        return 0;
    }

    let items: Vec<ReviewItem> = words
        .iter()
        .map(|w| ReviewItem::new(w.id, w.key().item_type, now))
        .chain(
            sentences
                .iter()
                .map(|s| ReviewItem::new(s.id, s.key().item_type, now)),
        )
        .collect();
    let items = dedupe(items);

    if items.is_empty() {
        return 0;
    }

    store.save_all(&items);
    info!(
        words = words.len(),
        sentences = sentences.len(),
        "initialized review deck"
    );
    items.len()
}
