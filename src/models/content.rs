//! Learnable content: vocabulary words and example sentences.
//!
//! Only the ids matter for scheduling; the text is carried for display.
use super::review_item::{ItemKey, ItemType};
use crate::error::Result;
use serde::{Deserialize, Serialize};

const BUILTIN_DECK: &str = include_str!("../../data/builtin_deck.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub translation: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: i64,
    pub english: String,
    pub translation: String,
}

impl Word {
    pub fn key(&self) -> ItemKey {
        ItemKey::word(self.id)
    }
}

impl Sentence {
    pub fn key(&self) -> ItemKey {
        ItemKey::sentence(self.id)
    }
}

/// Built-in words and sentences shipped with the application.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContentDeck {
    pub words: Vec<Word>,
    pub sentences: Vec<Sentence>,
}

impl ContentDeck {
    pub fn builtin() -> Result<Self> {
        Ok(serde_json::from_str(BUILTIN_DECK)?)
    }

    /// Returns `(english, translation)` for the content behind a key.
    pub fn lookup(&self, key: ItemKey) -> Option<(&str, &str)> {
        match key.item_type {
            ItemType::Word => self
                .words
                .iter()
                .find(|w| w.id == key.id)
                .map(|w| (w.english.as_str(), w.translation.as_str())),
            ItemType::Sentence => self
                .sentences
                .iter()
                .find(|s| s.id == key.id)
                .map(|s| (s.english.as_str(), s.translation.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_deck_parses() {
        let deck = ContentDeck::builtin().unwrap();
        assert!(!deck.words.is_empty());
        assert!(!deck.sentences.is_empty());
    }

    #[test]
    fn test_builtin_ids_unique_per_type() {
        let deck = ContentDeck::builtin().unwrap();
        let words: HashSet<_> = deck.words.iter().map(|w| w.id).collect();
        let sentences: HashSet<_> = deck.sentences.iter().map(|s| s.id).collect();
        assert_eq!(words.len(), deck.words.len());
        assert_eq!(sentences.len(), deck.sentences.len());
    }

    #[test]
    fn test_lookup_distinguishes_types() {
        let deck = ContentDeck::builtin().unwrap();
        let (word, _) = deck.lookup(ItemKey::word(1)).unwrap();
        let (sentence, _) = deck.lookup(ItemKey::sentence(1)).unwrap();
        assert_eq!(word, "appointment");
        assert_ne!(word, sentence);
        assert!(deck.lookup(ItemKey::word(9999)).is_none());
    }
}
