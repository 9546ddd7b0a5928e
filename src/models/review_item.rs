//! Scheduling record for one word or sentence.
use crate::error::SrsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Easiness factor every new item starts with.
pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;

/// Lower bound for the easiness factor.
pub const MIN_EASINESS_FACTOR: f64 = 1.3;

/// Kind of content an item tracks. Words and sentences have separate id spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Word,
    Sentence,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Word => "word",
            ItemType::Sentence => "sentence",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" | "w" => Ok(ItemType::Word),
            "sentence" | "s" => Ok(ItemType::Sentence),
            _ => Err(SrsError::UnknownItemType(s.to_string())),
        }
    }
}

/// Identity of a review item: the content id plus its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub id: i64,
    pub item_type: ItemType,
}

impl ItemKey {
    pub fn new(id: i64, item_type: ItemType) -> Self {
        Self { id, item_type }
    }

    pub fn word(id: i64) -> Self {
        Self::new(id, ItemType::Word)
    }

    pub fn sentence(id: i64) -> Self {
        Self::new(id, ItemType::Sentence)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.item_type, self.id)
    }
}

/// Spaced-repetition state of one item.
///
/// Serialized with camelCase field names; `lastReviewedAt` is omitted until
/// the first review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: i64,
    pub item_type: ItemType,
    pub easiness_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewItem {
    /// Creates a never-reviewed item that is due immediately.
    pub fn new(id: i64, item_type: ItemType, now: DateTime<Utc>) -> Self {
        Self {
            id,
            item_type,
            easiness_factor: DEFAULT_EASINESS_FACTOR,
            interval: 0,
            repetitions: 0,
            due_date: now,
            last_reviewed_at: None,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.id, self.item_type)
    }

    pub fn matches(&self, key: ItemKey) -> bool {
        self.id == key.id && self.item_type == key.item_type
    }

    pub fn is_new(&self) -> bool {
        self.repetitions == 0 && self.last_reviewed_at.is_none()
    }

    pub fn is_due_by(&self, cutoff: DateTime<Utc>) -> bool {
        self.due_date <= cutoff
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_reason().is_none()
    }

    /// Describes the first broken scheduling invariant, if any.
    pub fn invalid_reason(&self) -> Option<&'static str> {
        if !self.easiness_factor.is_finite() {
            Some("easiness factor is not a number")
        } else if self.easiness_factor < MIN_EASINESS_FACTOR {
            Some("easiness factor below 1.3")
        } else if self.repetitions >= 1 && self.interval == 0 {
            Some("reviewed item has a zero interval")
        } else {
            None
        }
    }

    /// Clamps a record back into range, keeping its review history.
    /// Returns `true` if anything changed.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;
        if !self.easiness_factor.is_finite() {
            self.easiness_factor = DEFAULT_EASINESS_FACTOR;
            changed = true;
        } else if self.easiness_factor < MIN_EASINESS_FACTOR {
            self.easiness_factor = MIN_EASINESS_FACTOR;
            changed = true;
        }
        if self.repetitions >= 1 && self.interval == 0 {
            self.interval = 1;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_item_defaults() {
        let now = sample_time();
        let item = ReviewItem::new(7, ItemType::Word, now);

        assert_eq!(item.easiness_factor, 2.5);
        assert_eq!(item.interval, 0);
        assert_eq!(item.repetitions, 0);
        assert_eq!(item.due_date, now);
        assert!(item.last_reviewed_at.is_none());
        assert!(item.is_new());
    }

    #[test]
    fn test_serialized_shape() {
        let item = ReviewItem::new(3, ItemType::Sentence, sample_time());
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["itemType"], "sentence");
        assert_eq!(value["easinessFactor"], 2.5);
        assert_eq!(value["interval"], 0);
        assert_eq!(value["repetitions"], 0);
        assert_eq!(value["dueDate"], "2024-03-10T09:30:00Z");
        assert!(value.get("lastReviewedAt").is_none());
    }

    #[test]
    fn test_parses_millisecond_timestamps() {
        let json = r#"{
            "id": 12,
            "itemType": "word",
            "easinessFactor": 2.36,
            "interval": 6,
            "repetitions": 2,
            "dueDate": "2024-03-16T09:30:00.000Z",
            "lastReviewedAt": "2024-03-10T09:30:00.000Z"
        }"#;

        let item: ReviewItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key(), ItemKey::word(12));
        assert_eq!(item.easiness_factor, 2.36);
        assert_eq!(item.last_reviewed_at, Some(sample_time()));
        assert!(!item.is_new());
    }

    #[test]
    fn test_rejects_unknown_item_type() {
        let json = r#"{"id":1,"itemType":"lesson","easinessFactor":2.5,
            "interval":0,"repetitions":0,"dueDate":"2024-03-10T09:30:00Z"}"#;
        assert!(serde_json::from_str::<ReviewItem>(json).is_err());
    }

    #[test]
    fn test_item_type_from_str() {
        assert_eq!("Word".parse::<ItemType>().unwrap(), ItemType::Word);
        assert_eq!("s".parse::<ItemType>().unwrap(), ItemType::Sentence);
        assert!("lesson".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_validity() {
        let now = sample_time();
        let mut item = ReviewItem::new(1, ItemType::Word, now);
        assert!(item.is_valid());

        item.easiness_factor = 0.4;
        assert_eq!(item.invalid_reason(), Some("easiness factor below 1.3"));

        item.easiness_factor = 1.3;
        item.repetitions = 3;
        assert!(!item.is_valid());
        item.interval = 1;
        assert!(item.is_valid());

        item.easiness_factor = f64::NAN;
        assert!(!item.is_valid());
    }

    #[test]
    fn test_repair_clamps_and_keeps_history() {
        let mut item = ReviewItem::new(1, ItemType::Word, sample_time());
        item.easiness_factor = -5.0;
        item.repetitions = 7;
        item.last_reviewed_at = Some(sample_time());

        assert!(item.repair());
        assert_eq!(item.easiness_factor, MIN_EASINESS_FACTOR);
        assert_eq!(item.interval, 1);
        assert_eq!(item.repetitions, 7);
        assert!(item.is_valid());
        assert!(!item.repair());
    }

    #[test]
    fn test_same_id_different_type_are_distinct() {
        let now = sample_time();
        let word = ReviewItem::new(1, ItemType::Word, now);
        assert!(word.matches(ItemKey::word(1)));
        assert!(!word.matches(ItemKey::sentence(1)));
    }
}
