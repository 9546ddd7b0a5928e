//! One review item as seen by a running session.
use super::ReviewItem;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct SessionCard {
    pub item: ReviewItem,
    pub last_graded_at: Option<DateTime<Utc>>,
    /// Set when the item was removed from the store mid-session.
    pub untracked: bool,
}

impl SessionCard {
    pub fn new(item: ReviewItem) -> Self {
        Self {
            item,
            last_graded_at: None,
            untracked: false,
        }
    }

    /// Stores the rescheduled item returned by the scheduler.
    pub fn record_review(&mut self, updated: ReviewItem, at: DateTime<Utc>) {
        self.item = updated;
        self.last_graded_at = Some(at);
    }

    pub fn mark_untracked(&mut self, at: DateTime<Utc>) {
        self.untracked = true;
        self.last_graded_at = Some(at);
    }

    /// Graded this session and the last grade kept the repetition streak.
    /// A failed grade resets `repetitions` to 0, so the item needs another pass.
    pub fn is_recalled(&self) -> bool {
        self.untracked || (self.last_graded_at.is_some() && self.item.repetitions > 0)
    }
}
