//! SM-2 (SuperMemo 2) spaced repetition scheduling.
//!
//! Review intervals grow with consecutive successful recalls:
//! - Quality grades 0-2: the item restarts its growth curve and comes back tomorrow
//! - Quality grades 3-5: 1 day, then 6 days, then the previous interval times the easiness factor
//! - The easiness factor (EF) only changes on successful recalls and never drops below 1.3
//! - The next due date is always the review time plus the interval in whole days

use super::quality::{Quality, Rating};
use super::review_item::{MIN_EASINESS_FACTOR, ReviewItem};
use chrono::{DateTime, Duration, Utc};

/// Upper bound on an interval so the due date stays representable.
pub const MAX_INTERVAL_DAYS: u32 = 1_000_000;

/// Easiness factor after a successful recall of the given quality.
pub fn next_easiness_factor(easiness_factor: f64, quality: Quality) -> f64 {
    let q = quality.value() as f64;
    let new_ef = easiness_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    new_ef.max(MIN_EASINESS_FACTOR)
}

/// Calculates the next state of an item reviewed at `now` with the given quality.
pub fn compute_next(item: &ReviewItem, quality: Quality, now: DateTime<Utc>) -> ReviewItem {
    let (easiness_factor, interval, repetitions) = if quality.is_pass() {
        let repetitions = item.repetitions.saturating_add(1);
        let easiness_factor = next_easiness_factor(item.easiness_factor, quality);
        let interval = match repetitions {
            1 => 1,
            2 => 6,
            _ => grown_interval(item.interval, easiness_factor),
        };
        (easiness_factor, interval, repetitions)
    } else {
        // Failed recall: easiness factor is left alone
        (item.easiness_factor, 1, 0)
    };

    tracing::debug!(
        item = %item.key(),
        quality = quality.value(),
        interval,
        repetitions,
        easiness_factor,
        "scheduled review"
    );

    ReviewItem {
        id: item.id,
        item_type: item.item_type,
        easiness_factor,
        interval,
        repetitions,
        due_date: now + Duration::days(i64::from(interval)),
        last_reviewed_at: Some(now),
    }
}

fn grown_interval(previous: u32, easiness_factor: f64) -> u32 {
    let grown = (f64::from(previous) * easiness_factor).ceil();
    (grown as u32).clamp(1, MAX_INTERVAL_DAYS)
}

/// Interval each rating button would give the item, in `Rating::ALL` order.
pub fn preview_intervals(item: &ReviewItem, now: DateTime<Utc>) -> [u32; 4] {
    Rating::ALL.map(|rating| compute_next(item, rating.quality(), now).interval)
}
