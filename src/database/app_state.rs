//! Simulated calendar stored next to the review collection.
//!
//! Lets a learner fast-forward whole days to see items come due.

use super::storage::KeyValueStorage;
use crate::error::Result;
use tracing::warn;

pub const DAY_OFFSET_KEY: &str = "clock_offset_days";

/// Largest simulated shift, in days, in either direction.
pub const MAX_DAY_OFFSET: i64 = 100_000;

/// Number of simulated days added to the wall clock.
/// Unparseable values and values beyond `MAX_DAY_OFFSET` count as 0.
pub fn day_offset(storage: &dyn KeyValueStorage) -> Result<i64> {
    let offset = storage
        .get(DAY_OFFSET_KEY)?
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(0);

    if !(-MAX_DAY_OFFSET..=MAX_DAY_OFFSET).contains(&offset) {
        warn!(offset, "simulated day offset out of range, ignoring it");
        return Ok(0);
    }
    Ok(offset)
}

/// Advances the simulated date by 24 hours and returns the new offset.
pub fn advance_day(storage: &dyn KeyValueStorage) -> Result<i64> {
    let next = (day_offset(storage)? + 1).min(MAX_DAY_OFFSET);
    storage.set(DAY_OFFSET_KEY, &next.to_string())?;
    Ok(next)
}

pub fn reset_day(storage: &dyn KeyValueStorage) -> Result<()> {
    storage.remove(DAY_OFFSET_KEY)
}
