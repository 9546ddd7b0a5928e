//! Time sources and the end-of-day cutoff used by the due queue.
use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, optionally shifted by whole simulated days.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    offset_days: i64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset_days(offset_days: i64) -> Self {
        Self { offset_days }
    }
}

impl Clock for SystemClock {
    /// Falls back to the unshifted time if the offset overflows.
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        Duration::try_days(self.offset_days)
            .and_then(|shift| now.checked_add_signed(shift))
            .unwrap_or(now)
    }
}

/// Manually controlled clock.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Offset of the machine's local timezone right now.
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

/// Last millisecond (23:59:59.999) of `now`'s calendar day in the given timezone.
pub fn end_of_day(now: DateTime<Utc>, offset: FixedOffset) -> DateTime<Utc> {
    let local_date = now.with_timezone(&offset).date_naive();
    local_date
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|end| end.and_local_timezone(offset).single())
        .map(|end| end.with_timezone(&Utc))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_end_of_day_utc() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap();
        let end = end_of_day(now, utc());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_end_of_day_respects_offset() {
        // 22:00 UTC is already the next day in UTC+3
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 22, 0, 0).unwrap();
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let end = end_of_day(now, plus_three);
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2024, 6, 16, 20, 59, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_fixed_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        clock.advance_days(2);
        assert_eq!(clock.now(), start + Duration::days(2));

        let shared = Rc::new(clock);
        let handle = Rc::clone(&shared);
        shared.advance(Duration::hours(1));
        assert_eq!(handle.now(), start + Duration::days(2) + Duration::hours(1));
    }

    #[test]
    fn test_system_clock_offset() {
        let shifted = SystemClock::with_offset_days(3).now();
        let plain = SystemClock::new().now();
        let diff = shifted - plain;
        assert!(diff > Duration::days(3) - Duration::minutes(1));
        assert!(diff < Duration::days(3) + Duration::minutes(1));
    }

    #[test]
    fn test_system_clock_huge_offset_falls_back() {
        let before = Utc::now();
        for days in [1_000_000_000, i64::MAX, i64::MIN] {
            let now = SystemClock::with_offset_days(days).now();
            assert!(now - before < Duration::minutes(1));
            assert!(now >= before);
        }
    }
}
