// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time sources for entity identifiers and creation dates.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Today's date as the display string stored on new entries.
    fn today(&self) -> String;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn today(&self) -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }
}

/// Formats epoch milliseconds as a `YYYY-MM-DD` date in UTC.
pub fn format_date(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Largest millisecond timestamp chrono can represent.
pub const MAX_ID_MILLIS: u64 = i64::MAX as u64;

/// Hands out strictly increasing millisecond identifiers.
///
/// Two calls within the same millisecond, or a wall clock stepping
/// backwards, still yield distinct ascending values.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicU64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier, never less than or equal to a previous one.
    pub fn next_id(&self, clock: &dyn Clock) -> u64 {
        let now = clock.now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Ensures future ids are greater than `floor`.
    ///
    /// Floors above [`MAX_ID_MILLIS`] are not timestamps and are ignored.
    pub fn observe(&self, floor: u64) {
        if floor > MAX_ID_MILLIS {
            return;
        }
        self.last.fetch_max(floor, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Frozen(u64);

    impl Clock for Frozen {
        fn now_millis(&self) -> u64 {
            self.0
        }

        fn today(&self) -> String {
            format_date(self.0)
        }
    }

    #[test]
    fn ids_increase_within_the_same_millisecond() {
        let ids = IdClock::new();
        let clock = Frozen(1_700_000_000_000);
        let a = ids.next_id(&clock);
        let b = ids.next_id(&clock);
        let c = ids.next_id(&clock);
        assert_eq!(a, 1_700_000_000_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn ids_survive_clock_stepping_backwards() {
        let ids = IdClock::new();
        let first = ids.next_id(&Frozen(2_000));
        let second = ids.next_id(&Frozen(1_000));
        assert!(second > first);
    }

    #[test]
    fn observe_raises_the_floor() {
        let ids = IdClock::new();
        ids.observe(5_000);
        assert_eq!(ids.next_id(&Frozen(10)), 5_001);
    }

    #[test]
    fn out_of_range_floor_does_not_exhaust_ids() {
        let ids = IdClock::new();
        ids.observe(u64::MAX);
        let first = ids.next_id(&Frozen(1_000));
        let second = ids.next_id(&Frozen(1_000));
        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
    }

    #[test]
    fn floor_at_the_limit_still_yields_a_larger_id() {
        let ids = IdClock::new();
        ids.observe(MAX_ID_MILLIS);
        assert_eq!(ids.next_id(&Frozen(10)), MAX_ID_MILLIS + 1);
    }

    #[test]
    fn format_date_uses_iso_days() {
        assert_eq!(format_date(1_710_460_800_000), "2024-03-15");
    }

    #[test]
    fn system_clock_reports_a_date() {
        let today = SystemClock.today();
        assert_eq!(today.len(), 10);
        assert!(SystemClock.now_millis() > 0);
    }
}
