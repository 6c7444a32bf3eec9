//! Wall-clock source for the store.
//!
//! All "today" and "now" decisions go through `Clock` so streak and
//! suggestion logic can run against a pinned instant.

use chrono::{DateTime, Duration, FixedOffset, Local};
use std::sync::Mutex;

/// Source of the current device-local time.
pub trait Clock: Send + Sync {
    /// Current instant, carrying the device's UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock backed by the system time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Pins the clock to `now`.
    pub fn set(&self, now: DateTime<FixedOffset>) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{DateTime, Duration};

    #[test]
    fn fixed_clock_advances() {
        let start = DateTime::parse_from_rfc3339("2024-01-03T10:00:00+00:00").unwrap();
        let clock = FixedClock::new(start);
        clock.advance(Duration::hours(26));
        assert_eq!(
            clock.now(),
            DateTime::parse_from_rfc3339("2024-01-04T12:00:00+00:00").unwrap()
        );
    }
}
