// Copyright (c) 2025 - Cowboy AI, Inc.
//! Time source
//!
//! Domain handlers never read the wall clock; commands carry their
//! timestamp. The application layer obtains it from a [`Clock`] so tests can
//! pin time the way a frozen clock would.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::Timestamp;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Utc::now())
    }
}

/// Clock pinned to an instant until moved explicitly
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock() = instant;
    }

    /// Advance the clock
    pub fn advance(&self, by: chrono::Duration) {
        let mut instant = self.instant.lock();
        *instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(*self.instant.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap());
        assert_eq!(clock.now().to_iso8601(), "2022-06-01T12:00:00.000Z");

        clock.advance(chrono::Duration::milliseconds(1500));
        assert_eq!(clock.now().to_iso8601(), "2022-06-01T12:00:01.500Z");

        clock.set(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(clock.now().to_iso8601(), "2023-01-01T00:00:00.000Z");
    }
}
