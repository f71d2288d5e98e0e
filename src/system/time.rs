//! Time keeping module for PineTime
//!
//! The watch has no battery-backed clock, so wall-clock time is a reference
//! timestamp plus the uptime elapsed since that reference was taken.

use super::Timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeReference {
    /// Clock time
    timestamp: Timestamp,
    /// Uptime in seconds when `timestamp` was valid
    uptime: u64,
}

impl TimeReference {
    /// Create new time reference taken at `uptime` seconds after boot
    pub fn new(timestamp: Timestamp, uptime: u64) -> Self {
        Self { timestamp, uptime }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Wall-clock time at `uptime` seconds after boot
    pub fn now(&self, uptime: u64) -> Timestamp {
        let elapsed = uptime.saturating_sub(self.reference.uptime);
        self.reference
            .timestamp
            .saturating_add(i64::try_from(elapsed).unwrap_or(i64::MAX))
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }
}

/// Seconds to sleep so that `now` lands on the next full minute (1..=60).
pub fn seconds_until_next_minute(now: Timestamp) -> u64 {
    (60 - now.rem_euclid(60)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_uptime_from_reference() {
        let time = TimeManager::init(TimeReference::new(1_700_000_000, 10));
        assert_eq!(time.now(10), 1_700_000_000);
        assert_eq!(time.now(70), 1_700_000_060);
        // Uptime before the reference was taken
        assert_eq!(time.now(3), 1_700_000_000);
    }

    #[test]
    fn set_time_replaces_reference() {
        let mut time = TimeManager::default();
        assert_eq!(time.now(5), 5);
        time.set_time(TimeReference::new(1_000, 5));
        assert_eq!(time.now(6), 1_001);
    }

    #[test]
    fn next_minute_boundary() {
        assert_eq!(seconds_until_next_minute(120), 60);
        assert_eq!(seconds_until_next_minute(121), 59);
        assert_eq!(seconds_until_next_minute(179), 1);
        assert_eq!(seconds_until_next_minute(-1), 1);
    }
}
