//! Host with a hand-set clock for tests

use core::cell::Cell;

use chrono::{FixedOffset, NaiveDate};

use super::{Host, Timestamp};

pub struct MockHost {
    now: Cell<Timestamp>,
    offset: FixedOffset,
    use_24h: Cell<bool>,
}

impl MockHost {
    pub fn new(now: Timestamp, use_24h: bool) -> Self {
        Self {
            now: Cell::new(now),
            offset: FixedOffset::east_opt(0).unwrap(),
            use_24h: Cell::new(use_24h),
        }
    }

    /// Host in UTC at 2024-03-03 `hour`:`minute`:00.
    pub fn at(hour: u32, minute: u32, use_24h: bool) -> Self {
        Self::new(timestamp(hour, minute), use_24h)
    }

    pub fn set_now(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn set_time(&self, hour: u32, minute: u32) {
        self.now.set(timestamp(hour, minute));
    }

    pub fn set_24h_style(&self, use_24h: bool) {
        self.use_24h.set(use_24h);
    }
}

pub fn timestamp(hour: u32, minute: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 3, 3)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

impl Host for MockHost {
    fn now(&self) -> Timestamp {
        self.now.get()
    }

    fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    fn clock_is_24h_style(&self) -> bool {
        self.use_24h.get()
    }
}
