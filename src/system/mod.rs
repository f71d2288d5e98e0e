//! System services used by the watch face

use chrono::FixedOffset;

pub use crate::clock::Timestamp;

pub mod config;
pub mod time;

#[cfg(test)]
pub(crate) mod mock;

/// What the watch face needs from the system around it.
pub trait Host {
    /// Current wall-clock instant.
    fn now(&self) -> Timestamp;

    /// Offset used to turn instants into local time.
    fn utc_offset(&self) -> FixedOffset;

    /// Whether hours are shown as 00–23. Read on every update, never cached.
    fn clock_is_24h_style(&self) -> bool;
}
