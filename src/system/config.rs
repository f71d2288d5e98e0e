//! Clock preferences
//!
//! The 12h/24h style is a system-wide setting. The face only reads it, the
//! side button flips it.

use core::sync::atomic::{AtomicBool, Ordering};

use chrono::{FixedOffset, Offset, Utc};

/// Style at boot, `WATCHFACE_CLOCK_24H=0` at build time selects 12h.
const DEFAULT_24H: bool = match option_env!("WATCHFACE_CLOCK_24H") {
    Some(value) => !matches!(value.as_bytes(), b"0" | b"false"),
    None => true,
};

static CLOCK_24H: AtomicBool = AtomicBool::new(DEFAULT_24H);

/// Whether hours are shown as 00–23.
pub fn clock_is_24h_style() -> bool {
    CLOCK_24H.load(Ordering::Relaxed)
}

pub fn set_clock_24h_style(use_24h: bool) {
    CLOCK_24H.store(use_24h, Ordering::Relaxed);
}

/// Switch between 12h and 24h, returns the new style.
pub fn toggle_clock_style() -> bool {
    !CLOCK_24H.fetch_xor(true, Ordering::Relaxed)
}

/// Offset east of UTC in seconds, out-of-range values fall back to UTC.
pub fn utc_offset(secs: i32) -> FixedOffset {
    FixedOffset::east_opt(secs).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_style() {
        set_clock_24h_style(true);
        assert!(!toggle_clock_style());
        assert!(!clock_is_24h_style());
        assert!(toggle_clock_style());
        assert!(clock_is_24h_style());
    }

    #[test]
    fn offsets() {
        assert_eq!(utc_offset(3_600).local_minus_utc(), 3_600);
        assert_eq!(utc_offset(-5 * 3_600).local_minus_utc(), -5 * 3_600);
        assert_eq!(utc_offset(100_000).local_minus_utc(), 0);
    }
}
