//! Clock readings for the watch face
//!
//! Turns a timestamp into the strings and the fill width shown on screen.
//! Nothing in here keeps state, every call reads only its arguments.

use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// Offset of the "next hour" label.
pub const SECONDS_PER_HOUR: Timestamp = 3_600;

/// Fill width at minute 0.
pub const FILL_BASE_WIDTH: u32 = 12;
/// Fill growth per minute.
pub const FILL_STEP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The timestamp has no local calendar representation.
    InvalidTimestamp,
    /// A value did not fit into two digits.
    Format,
}

/// Two ASCII digits, the text of every label on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits([u8; 2]);

impl Digits {
    /// Shown until the first real reading arrives.
    pub const PLACEHOLDER: Self = Self(*b"00");

    /// Format `value` zero-padded to two digits.
    pub fn new(value: u32) -> Result<Self, Error> {
        let mut buf = [0u8; 2];
        let len = format_no_std::show(&mut buf, format_args!("{:02}", value))
            .map_err(|_| Error::Format)?
            .len();
        if len != 2 {
            return Err(Error::Format);
        }
        Ok(Self(buf))
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII digits
        core::str::from_utf8(&self.0).unwrap_or("00")
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host preference for hour labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// 01–12, midnight and noon are 12
    TwelveHour,
    /// 00–23
    TwentyFourHour,
}

impl HourFormat {
    pub fn from_24h_style(use_24h: bool) -> Self {
        if use_24h {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    /// Hour of `time` in this format.
    pub fn hour(self, time: &NaiveDateTime) -> u32 {
        match self {
            Self::TwentyFourHour => time.hour(),
            Self::TwelveHour => time.hour12().1,
        }
    }
}

/// Everything the labels show for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: Digits,
    pub minute: Digits,
    pub next_hour: Digits,
    pub minute_of_hour: u32,
}

impl ClockReading {
    /// State before the first computation.
    pub const PLACEHOLDER: Self = Self {
        hour: Digits::PLACEHOLDER,
        minute: Digits::PLACEHOLDER,
        next_hour: Digits::PLACEHOLDER,
        minute_of_hour: 0,
    };
}

impl Default for ClockReading {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Decompose `now` into local calendar fields.
pub fn local_time(now: Timestamp, offset: FixedOffset) -> Result<NaiveDateTime, Error> {
    let utc = DateTime::<Utc>::from_timestamp(now, 0).ok_or(Error::InvalidTimestamp)?;
    Ok(utc.with_timezone(&offset).naive_local())
}

/// Compute hour, minute and next hour labels for `now`.
///
/// The next hour is derived from the local time one hour later rather than by
/// adding one to the hour, so offsets and day boundaries come out right.
pub fn compute_clock_reading(
    now: Timestamp,
    offset: FixedOffset,
    use_24h: bool,
) -> Result<ClockReading, Error> {
    let format = HourFormat::from_24h_style(use_24h);

    let time = local_time(now, offset)?;
    let later = now
        .checked_add(SECONDS_PER_HOUR)
        .ok_or(Error::InvalidTimestamp)?;
    let next = local_time(later, offset)?;

    Ok(ClockReading {
        hour: Digits::new(format.hour(&time))?,
        minute: Digits::new(time.minute())?,
        next_hour: Digits::new(format.hour(&next))?,
        minute_of_hour: time.minute(),
    })
}

/// Width of the background fill for a minute of the hour.
///
/// Grows by [`FILL_STEP`] each minute and drops back to [`FILL_BASE_WIDTH`] on
/// the hour.
pub const fn fill_width(minute_of_hour: u32) -> u32 {
    minute_of_hour * FILL_STEP + FILL_BASE_WIDTH
}

/// Width of the background fill at `now`.
pub fn compute_fill_width(now: Timestamp, offset: FixedOffset) -> Result<u32, Error> {
    Ok(fill_width(local_time(now, offset)?.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(hour: u32, minute: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    #[test]
    fn digits_are_zero_padded() {
        assert_eq!(Digits::new(0).unwrap().as_str(), "00");
        assert_eq!(Digits::new(7).unwrap().as_str(), "07");
        assert_eq!(Digits::new(59).unwrap().as_str(), "59");
        assert_eq!(Digits::new(100), Err(Error::Format));
        assert_eq!(Digits::default(), Digits::PLACEHOLDER);
    }

    #[test]
    fn twenty_four_hour_labels() {
        for hour in 0..24 {
            let reading = compute_clock_reading(at(hour, 0), utc(), true).unwrap();
            let expected = std::format!("{:02}", hour);
            assert_eq!(reading.hour.as_str(), expected);
        }
    }

    #[test]
    fn twelve_hour_labels() {
        let expected = [
            "12", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "01",
            "02", "03", "04", "05", "06", "07", "08", "09", "10", "11",
        ];
        for (hour, label) in expected.iter().enumerate() {
            let reading = compute_clock_reading(at(hour as u32, 0), utc(), false).unwrap();
            assert_eq!(reading.hour.as_str(), *label, "hour {}", hour);
        }
    }

    #[test]
    fn minute_label_and_value() {
        let reading = compute_clock_reading(at(9, 5), utc(), true).unwrap();
        assert_eq!(reading.minute.as_str(), "05");
        assert_eq!(reading.minute_of_hour, 5);
    }

    #[test]
    fn next_hour_wraps_at_midnight() {
        let reading = compute_clock_reading(at(23, 30), utc(), true).unwrap();
        assert_eq!(reading.hour.as_str(), "23");
        assert_eq!(reading.next_hour.as_str(), "00");
    }

    #[test]
    fn next_hour_wraps_at_noon() {
        let reading = compute_clock_reading(at(11, 45), utc(), false).unwrap();
        assert_eq!(reading.hour.as_str(), "11");
        assert_eq!(reading.next_hour.as_str(), "12");

        let reading = compute_clock_reading(at(12, 10), utc(), false).unwrap();
        assert_eq!(reading.next_hour.as_str(), "01");
    }

    #[test]
    fn offset_moves_hour_and_minute() {
        let india = FixedOffset::east_opt(5 * 3_600 + 30 * 60).unwrap();
        let reading = compute_clock_reading(at(20, 45), india, true).unwrap();
        assert_eq!(reading.hour.as_str(), "02");
        assert_eq!(reading.minute.as_str(), "15");
        assert_eq!(reading.next_hour.as_str(), "03");
        assert_eq!(compute_fill_width(at(20, 45), india), Ok(fill_width(15)));
    }

    #[test]
    fn fill_width_range() {
        assert_eq!(fill_width(0), 12);
        assert_eq!(fill_width(59), 130);
        for minute in 0..60 {
            assert_eq!(compute_fill_width(at(14, minute), utc()), Ok(minute * 2 + 12));
        }
    }

    #[test]
    fn fill_width_resets_on_the_hour() {
        let before = compute_fill_width(at(14, 59), utc()).unwrap();
        let after = compute_fill_width(at(15, 0), utc()).unwrap();
        assert!(after < before);
        assert_eq!(after, FILL_BASE_WIDTH);
    }

    #[test]
    fn reading_is_repeatable() {
        let now = at(17, 42) + 13;
        assert_eq!(
            compute_clock_reading(now, utc(), false),
            compute_clock_reading(now, utc(), false)
        );
    }

    #[test]
    fn placeholder_reading() {
        let reading = ClockReading::default();
        assert_eq!(reading.hour.as_str(), "00");
        assert_eq!(reading.minute.as_str(), "00");
        assert_eq!(reading.next_hour.as_str(), "00");
    }

    #[test]
    fn out_of_range_timestamps_fail() {
        assert_eq!(
            compute_clock_reading(Timestamp::MAX, utc(), true),
            Err(Error::InvalidTimestamp)
        );
        assert_eq!(
            compute_fill_width(Timestamp::MIN, utc()),
            Err(Error::InvalidTimestamp)
        );
    }
}
