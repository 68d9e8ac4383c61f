//! Minute-of-day time codec for `HH:MM` departure times.

use crate::errors::BenchError;
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A departure time as minutes since midnight, in `[0, 1439]`.
///
/// Values round-trip exactly through the textual codec: parsing a well-formed
/// `HH:MM` string and re-displaying it reproduces the input, and displaying
/// any constructed value and parsing it back reproduces the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightTime(u16);

impl FlightTime {
    /// Builds a time from raw minutes since midnight.
    ///
    /// # Errors
    /// Returns `MinutesOutOfRange` for values of 1440 or more.
    pub fn from_minutes(minutes: u16) -> Result<Self, BenchError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(BenchError::MinutesOutOfRange(u32::from(minutes)));
        }
        Ok(Self(minutes))
    }

    #[must_use]
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for FlightTime {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BenchError::InvalidTime(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(malformed());
        }
        let hour: u16 = hh.parse().map_err(|_| malformed())?;
        let minute: u16 = mm.parse().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_valid_minute() {
        for m in 0..MINUTES_PER_DAY {
            let t = FlightTime::from_minutes(m).unwrap();
            let text = t.to_string();
            assert_eq!(text.parse::<FlightTime>().unwrap(), t);
        }
    }

    #[test]
    fn encodes_zero_padded() {
        assert_eq!(FlightTime::from_minutes(0).unwrap().to_string(), "00:00");
        assert_eq!(FlightTime::from_minutes(495).unwrap().to_string(), "08:15");
        assert_eq!(FlightTime::from_minutes(1439).unwrap().to_string(), "23:59");
    }

    #[test]
    fn decodes_well_formed_text() {
        assert_eq!("00:00".parse::<FlightTime>().unwrap().minutes(), 0);
        assert_eq!("12:30".parse::<FlightTime>().unwrap().minutes(), 750);
        assert_eq!("23:59".parse::<FlightTime>().unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        assert!(FlightTime::from_minutes(1440).is_err());
        assert!(FlightTime::from_minutes(u16::MAX).is_err());
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in
            ["", "12", "1230", "12:3", "1:30", "24:00", "12:60", "ab:cd", "12:30 ", "-1:30", "+1:30"]
        {
            assert!(bad.parse::<FlightTime>().is_err(), "accepted {bad:?}");
        }
    }
}
