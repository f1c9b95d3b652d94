//! Month-year period representation
//!
//! A period is the calendar month a budget record covers. Its durable token
//! is `MM/YYYY`.

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month identified by year and month number
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Get the current month from the local clock
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::from_date(today)
    }

    /// Get the period containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - "01/2025" or "1/2025"
    /// - "2025-01"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let (year, month) = if let Some((month, year)) = s.split_once('/') {
            (year, month)
        } else if let Some((year, month)) = s.split_once('-') {
            (year, month)
        } else {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        };

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:02}/{:04}", self.month, self.year))
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Period::parse(&token).map_err(de::Error::custom)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: {} (expected MM/YYYY)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_slash_format() {
        assert_eq!(Period::parse("01/2025").unwrap(), period(2025, 1));
        assert_eq!(Period::parse("1/2025").unwrap(), period(2025, 1));
        assert_eq!(Period::parse(" 12/2024 ").unwrap(), period(2024, 12));
    }

    #[test]
    fn test_parse_iso_format() {
        assert_eq!(Period::parse("2025-03").unwrap(), period(2025, 3));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            Period::parse("13/2025"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert_eq!(
            Period::parse("00/2025"),
            Err(PeriodParseError::InvalidMonth(0))
        );
        assert!(Period::parse("January").is_err());
        assert!(Period::parse("01/25").is_err());
        assert!(Period::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(period(2025, 1).to_string(), "01/2025");
        assert_eq!(period(2024, 11).to_string(), "11/2024");
    }

    #[test]
    fn test_chronological_order() {
        let mut periods = vec![period(2025, 1), period(2024, 12), period(2024, 2)];
        periods.sort();
        assert_eq!(
            periods,
            vec![period(2024, 2), period(2024, 12), period(2025, 1)]
        );
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
        assert_eq!(Period::from_date(date), period(2025, 7));
    }

    #[test]
    fn test_serialization_uses_token() {
        let json = serde_json::to_string(&period(2025, 1)).unwrap();
        assert_eq!(json, "\"01/2025\"");

        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period(2025, 1));

        assert!(serde_json::from_str::<Period>("\"2025/01\"").is_err());
    }
}
