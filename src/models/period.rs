//! Accounting period representation
//!
//! An inclusive range of calendar days. The default period is the current
//! calendar month; anything invalid falls back to it upstream.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat};
use std::fmt;

/// An inclusive date range the budget is planned over
///
/// `start <= end` always holds; construction through `new` rejects
/// reversed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Create a period, or None if the range is reversed
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// The calendar month containing the given date
    pub fn month_of(date: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
        let next_month = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        };
        let end = next_month.unwrap() - Duration::days(1);
        Self { start, end }
    }

    /// The current calendar month, the default period
    pub fn current_month() -> Self {
        Self::month_of(chrono::Local::now().date_naive())
    }

    /// First day of the period (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Total length in days, counting both endpoints
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The persisted form: start-of-day and end-of-day UTC instants
    pub fn to_bounds(&self) -> [String; 2] {
        let start = self.start.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let end = self.end.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc();
        [
            start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end.to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
    }

    /// Rebuild a period from persisted bound strings
    ///
    /// Each bound may be an RFC 3339 instant or a plain `YYYY-MM-DD` date.
    /// Returns None for malformed bounds or a reversed range; callers
    /// substitute the default period.
    pub fn from_bounds(start: &str, end: &str) -> Option<Self> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        Self::new(start, end)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::current_month()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Parse one persisted bound, taking the calendar date of the instant
fn parse_bound(s: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Some(instant.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
