//! Time source abstraction.
//!
//! Anything that stamps "now" into its output takes a [`Clock`]:
//! - **Production**: [`SystemClock`] reads wall-clock time
//! - **Testing**: [`FixedClock`] returns one pinned instant
//!
//! A fixed clock handed to a call only affects that call; there is no
//! process-wide time override to install or restore.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{KataError, KataResult};

/// Calendar-date format used for human-readable stamps, e.g. `Thu May 30 2024`.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Midnight UTC on the given day, or `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Self::new(dt.and_utc()))
    }

    /// Parse a `YYYY-MM-DD` date into a clock pinned at midnight UTC.
    pub fn parse_date(s: &str) -> KataResult<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| KataError::invalid_date(format!("{s}: {e}")))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| KataError::invalid_date(s))?;
        Ok(Self::new(midnight.and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Render an instant as a calendar date (see [`DATE_FORMAT`]).
pub fn date_string(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}
