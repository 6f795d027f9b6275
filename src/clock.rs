//! Calendar days in a fixed timezone
//!
//! "Today" is always the local date in one named timezone, so every device
//! agrees on when the daily word changes.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timezone the daily word follows unless configured otherwise
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Australia::Melbourne;

/// `YYYY-MM-DD` identifier of a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Today's key and its day count since the epoch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Today {
    pub day_key: DayKey,
    pub day_number: u64,
}

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Maps instants to calendar days in one timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
    epoch: NaiveDate,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Calendar {
    /// Day numbers count from this date
    pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
        Some(date) => date,
        None => panic!("invalid epoch"),
    };

    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self {
            tz,
            epoch: Self::EPOCH,
        }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// The local date of `now` in this calendar's timezone
    #[must_use]
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Key and day number for the day containing `now`
    ///
    /// Days before the epoch count as day 0.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use daily_wordle::clock::Calendar;
    ///
    /// // 14:00 UTC on 1 Jan is already 2 Jan in Melbourne
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();
    /// let today = Calendar::default().today(now);
    /// assert_eq!(today.day_key.as_str(), "2024-01-02");
    /// assert_eq!(today.day_number, 1);
    /// ```
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> Today {
        let date = self.local_date(now);
        let elapsed = date.signed_duration_since(self.epoch).num_days();

        Today {
            day_key: DayKey::from_date(date),
            day_number: u64::try_from(elapsed).unwrap_or(0),
        }
    }

    /// Shorthand for `today(clock.now())`
    pub fn today_from(&self, clock: &impl Clock) -> Today {
        self.today(clock.now())
    }
}
