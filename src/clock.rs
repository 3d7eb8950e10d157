//! Clock abstraction
//!
//! The validator and the audit log ask a `ClockProvider` for the current
//! time so that tests can pin it. Audit timestamps are UTC instants; "today"
//! is the calendar date where the user is, which may differ from the UTC
//! date.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Source of the current time
pub trait ClockProvider: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that always reports the same instant and date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Fixed at `now`, with today taken as its UTC date
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// Fixed at midnight UTC on the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Same instant, but a different local date
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }
}

impl ClockProvider for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
