//! Sources of the current date, used by the footer's copyright notice.
use chrono::{Datelike, Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local date every time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date. Mostly useful in tests and for reproducible builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// A clock stuck on the first of January of `year`.
    ///
    /// Years outside the range chrono can represent are clamped to the nearest representable one.
    pub fn in_year(year: i32) -> Self {
        let year = year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
        Self(NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
