//! Next-birthday projection.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;
const DAYS_PER_CYCLE: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthdayProjection {
    /// Midnight of the upcoming anniversary.
    pub date: NaiveDateTime,
    pub days_until: u32,
    pub next_age: i32,
}

impl BirthdayProjection {
    /// Share of the 365-day birthday cycle already behind, in `0.0..=100.0`.
    pub fn progress_percent(&self) -> f64 {
        ((DAYS_PER_CYCLE - f64::from(self.days_until)) / DAYS_PER_CYCLE * 100.0).clamp(0.0, 100.0)
    }
}

/// Projects the next occurrence of `birth`'s month and day on or after
/// `reference`.
///
/// The anniversary counts as upcoming only while `reference` has not passed
/// its midnight. A Feb 29 birthday lands on Mar 1 in common years.
pub fn next_birthday(birth: NaiveDateTime, reference: NaiveDateTime) -> BirthdayProjection {
    let mut candidate = anniversary(reference.year(), birth.month(), birth.day());
    if candidate < reference {
        candidate = anniversary(reference.year() + 1, birth.month(), birth.day());
    }

    let elapsed_ms = (candidate - reference).num_milliseconds();
    let days_until = u64::try_from(elapsed_ms).unwrap_or(0).div_ceil(MS_PER_DAY);

    BirthdayProjection {
        date: candidate,
        days_until: u32::try_from(days_until).unwrap_or(u32::MAX),
        next_age: candidate.year() - birth.year(),
    }
}

/// Midnight of (year, month, day), letting an out-of-range day run on into
/// the following month.
fn anniversary(year: i32, month: u32, day: u32) -> NaiveDateTime {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    let date = first
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
        .unwrap_or(first);
    date.and_time(NaiveTime::MIN)
}
