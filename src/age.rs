//! age.rs
//!
//! Calendar-aware age decomposition in the format:
//!     "X years, Y months, Z days, H hours"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths
//!
//! Hours are taken modulo 24 from the hour-of-day fields only; a negative
//! hour difference never borrows a day.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// Elapsed calendar time, decomposed greedily from years down to hours.
///
/// For `birth <= reference`: `months` is in `0..=11` and `hours` is in
/// `0..=23`. `days` is `reference.day - birth.day` when that is not
/// negative. Otherwise a month is borrowed and `days` is below the length
/// of the month preceding the reference month, except when the birth day
/// was past that month's end and got clamped; then `days <= reference.day`.
/// Fields are signed because an inverted input pair is not rejected here
/// and may yield negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AgeDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
}

/// Decomposes the time between `birth` and `reference`.
///
/// Callers must ensure `birth <= reference`; see [`crate::profile`].
pub fn compute_age(birth: NaiveDateTime, reference: NaiveDateTime) -> AgeDuration {
    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;

    // Anniversary of the month not reached yet this year
    if months < 0 || (months == 0 && reference.day() < birth.day()) {
        years -= 1;
        months += 12;
    }

    let mut days = reference.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        // Determine the previous month relative to `reference`.
        let (prev_year, prev_month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };

        // A birth day past the end of the previous month (e.g. the 31st
        // against February) is clamped to that month's last day.
        let days_in_prev_month = days_in_month(prev_year, prev_month) as i32;
        let anchor = (birth.day() as i32).min(days_in_prev_month);
        days = reference.day() as i32 + days_in_prev_month - anchor;

        months -= 1;
        if months < 0 {
            months += 12;
            years -= 1;
        }
    }

    let hour_diff = reference.hour() as i32 - birth.hour() as i32;
    let hours = if hour_diff < 0 { hour_diff + 24 } else { hour_diff };

    AgeDuration {
        years,
        months,
        days,
        hours,
    }
}

impl fmt::Display for AgeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}, {} hour{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days),
            self.hours,
            plural(self.hours)
        )
    }
}

pub(crate) fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("valid test instant")
    }

    fn age(years: i32, months: i32, days: i32, hours: i32) -> AgeDuration {
        AgeDuration {
            years,
            months,
            days,
            hours,
        }
    }

    #[test]
    fn same_instant_is_zero() {
        let x = at(1990, 7, 4, 13);
        assert_eq!(compute_age(x, x), AgeDuration::default());
    }

    #[test]
    fn leap_day_to_leap_day() {
        assert_eq!(compute_age(at(1996, 2, 29, 0), at(2024, 2, 29, 0)), age(28, 0, 0, 0));
    }

    #[test]
    fn thirty_first_borrows_from_leap_february() {
        assert_eq!(compute_age(at(2000, 1, 31, 0), at(2000, 3, 1, 0)), age(0, 1, 1, 0));
    }

    #[test]
    fn thirty_first_borrows_from_common_february() {
        assert_eq!(compute_age(at(2001, 1, 31, 0), at(2001, 3, 1, 0)), age(0, 1, 1, 0));
    }

    #[test]
    fn clamped_borrow_can_exceed_short_month() {
        // February 2001 has 28 days; the 31st is clamped to the 28th
        assert_eq!(compute_age(at(2001, 1, 31, 0), at(2001, 3, 30, 0)), age(0, 1, 30, 0));
        assert_eq!(compute_age(at(2001, 1, 31, 0), at(2001, 2, 28, 0)), age(0, 0, 28, 0));
    }

    #[test]
    fn borrow_uses_previous_month_length() {
        // April has 30 days
        assert_eq!(compute_age(at(2020, 4, 20, 0), at(2020, 5, 10, 0)), age(0, 0, 20, 0));
        // January, walked back from February
        assert_eq!(compute_age(at(2019, 12, 25, 0), at(2020, 2, 3, 0)), age(0, 1, 9, 0));
    }

    #[test]
    fn month_anniversary_not_reached_borrows_year() {
        assert_eq!(compute_age(at(2000, 6, 15, 0), at(2024, 6, 14, 0)), age(23, 11, 30, 0));
        assert_eq!(compute_age(at(2000, 6, 15, 0), at(2024, 3, 20, 0)), age(23, 9, 5, 0));
    }

    #[test]
    fn borrow_across_january() {
        assert_eq!(compute_age(at(1999, 12, 20, 0), at(2000, 1, 5, 0)), age(0, 0, 16, 0));
    }

    #[test]
    fn hours_wrap_without_day_borrow() {
        assert_eq!(compute_age(at(2000, 6, 15, 22), at(2024, 6, 15, 3)), age(24, 0, 0, 5));
        assert_eq!(compute_age(at(2000, 6, 15, 3), at(2024, 6, 15, 22)), age(24, 0, 0, 19));
    }

    #[test]
    fn fields_stay_in_range_over_a_span() {
        let birth = at(1988, 8, 31, 17);
        let mut reference = birth;
        for _ in 0..2_000 {
            reference += chrono::Duration::hours(29);
            let a = compute_age(birth, reference);
            assert!(a.years >= 0, "{reference}: {a:?}");
            assert!((0..=11).contains(&a.months), "{reference}: {a:?}");
            assert!((0..=23).contains(&a.hours), "{reference}: {a:?}");
            assert!(a.days >= 0, "{reference}: {a:?}");

            let (prev_year, prev_month) = if reference.month() == 1 {
                (reference.year() - 1, 12)
            } else {
                (reference.year(), reference.month() - 1)
            };
            let prev_len = days_in_month(prev_year, prev_month) as i32;
            if reference.day() >= birth.day() {
                assert_eq!(a.days, (reference.day() - birth.day()) as i32, "{reference}");
            } else if birth.day() as i32 > prev_len {
                assert!(a.days <= reference.day() as i32, "{reference}: {a:?}");
            } else {
                assert!(a.days < prev_len, "{reference}: {a:?}");
            }
        }
    }

    #[test]
    fn display_pluralizes() {
        assert_eq!(age(1, 2, 1, 0).to_string(), "1 year, 2 months, 1 day, 0 hours");
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2023, 11), 30);
    }
}
