//! Local wall-clock instants.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date `{input}`; expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DDTHH:MM:SS")]
pub struct ParseInstantError {
    pub input: String,
}

/// Current local date and time, without zone.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses a date or date-time; a bare date means midnight.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime, ParseInstantError> {
    let trimmed = input.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ParseInstantError {
            input: input.to_string(),
        })
}
