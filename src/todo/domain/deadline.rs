//! Todo deadline value and its lenient text parser.

use super::ParseDeadlineError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Default rendering used by [`fmt::Display`].
pub const DEFAULT_DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Calendar date and time by which a todo should be done.
///
/// Deadlines carry no time zone; they are interpreted in the user's local
/// calendar. A date without a time means midnight at the start of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    /// Parses user input in any accepted date or date-time format.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDeadlineError`] when the trimmed input matches none of
    /// the accepted formats.
    pub fn parse(input: &str) -> Result<Self, ParseDeadlineError> {
        let trimmed = input.trim();
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                DATE_FORMATS.iter().find_map(|format| {
                    NaiveDate::parse_from_str(trimmed, format)
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
            })
            .map(Self)
            .ok_or_else(|| ParseDeadlineError(input.to_owned()))
    }

    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn value(self) -> NaiveDateTime {
        self.0
    }

    /// Renders the deadline with a `chrono` format string.
    #[must_use]
    pub fn format(self, format: &str) -> String {
        self.0.format(format).to_string()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEFAULT_DEADLINE_FORMAT))
    }
}
