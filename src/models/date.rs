use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::error::Error;
use std::fmt;

// A session date that could not be parsed into day/month/year integers.
// Carries the offending text so callers can point at the bad record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDateError {
    raw: String,
}

impl MalformedDateError {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for MalformedDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed session date: {}", self.raw)
    }
}

impl Error for MalformedDateError {}

/// Parses a session date into a calendar date.
///
/// Two textual forms are accepted: `DD/MM/YYYY` (day and month padded or
/// not) and `YYYY-MM-DD`. Anything else is a `MalformedDateError`,
/// including well-shaped strings with out-of-range components.
pub fn parse_date(raw: &str) -> Result<NaiveDate, MalformedDateError> {
    let trimmed = raw.trim();
    let (day, month, year) = if trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split('/').collect();
        let &[day, month, year] = parts.as_slice() else {
            return Err(MalformedDateError::new(raw));
        };
        (day, month, year)
    } else if trimmed.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').collect();
        let &[year, month, day] = parts.as_slice() else {
            return Err(MalformedDateError::new(raw));
        };
        (day, month, year)
    } else {
        return Err(MalformedDateError::new(raw));
    };

    let day: u32 = day.parse().map_err(|_| MalformedDateError::new(raw))?;
    let month: u32 = month.parse().map_err(|_| MalformedDateError::new(raw))?;
    let year: i32 = year.parse().map_err(|_| MalformedDateError::new(raw))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| MalformedDateError::new(raw))
}

/// Today's date in the given timezone.
pub fn current_date(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
