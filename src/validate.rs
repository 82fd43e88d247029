//! Syntax and range checks for user-supplied request fields.

use jiff::Zoned;
use jiff::civil::Date;

use crate::error::{RateError, Result};

/// Inclusive validity window for requested dates.
///
/// An `end` of `None` closes the window at the current calendar date,
/// re-evaluated on every check.
#[derive(Debug, Clone)]
pub struct DateWindow {
    pub start: Date,
    pub end: Option<Date>,
}

impl DateWindow {
    pub fn through_today(start: Date) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: Date, end: Date) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    fn end_date(&self) -> Date {
        self.end.unwrap_or_else(|| Zoned::now().date())
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::through_today(jiff::civil::date(2025, 1, 1))
    }
}

/// Accept exactly three uppercase ASCII letters.
pub fn validate_currency(code: &str) -> Result<&str> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(RateError::InvalidInput(format!(
            "currency code '{code}' must be 3 uppercase letters, e.g. USD"
        )))
    }
}

/// Parse a strict `YYYY-MM-DD` date and check it against the window.
pub fn parse_date(text: &str, window: &DateWindow) -> Result<Date> {
    let date = Date::strptime("%Y-%m-%d", text)
        .map_err(|_| RateError::InvalidInput(format!("date '{text}' does not match YYYY-MM-DD")))?;
    let (start, end) = (window.start, window.end_date());
    if date < start || date > end {
        return Err(RateError::OutOfRange { date, start, end });
    }
    Ok(date)
}
