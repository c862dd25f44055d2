//! Date windows over the ISO text dates stored in `measurement`.
//!
//! Stored dates are compared as text in SQL, which is chronological only for
//! zero-padded `YYYY-MM-DD`. Everything here parses with chrono and formats
//! back to that exact shape before a bound reaches a query.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not a date in YYYY-MM-DD form")]
    Malformed(String),

    #[error("date window starting before {0} is outside the supported range")]
    OutOfRange(NaiveDate),
}

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT)
        .map_err(|_| DateError::Malformed(raw.to_string()))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Inclusive date range; an open `end` means "through the latest row".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parse user supplied bounds such as path segments.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, DateError> {
        let start = parse_iso_date(start)?;
        let end = end.map(parse_iso_date).transpose()?;
        Ok(Self { start, end })
    }

    /// `[end - 12 months, end]`.
    ///
    /// Matches SQLite's `date(end, '-12 months')`: same month and day one year
    /// earlier, and a day that does not exist in that month (Feb 29) rolls into
    /// the following month.
    pub fn trailing_year(end: NaiveDate) -> Result<Self, DateError> {
        let first_of_month = NaiveDate::from_ymd_opt(end.year() - 1, end.month(), 1)
            .ok_or(DateError::OutOfRange(end))?;
        let start = first_of_month
            .checked_add_days(chrono::Days::new(u64::from(end.day0())))
            .ok_or(DateError::OutOfRange(end))?;
        Ok(Self::between(start, end))
    }

    /// January 1st through December 31st of the year before `reference`.
    pub fn previous_calendar_year(reference: NaiveDate) -> Result<Self, DateError> {
        let year = reference.year() - 1;
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DateError::OutOfRange(reference))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(DateError::OutOfRange(reference))?;
        Ok(Self::between(start, end))
    }

    pub fn start_key(&self) -> String {
        format_iso_date(self.start)
    }

    pub fn end_key(&self) -> Option<String> {
        self.end.map(format_iso_date)
    }
}
