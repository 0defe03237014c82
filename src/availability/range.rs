//! Query date ranges and the booking overlap rule

use crate::date::{format_compact_date, parse_compact_date};
use crate::error::{AvailError, AvailResult};
use chrono::NaiveDate;
use std::fmt;

/// Inclusive query range; a single date has `start == end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse `YYYYMMDD` or `YYYYMMDD-YYYYMMDD`
    pub fn parse(s: &str) -> AvailResult<Self> {
        let mut parts = s.split('-');
        let start_token = parts.next().unwrap_or_default();
        let end_token = parts.next();

        if parts.next().is_some() {
            return Err(AvailError::InvalidDateFormat(s.to_string()));
        }

        let start = parse_compact_date(start_token)?;
        let end = match end_token {
            Some(token) => parse_compact_date(token)?,
            None => start,
        };

        if start > end {
            return Err(AvailError::InvalidDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// Whether a stay from `arrival` to `departure` takes a room in this range.
    ///
    /// Checkout on the range start and checkin on the range end leave the
    /// room free.
    pub fn is_occupied_by(&self, arrival: NaiveDate, departure: NaiveDate) -> bool {
        !(departure <= self.start || arrival >= self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", format_compact_date(self.start))
        } else {
            write!(
                f,
                "{}-{}",
                format_compact_date(self.start),
                format_compact_date(self.end)
            )
        }
    }
}
