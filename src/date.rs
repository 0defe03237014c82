//! Compact `YYYYMMDD` date handling shared by booking files and queries

use crate::error::{AvailError, AvailResult};
use chrono::NaiveDate;

/// chrono format for the compact date representation
pub const COMPACT_FORMAT: &str = "%Y%m%d";

/// Parse an exact eight-digit `YYYYMMDD` calendar date.
///
/// Rejects separators, signs, short tokens and impossible dates such as
/// `20240230`.
pub fn parse_compact_date(token: &str) -> AvailResult<NaiveDate> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AvailError::InvalidDateFormat(token.to_string()));
    }

    NaiveDate::parse_from_str(token, COMPACT_FORMAT)
        .map_err(|_| AvailError::InvalidDateFormat(token.to_string()))
}

/// Render a date back into `YYYYMMDD`
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format(COMPACT_FORMAT).to_string()
}

/// serde adapter for `YYYYMMDD` string fields
pub mod compact {
    use super::parse_compact_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_compact_date(&raw).map_err(serde::de::Error::custom)
    }
}
