// src/data/datetime.rs

//! Timestamp grammar of a srcds log line and conversion of the raw
//! timestamp string into a [`DateTimeL`].
//!
//! A srcds timestamp looks like `08/31/2025 - 16:30:18` or, with the
//! sub-second variant some server builds emit, `08/31/2025 - 16:30:18.000`.
//! The regex pattern for the whole line prefix is composed from the `RP_*`
//! fragments below with [`concatcp!`].
//!
//! [`concatcp!`]: const_format::concatcp

use crate::common::ParseError;

use ::chrono::NaiveDateTime;
use ::const_format::concatcp;

/// Regular expression formatting pattern, passed to [`regex::Regex`].
pub type RegexPattern = str;

/// A parsed log line instant.
///
/// srcds logs carry no timezone indicator so this is a [`NaiveDateTime`];
/// interpreting it in some zone is the caller's concern.
pub type DateTimeL = NaiveDateTime;

/// Month, day, year; `08/31/2025`
pub const RP_DATE: &RegexPattern = r"\d{2}/\d{2}/\d{4}";
/// Hour, minute, second; `16:30:18`
pub const RP_TIME: &RegexPattern = r"\d{2}:\d{2}:\d{2}";
/// Optional milliseconds; `.000`
pub const RP_FRACTIONALq: &RegexPattern = r"(?:\.\d{3})?";

/// Capture group for the entire timestamp prefix.
pub const CGP_TIMESTAMP: &RegexPattern =
    concatcp!("(", RP_DATE, " - ", RP_TIME, RP_FRACTIONALq, ")");

/// The one fixed framing pattern for a whole log line:
/// `<timestamp>: <body>`. Some srcds builds prefix every line with `L `,
/// or put a blank before the colon; both are tolerated and discarded.
pub const LOG_LINE_PATTERN: &RegexPattern =
    concatcp!("^(?:L )?", CGP_TIMESTAMP, r" ?: (.*)$");

/// [`chrono` strftime] specifier matching [`CGP_TIMESTAMP`].
/// `%.f` accepts both the plain and the sub-second timestamp variants.
///
/// [`chrono` strftime]: https://docs.rs/chrono/latest/chrono/format/strftime/index.html
pub const DATETIME_PARSE_FORMAT: &str = "%m/%d/%Y - %H:%M:%S%.f";

/// Parse a raw timestamp string (no surrounding text) into a [`DateTimeL`].
pub fn datetime_parse(timestamp: &str) -> Result<DateTimeL, ParseError> {
    NaiveDateTime::parse_from_str(timestamp, DATETIME_PARSE_FORMAT).map_err(|source| {
        ParseError::TimestampParse {
            timestamp: timestamp.to_string(),
            source,
        }
    })
}
