// src/readers/framer.rs

//! The Line Framer: split one raw log line into its timestamp prefix and
//! free-text body.
//!
//! Framing is a pure function over one fixed pattern,
//! [`LOG_LINE_PATTERN`]. The timestamp is *not* parsed here; see
//! [`datetime_parse`]. Single-line dispatch parses it immediately, while
//! the block accumulator defers parsing until it commits to a block start
//! but still needs the raw string for equality comparisons.
//!
//! [`LOG_LINE_PATTERN`]: crate::data::datetime::LOG_LINE_PATTERN
//! [`datetime_parse`]: crate::data::datetime::datetime_parse

use crate::common::ParseError;
use crate::data::datetime::LOG_LINE_PATTERN;

use ::lazy_static::lazy_static;
use ::regex::Regex;

/// One framed log line, borrowing from the raw input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FramedLine<'a> {
    /// The raw timestamp string, e.g. `"08/31/2025 - 16:30:18.000"`.
    pub timestamp: &'a str,
    /// Everything after the timestamp delimiter.
    pub body: &'a str,
}

lazy_static! {
    static ref LOG_LINE_REGEX: Regex = Regex::new(LOG_LINE_PATTERN).unwrap();
}

/// Split `line` into `(timestamp, body)`.
///
/// Returns [`ParseError::Frame`] when the line does not match the
/// timestamp/body grammar at all.
pub fn frame_line(line: &str) -> Result<FramedLine<'_>, ParseError> {
    let captures = match LOG_LINE_REGEX.captures(line) {
        Some(captures) => captures,
        None => {
            return Err(ParseError::Frame {
                line: line.to_string(),
            })
        }
    };
    // the framing pattern has exactly two capture groups; both always
    // participate in a match
    let timestamp: &str = captures.get(1).map_or("", |m| m.as_str());
    let body: &str = captures.get(2).map_or("", |m| m.as_str());

    Ok(FramedLine { timestamp, body })
}
