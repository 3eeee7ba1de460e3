// src/common.rs

//! Common imports, type aliases, and the crate-wide error type
//! (avoids circular imports).

use ::thiserror::Error;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// A count of anything
pub type Count = u64;

/// The raw timestamp prefix of a log line, exactly as it appeared in the
/// input, e.g. `"08/31/2025 - 16:30:18.000"`.
///
/// Kept as a `String` (not a parsed instant) where byte-equality comparisons
/// are needed; see [`LogProcessor`].
///
/// [`LogProcessor`]: crate::readers::accumulator::LogProcessor
pub type TimestampStr = String;

/// The free-text remainder of a log line after the timestamp prefix.
pub type Body = String;

/// Errors produced while processing one line or one statistics block.
///
/// There is no fatal error in this crate: every failure is local to one
/// line or one block, and processing resumes on the next line.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// The line does not match the `<timestamp>: <body>` grammar at all.
    #[error("line does not match the log line format: {line:?}")]
    Frame {
        line: String,
    },
    /// The framed timestamp string does not parse as a valid instant.
    #[error("timestamp {timestamp:?} does not parse: {source}")]
    TimestampParse {
        timestamp: String,
        #[source]
        source: ::chrono::ParseError,
    },
    /// A statistics block in progress received a line with a mismatched
    /// timestamp, or a malformed line, before the end marker was seen.
    /// The partial buffer was discarded.
    #[error("statistics block interrupted: {reason}")]
    InterruptedBlock {
        reason: String,
    },
    /// End of input was reached while a statistics block was still being
    /// accumulated. Unlike the other variants this has no triggering line.
    #[error("incomplete statistics block at end of input")]
    IncompleteBlock,
}
