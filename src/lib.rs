// src/lib.rs

//! Library to parse Source dedicated server (CS2) log lines into typed,
//! structured events, including the multi-line round-statistics blocks
//! some server builds embed in the log stream.
//!
//! The typical entry points are [`parse_lines`] for a whole log,
//! [`LogProcessor`] for streaming one line at a time, and [`parse_line`]
//! for stateless single-line parsing with no block handling.
//!
//! See the [`readers`] module documentation for an overview of the
//! processing pipeline and the [`data`] module for the event model.

pub mod common;
pub mod data;
pub mod readers;
#[cfg(test)]
pub mod tests;

pub use crate::common::ParseError;
pub use crate::data::event::{to_json, Event, EventData, EventDataKind};
pub use crate::readers::accumulator::{parse_lines, LogProcessor};
pub use crate::readers::registry::parse_line;
