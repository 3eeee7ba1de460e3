// src/readers/mod.rs

//! "Readers" for _srcdslog_.
//!
//! ## Overview of readers
//!
//! * A [`LogProcessor`] drives the whole per-line pipeline and owns the
//!   block accumulator state machine.
//! * The [`framer`] splits one raw line into `(timestamp, body)`.
//! * The [`registry`] holds the ordered dispatch table and classifies one
//!   body into one [`Event`].
//! * The [`reassembler`] repairs a completed block's fragments into valid
//!   JSON and decodes the statistics event.
//!
//! Control flow: the caller feeds lines one at a time into the
//! `LogProcessor`; it either forwards immediately to the single-line
//! dispatcher (zero or one event per line) or buffers and, on block
//! completion, produces exactly one event for the whole block.
//!
//! Also see [_Definitions of data_].
//!
//! [_Definitions of data_]: crate::data
//! [`framer`]: crate::readers::framer
//! [`registry`]: crate::readers::registry
//! [`reassembler`]: crate::readers::reassembler
//! [`Event`]: crate::data::event::Event
//! [`LogProcessor`]: crate::readers::accumulator::LogProcessor

pub mod accumulator;
pub mod framer;
pub mod reassembler;
pub mod registry;
