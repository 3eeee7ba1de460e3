// src/data/mod.rs

//! The `data` module is the specialized data containers for parsed log
//! content: [`DateTimeL`] timestamps, [`Event`]s, and [`RoundStats`].
//!
//! ## Definitions of data
//!
//! ### Event
//!
//! An "event" is one decoded, typed record derived from either one log
//! line or one completed multi-line statistics block. It is represented by
//! an [`Event`]: a timestamp header plus an [`EventData`] payload variant.
//!
//! ### Block
//!
//! A "block" is a run of consecutive same-timestamp lines delimited by a
//! begin marker and an end marker, carrying one embedded pseudo-JSON
//! statistics payload. A completed block decodes to a [`RoundStats`].
//!
//! Also see [_Overview of readers_].
//!
//! [_Overview of readers_]: crate::readers
//! [`DateTimeL`]: crate::data::datetime::DateTimeL
//! [`Event`]: crate::data::event::Event
//! [`EventData`]: crate::data::event::EventData
//! [`RoundStats`]: crate::data::stats::RoundStats

pub mod datetime;
pub mod event;
pub mod stats;
