// src/readers/accumulator.rs

//! The Block Accumulator: a small state machine sitting in front of the
//! single-line dispatcher.
//!
//! Server logs interleave an atomic statistics dump (a pseudo-JSON object
//! spread across many physical lines, all stamped with the same timestamp)
//! with otherwise independent single-line events. A [`LogProcessor`]
//! detects the block markers, buffers the block's lines under strict
//! timestamp-consistency checks, and on completion hands the buffer to the
//! [reassembler] instead of the dispatcher. Each block collapses into
//! exactly one event; a truncated or corrupted block surfaces as one
//! explicit error, never as a sequence of garbage events.
//!
//! One `LogProcessor` processes one ordered line sequence. Independent
//! streams each own their own instance; no state is shared.
//!
//! [reassembler]: crate::readers::reassembler

use crate::common::{Body, ParseError, TimestampStr};
use crate::data::datetime::{
    datetime_parse,
    DateTimeL,
};
use crate::data::event::Event;
use crate::readers::framer::{frame_line, FramedLine};
use crate::readers::registry::dispatch;
use crate::readers::reassembler::reassemble_block;

use ::more_asserts::debug_assert_gt;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Literal begin-of-block token; matched verbatim at the start of a body.
pub const BLOCK_BEGIN_MARKER: &str = "JSON_BEGIN{";
/// Literal end-of-block token; matched verbatim at the end of a body.
pub const BLOCK_END_MARKER: &str = "}}JSON_END";

/// Accumulator mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockState {
    /// Not inside a statistics block; lines forward to the dispatcher.
    Idle,
    /// Buffering lines of an open statistics block.
    Accumulating,
}

/// Stateful per-session parser: the Block Accumulator wired in front of
/// the single-line dispatcher.
///
/// Created once per parse session. Feed lines one at a time into
/// [`process_line`], or a whole sequence into [`process_all`].
///
/// [`process_line`]: LogProcessor::process_line
/// [`process_all`]: LogProcessor::process_all
pub struct LogProcessor {
    state: BlockState,
    /// Buffered block bodies, begin marker still on the first entry.
    buffer: Vec<Body>,
    /// Parsed instant of the block's first line.
    block_start: Option<DateTimeL>,
    /// Raw timestamp string of the block's first line, compared
    /// byte-for-byte against every subsequent line of the block.
    last_timestamp: TimestampStr,
}

impl Default for LogProcessor {
    fn default() -> LogProcessor {
        LogProcessor::new()
    }
}

impl LogProcessor {
    /// Likely lines in one statistics block: markers, six metadata
    /// entries, `"players"`, ten player records, closer.
    const BLOCK_LINES_WITH_CAPACITY: usize = 20;

    pub fn new() -> LogProcessor {
        LogProcessor {
            state: BlockState::Idle,
            buffer: Vec::with_capacity(LogProcessor::BLOCK_LINES_WITH_CAPACITY),
            block_start: None,
            last_timestamp: TimestampStr::default(),
        }
    }

    /// Is a statistics block currently being accumulated?
    ///
    /// Callers draining a stream manually check this after the last line
    /// to surface the incomplete-block condition; [`process_all`] does it
    /// for them.
    ///
    /// [`process_all`]: LogProcessor::process_all
    pub fn is_accumulating(&self) -> bool {
        self.state == BlockState::Accumulating
    }

    /// Discard any in-progress block and return to `Idle`.
    ///
    /// Every reset path (success, interruption, framing failure) releases
    /// the buffer; nothing is leaked across blocks.
    fn reset(&mut self) {
        defñ!("buffer.len() {}", self.buffer.len());
        self.state = BlockState::Idle;
        self.buffer.clear();
        self.block_start = None;
        self.last_timestamp.clear();
    }

    /// Process one line. Returns exactly one of: no event (still
    /// buffering), one completed event, or one error.
    ///
    /// Errors are local to this line (or to the block it interrupts);
    /// the processor is ready for the next line afterward.
    pub fn process_line(
        &mut self,
        line: &str,
    ) -> Result<Option<Event>, ParseError> {
        defn!("({:?})", line);
        let framed: FramedLine = match frame_line(line) {
            Ok(framed) => framed,
            Err(err) => {
                if self.state == BlockState::Accumulating {
                    // a malformed line invalidates the whole block
                    self.reset();
                    defx!("malformed line during block");
                    return Err(ParseError::InterruptedBlock {
                        reason: format!("malformed line during statistics block: {:?}", line),
                    });
                }
                defx!("frame error");
                return Err(err);
            }
        };

        match self.state {
            BlockState::Idle => {
                if framed.body.starts_with(BLOCK_BEGIN_MARKER) {
                    // commit to a block; only now is the timestamp parsed
                    let block_start: DateTimeL = datetime_parse(framed.timestamp)?;
                    self.state = BlockState::Accumulating;
                    self.block_start = Some(block_start);
                    self.last_timestamp = framed.timestamp.to_string();
                    self.buffer.push(framed.body.to_string());
                    defx!("block started at {:?}", framed.timestamp);

                    return Ok(None);
                }
                if framed.body.ends_with(BLOCK_END_MARKER) {
                    // an orphaned end marker; its block was already
                    // abandoned and reported
                    defx!("orphaned end marker");
                    return Ok(None);
                }
                // not a block; one line, one event
                let timestamp: DateTimeL = datetime_parse(framed.timestamp)?;
                defx!("single-line dispatch");

                Ok(Some(dispatch(timestamp, framed.body)))
            }
            BlockState::Accumulating => {
                if framed.timestamp != self.last_timestamp {
                    // a block must complete within a single timestamp window
                    self.reset();
                    defx!("timestamp mismatch");
                    return Err(ParseError::InterruptedBlock {
                        reason: format!(
                            "statistics block interrupted by different timestamp {:?}",
                            framed.timestamp
                        ),
                    });
                }
                self.buffer.push(framed.body.to_string());
                if framed.body.ends_with(BLOCK_END_MARKER) {
                    debug_assert_gt!(self.buffer.len(), 1);
                    // the timestamp was parsed when the block was started
                    let timestamp: DateTimeL = self
                        .block_start
                        .unwrap_or_default();
                    let event: Event = reassemble_block(timestamp, &self.buffer);
                    self.reset();
                    defx!("block completed");

                    return Ok(Some(event));
                }
                defo!("buffering; buffer.len() {}", self.buffer.len());
                defx!();

                Ok(None)
            }
        }
    }

    /// Process an entire line sequence, collecting all emitted events and
    /// all errors.
    ///
    /// Per-line errors never halt the sequence. If the stream ends while a
    /// block is still open, one [`ParseError::IncompleteBlock`] is
    /// appended and the unterminated block produces no event.
    pub fn process_all<I, S>(
        &mut self,
        lines: I,
    ) -> (Vec<Event>, Vec<ParseError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        defn!();
        let mut events: Vec<Event> = Vec::new();
        let mut errors: Vec<ParseError> = Vec::new();
        for line in lines {
            match self.process_line(line.as_ref()) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }
        if self.is_accumulating() {
            errors.push(ParseError::IncompleteBlock);
            self.reset();
        }
        defx!("events.len() {}, errors.len() {}", events.len(), errors.len());

        (events, errors)
    }
}

/// Parse a whole line sequence in one fresh session.
///
/// Convenience wrapper over [`LogProcessor::process_all`].
pub fn parse_lines<I, S>(lines: I) -> (Vec<Event>, Vec<ParseError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LogProcessor::new().process_all(lines)
}
