// src/tests/accumulator_tests.rs

//! Tests for the [`accumulator`] state machine: block buffering, timestamp
//! consistency, interruption and incomplete-block reporting, and the
//! one-event-per-block guarantee.
//!
//! [`accumulator`]: crate::readers::accumulator

use crate::common::ParseError;
use crate::data::event::{Event, EventData, EventDataKind};
use crate::data::stats::RoundStats;
use crate::readers::accumulator::{parse_lines, LogProcessor};
use crate::tests::common::{block_dt, block_lines, ymdhms, BLOCK_TS};

/// The decoded statistics payload, or a panic.
fn stats_of(event: &Event) -> &RoundStats {
    match &event.data {
        EventData::RoundStats(stats) => stats,
        data => panic!("expected RoundStats, got {:?}", data),
    }
}

#[test]
fn test_single_line_dispatch() {
    let mut processor = LogProcessor::new();
    let event: Event = processor
        .process_line(r#"08/31/2025 - 16:30:18.000: World triggered "Round_Start""#)
        .unwrap()
        .unwrap();
    assert_eq!(event.kind(), EventDataKind::WorldRoundStart);
    assert_eq!(event.timestamp, block_dt());
    assert!(!processor.is_accumulating());
}

/// A well-formed block buffers silently and collapses into exactly one
/// event on its end marker.
#[test]
fn test_block_yields_one_event() {
    let mut processor = LogProcessor::new();
    let lines: Vec<String> = block_lines();
    let (last, interior) = lines.split_last().unwrap();
    for line in interior {
        assert_eq!(processor.process_line(line), Ok(None));
        assert!(processor.is_accumulating());
    }
    let event: Event = processor.process_line(last).unwrap().unwrap();
    assert!(!processor.is_accumulating());
    assert_eq!(event.timestamp, block_dt());

    let stats = stats_of(&event);
    assert_eq!(stats.name, "round_stats");
    assert_eq!(stats.round_number, 33);
    assert_eq!(stats.score_t, 16);
    assert_eq!(stats.score_ct, 15);
    assert_eq!(stats.map, "de_dust2");
    assert_eq!(stats.server, "Test Server");
    assert_eq!(stats.fields.len(), 26);
    assert_eq!(stats.players.len(), 2);
    let player_0 = &stats.players["player_0"];
    assert_eq!(player_0.account_id, 208135644);
    assert_eq!(player_0.kills, 19);
    assert_eq!(player_0.deaths, 23);
    let player_1 = &stats.players["player_1"];
    assert_eq!(player_1.kills, 23);
    assert_eq!(player_1.chicken_kills, 1);
}

#[test]
fn test_process_all_block() {
    let (events, errors) = parse_lines(block_lines());
    assert_eq!(events.len(), 1);
    assert!(errors.is_empty());
    assert_eq!(events[0].kind(), EventDataKind::RoundStats);
}

/// Blocks interleave with ordinary lines; relative order is preserved.
#[test]
fn test_mixed_stream() {
    let mut lines: Vec<String> = vec![format!(
        r#"{}: "s1mple<4><[U:1:36968273]><TERRORIST>" [-225 -1829 -168] killed "device<5><[U:1:36768971]><CT>" [-476 -1709 -110] with "awp" (headshot)"#,
        BLOCK_TS
    )];
    lines.extend(block_lines());
    lines.push(format!(
        r#"{}: "ragga<6><[U:1:109933575]><CT>" say "gg""#,
        BLOCK_TS
    ));

    let (events, errors) = parse_lines(lines);
    assert!(errors.is_empty());
    let kinds: Vec<EventDataKind> = events.iter().map(Event::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventDataKind::PlayerKill,
            EventDataKind::RoundStats,
            EventDataKind::PlayerSay,
        ]
    );
}

/// A minimal block: begin marker, one interior entry, end marker. The
/// entry decodes and the repaired text is preserved.
#[test]
fn test_minimal_block() {
    let lines: Vec<String> = vec![
        format!("{}: JSON_BEGIN{{", BLOCK_TS),
        format!("{}: \"map\" : \"de_inferno\",", BLOCK_TS),
        format!("{}: }}}}JSON_END", BLOCK_TS),
    ];
    let (events, errors) = parse_lines(lines);
    assert!(errors.is_empty());
    assert_eq!(events.len(), 1);
    let stats = stats_of(&events[0]);
    assert_eq!(stats.map, "de_inferno");
    assert!(stats.raw_json.contains("de_inferno"));
    assert!(stats.players.is_empty());
}

/// A block whose interior line bears a different timestamp is abandoned:
/// no event, one error, idle again. The orphaned end marker is swallowed.
#[test]
fn test_interrupted_block_timestamp() {
    let lines: Vec<String> = vec![
        format!("{}: JSON_BEGIN{{", BLOCK_TS),
        "08/31/2025 - 16:30:19.000: \"map\" : \"de_inferno\",".to_string(),
        format!("{}: }}}}JSON_END", BLOCK_TS),
    ];
    let mut processor = LogProcessor::new();
    let (events, errors) = processor.process_all(lines);
    assert!(events.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ParseError::InterruptedBlock { .. }));
    assert!(!processor.is_accumulating());
}

/// A malformed line inside a block invalidates the block, not the stream.
#[test]
fn test_interrupted_block_malformed_line() {
    let mut processor = LogProcessor::new();
    assert_eq!(
        processor.process_line(&format!("{}: JSON_BEGIN{{", BLOCK_TS)),
        Ok(None)
    );
    match processor.process_line("no timestamp at all") {
        Err(ParseError::InterruptedBlock { .. }) => {}
        result => panic!("expected ParseError::InterruptedBlock, got {:?}", result),
    }
    assert!(!processor.is_accumulating());

    // the processor keeps working on the next line
    let event: Event = processor
        .process_line(&format!("{}: Log file closed", BLOCK_TS))
        .unwrap()
        .unwrap();
    assert_eq!(event.kind(), EventDataKind::LogFileClosed);
}

/// End of input during a block surfaces as one explicit error and no
/// event for the unterminated block.
#[test]
fn test_incomplete_block_at_end_of_input() {
    let lines: Vec<String> = vec![
        format!("{}: JSON_BEGIN{{", BLOCK_TS),
        format!("{}: \"name\": \"round_stats\",", BLOCK_TS),
    ];
    let mut processor = LogProcessor::new();
    let (events, errors) = processor.process_all(lines);
    assert!(events.is_empty());
    assert_eq!(errors, vec![ParseError::IncompleteBlock]);
    assert!(!processor.is_accumulating());
}

/// An end marker with no open block is dropped, not misparsed.
#[test]
fn test_orphaned_end_marker() {
    let mut processor = LogProcessor::new();
    assert_eq!(
        processor.process_line(&format!("{}: }}}}JSON_END", BLOCK_TS)),
        Ok(None)
    );
    assert!(!processor.is_accumulating());
}

/// An empty block (both markers, nothing between) still yields exactly
/// one event, with zero-valued statistics.
#[test]
fn test_empty_block() {
    let lines: Vec<String> = vec![
        format!("{}: JSON_BEGIN{{", BLOCK_TS),
        format!("{}: }}}}JSON_END", BLOCK_TS),
    ];
    let (events, errors) = parse_lines(lines);
    assert!(errors.is_empty());
    assert_eq!(events.len(), 1);
    let stats = stats_of(&events[0]);
    assert_eq!(stats.name, "");
    assert!(stats.players.is_empty());
}

/// Two independent sessions over the same input decode identically.
#[test]
fn test_idempotent_reparse() {
    let (events_a, errors_a) = parse_lines(block_lines());
    let (events_b, errors_b) = parse_lines(block_lines());
    assert!(errors_a.is_empty());
    assert!(errors_b.is_empty());
    assert_eq!(events_a, events_b);
}

/// One processor handles any number of blocks in sequence.
#[test]
fn test_processor_reusable_across_blocks() {
    let mut lines: Vec<String> = block_lines();
    lines.extend(block_lines());
    let mut processor = LogProcessor::new();
    let (events, errors) = processor.process_all(lines);
    assert!(errors.is_empty());
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], events[1]);
}

/// Errors outside blocks are local to their line.
#[test]
fn test_errors_do_not_halt_stream() {
    let lines: Vec<String> = vec![
        "not a log line".to_string(),
        format!("{}: Log file closed", BLOCK_TS),
        "13/31/2025 - 16:30:18: Log file closed".to_string(),
        format!("{}: Match unpaused", BLOCK_TS),
    ];
    let (events, errors) = parse_lines(lines);
    assert_eq!(events.len(), 2);
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ParseError::Frame { .. }));
    assert!(matches!(errors[1], ParseError::TimestampParse { .. }));
}

#[test]
fn test_block_timestamp_is_block_start() {
    let lines: Vec<String> = vec![
        "08/29/2025 - 10:00:00.000: JSON_BEGIN{".to_string(),
        "08/29/2025 - 10:00:00.000: \"map\" : \"de_nuke\"".to_string(),
        "08/29/2025 - 10:00:00.000: }}JSON_END".to_string(),
    ];
    let (events, _errors) = parse_lines(lines);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].timestamp, ymdhms(2025, 8, 29, 10, 0, 0));
}
