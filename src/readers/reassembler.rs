// src/readers/reassembler.rs

//! The Block Reassembler: repair a completed block's fragment sequence
//! into syntactically valid JSON and decode it into a statistics event.
//!
//! The server emits the statistics object line-by-line and is sloppy about
//! it: trailing separators are sometimes present and sometimes not, the
//! end marker absorbs one closing delimiter of the nested `"players"`
//! scope, and blank fragments occur. [`repair_fragments`] is the isolated,
//! unit-testable normalization over that fragment sequence;
//! [`reassemble_block`] runs the full repair-then-decode pipeline.
//!
//! Decoding is deliberately lenient: a block whose repaired text still
//! fails to decode becomes a valid-but-empty [`RoundStats`] event carrying
//! the repaired raw text verbatim. The accumulator has already committed
//! to emitting exactly one event for the block.
//!
//! [`RoundStats`]: crate::data::stats::RoundStats

use crate::common::Body;
use crate::data::datetime::DateTimeL;
use crate::data::event::{Event, EventData};
use crate::data::stats::{
    decode_player_record,
    split_fields,
    PlayerRoundStats,
    RoundStats,
    STATS_FIELDS_DEFAULT,
};
use crate::readers::accumulator::{BLOCK_BEGIN_MARKER, BLOCK_END_MARKER};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::serde_json::Value;

/// Net brace depth change of one fragment, ignoring braces inside JSON
/// string literals.
fn brace_delta(fragment: &str) -> i32 {
    let mut delta: i32 = 0;
    let mut in_string: bool = false;
    let mut escaped: bool = false;
    for c in fragment.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }

    delta
}

/// Re-synthesize a syntactically valid JSON object from a block's raw
/// fragment sequence (markers still included in the first and last
/// fragment).
///
/// * The begin marker is stripped from the first fragment; the end marker
///   from the last, preserving the one closing `}` it had absorbed.
/// * Blank fragments are skipped.
/// * A `,` separator is inserted between consecutive fragments unless the
///   current fragment already ends a scope or separator, or the next
///   fragment closes a scope.
/// * A separator left dangling before the final close is dropped, as is a
///   closing `}` with no open nested scope to match it (the empty-block
///   and no-players shapes).
pub fn repair_fragments(fragments: &[Body]) -> String {
    defn!("fragments.len() {}", fragments.len());
    let last_index: usize = fragments.len().saturating_sub(1);
    let mut stripped: Vec<&str> = Vec::with_capacity(fragments.len());
    for (index, fragment) in fragments.iter().enumerate() {
        let mut fragment: &str = fragment.as_str();
        if index == 0 {
            fragment = fragment
                .strip_prefix(BLOCK_BEGIN_MARKER)
                .unwrap_or(fragment);
        }
        if index == last_index {
            if let Some(kept) = fragment.strip_suffix(BLOCK_END_MARKER) {
                // the end marker absorbed one closing delimiter; keep it
                fragment = &fragment[..kept.len() + 1];
            }
        }
        let fragment: &str = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        stripped.push(fragment);
    }

    // drop a closer that would unbalance the object, e.g. the `}` retained
    // from the end marker of a block that never opened a nested scope
    let mut depth: i32 = 1;
    let mut kept: Vec<&str> = Vec::with_capacity(stripped.len());
    for fragment in stripped {
        let delta: i32 = brace_delta(fragment);
        if depth + delta < 1 {
            defo!("dropping over-closing fragment {:?}", fragment);
            continue;
        }
        depth += delta;
        kept.push(fragment);
    }

    let mut repaired: String = String::with_capacity(64 * (kept.len() + 2));
    repaired.push('{');
    let count: usize = kept.len();
    for (index, fragment) in kept.iter().enumerate() {
        repaired.push_str("\n  ");
        if index + 1 == count {
            // no separator may dangle before the closing brace
            repaired.push_str(fragment.trim_end_matches(','));
            continue;
        }
        repaired.push_str(fragment);
        let next: &str = kept[index + 1];
        if !fragment.ends_with(',') && !fragment.ends_with('{') && !next.starts_with('}') {
            repaired.push(',');
        }
    }
    // close scopes the fragments left open, innermost first
    while depth > 0 {
        repaired.push_str("\n}");
        depth -= 1;
    }
    defx!("repaired.len() {}", repaired.len());

    repaired
}

/// Decode repaired block text into a [`RoundStats`], leniently.
///
/// Known top-level keys are projected into named fields; unknown keys are
/// ignored. The `"players"` sub-object decodes through
/// [`decode_player_record`] using the block's own `"fields"` list, else
/// [`STATS_FIELDS_DEFAULT`]. Any decode failure leaves the affected
/// fields at their zero values.
fn decode_stats(raw_json: &str) -> RoundStats {
    let mut stats = RoundStats {
        raw_json: raw_json.to_string(),
        ..RoundStats::default()
    };
    let value: Value = match serde_json::from_str(raw_json) {
        Ok(value) => value,
        Err(_err) => {
            defñ!("undecodable block text: {}", _err);
            return stats;
        }
    };
    let object = match value.as_object() {
        Some(object) => object,
        None => return stats,
    };

    // every scalar in the dump is a JSON string, numbers included
    if let Some(name) = object.get("name").and_then(Value::as_str) {
        stats.name = name.to_string();
    }
    if let Some(round_number) = object.get("round_number").and_then(Value::as_str) {
        stats.round_number = round_number.parse().unwrap_or(0);
    }
    if let Some(score_t) = object.get("score_t").and_then(Value::as_str) {
        stats.score_t = score_t.parse().unwrap_or(0);
    }
    if let Some(score_ct) = object.get("score_ct").and_then(Value::as_str) {
        stats.score_ct = score_ct.parse().unwrap_or(0);
    }
    if let Some(map) = object.get("map").and_then(Value::as_str) {
        stats.map = map.to_string();
    }
    if let Some(server) = object.get("server").and_then(Value::as_str) {
        stats.server = server.to_string();
    }
    if let Some(fields) = object.get("fields").and_then(Value::as_str) {
        stats.fields = split_fields(fields);
    }

    let field_names: Vec<String> = if stats.fields.is_empty() {
        STATS_FIELDS_DEFAULT
            .iter()
            .map(|field| field.to_string())
            .collect()
    } else {
        stats.fields.clone()
    };
    if let Some(players) = object.get("players").and_then(Value::as_object) {
        for (player_id, record) in players {
            let record: &str = match record.as_str() {
                Some(record) => record,
                None => continue,
            };
            let player_stats: PlayerRoundStats = decode_player_record(record, &field_names);
            stats
                .players
                .insert(player_id.to_string(), player_stats);
        }
    }

    stats
}

/// Repair and decode one completed block into its statistics event.
///
/// Never fails: the worst malformed block yields an event with default
/// structured fields and the repaired raw text attached.
pub fn reassemble_block(
    timestamp: DateTimeL,
    fragments: &[Body],
) -> Event {
    defn!("fragments.len() {}", fragments.len());
    let raw_json: String = repair_fragments(fragments);
    let stats: RoundStats = decode_stats(&raw_json);
    defx!("players.len() {}", stats.players.len());

    Event::new(timestamp, EventData::RoundStats(stats))
}
