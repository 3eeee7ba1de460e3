// src/data/stats.rs

//! Round-statistics data: the [`RoundStats`] payload decoded from one
//! reassembled statistics block, and the per-player positional record.
//!
//! The server dumps one comma-separated value string per player, e.g.
//!
//! ```text
//! "player_0" : "208135644,2,10250,19,23,9,2649,57.89,0.83,83,4,11,131,2,0,0,4,3,5,0,0,4,47,84,5,0"
//! ```
//!
//! The column meaning comes from the block's own `"fields"` entry when
//! present, else from [`STATS_FIELDS_DEFAULT`]. A record with fewer values
//! than the field count is accepted; unmapped trailing fields keep their
//! zero value.

use std::collections::BTreeMap;

use ::serde::Serialize;

/// Entity identifier within a block's `"players"` sub-object,
/// e.g. `"player_0"`.
pub type PlayerId = String;

/// The default positional field order of a player record, matching what
/// current srcds builds emit in the `"fields"` entry.
pub const STATS_FIELDS_DEFAULT: [&str; 26] = [
    "accountid", "team", "money", "kills", "deaths", "assists", "dmg", "hsp", "kdr", "adr", "mvp",
    "ef", "ud", "3k", "4k", "5k", "clutchk", "firstk", "pistolk", "sniperk", "blindk", "bombk",
    "firedmg", "uniquek", "dinks", "chickenk",
];

/// One player's round statistics, decoded from the positional record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlayerRoundStats {
    pub account_id: i64,
    /// 1 = T, 2 = CT
    pub team: i32,
    pub money: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub damage: i32,
    pub headshot_pct: f64,
    pub kdr: f64,
    pub adr: i32,
    pub mvp: i32,
    pub enemies_flashed: i32,
    pub utility_damage: i32,
    pub triple_kills: i32,
    pub quad_kills: i32,
    pub ace_kills: i32,
    pub clutch_kills: i32,
    pub first_kills: i32,
    pub pistol_kills: i32,
    pub sniper_kills: i32,
    pub blind_kills: i32,
    pub bomb_kills: i32,
    pub fire_damage: i32,
    pub unique_kills: i32,
    pub dinks: i32,
    pub chicken_kills: i32,
}

/// One completed statistics block.
///
/// `raw_json` always holds the fully repaired block text verbatim, even
/// when the structured fields could not be decoded from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RoundStats {
    pub name: String,
    pub round_number: i32,
    pub score_t: i32,
    pub score_ct: i32,
    pub map: String,
    pub server: String,
    /// Field names governing the positional player records, in order.
    pub fields: Vec<String>,
    pub players: BTreeMap<PlayerId, PlayerRoundStats>,
    pub raw_json: String,
}

/// Decode one comma-separated positional record into a [`PlayerRoundStats`].
///
/// `fields` gives the column meaning by position. Values and field names are
/// whitespace-trimmed. Unknown field names are ignored. A non-numeric value,
/// like a missing one, leaves the zero value in place.
pub fn decode_player_record(
    record: &str,
    fields: &[String],
) -> PlayerRoundStats {
    let mut stats = PlayerRoundStats::default();
    for (field, value) in fields.iter().zip(record.split(',')) {
        let value: &str = value.trim();
        match field.trim() {
            "accountid" => stats.account_id = value.parse().unwrap_or(0),
            "team" => stats.team = value.parse().unwrap_or(0),
            "money" => stats.money = value.parse().unwrap_or(0),
            "kills" => stats.kills = value.parse().unwrap_or(0),
            "deaths" => stats.deaths = value.parse().unwrap_or(0),
            "assists" => stats.assists = value.parse().unwrap_or(0),
            "dmg" => stats.damage = value.parse().unwrap_or(0),
            "hsp" => stats.headshot_pct = value.parse().unwrap_or(0.0),
            "kdr" => stats.kdr = value.parse().unwrap_or(0.0),
            "adr" => stats.adr = value.parse().unwrap_or(0),
            "mvp" => stats.mvp = value.parse().unwrap_or(0),
            "ef" => stats.enemies_flashed = value.parse().unwrap_or(0),
            "ud" => stats.utility_damage = value.parse().unwrap_or(0),
            "3k" => stats.triple_kills = value.parse().unwrap_or(0),
            "4k" => stats.quad_kills = value.parse().unwrap_or(0),
            "5k" => stats.ace_kills = value.parse().unwrap_or(0),
            "clutchk" => stats.clutch_kills = value.parse().unwrap_or(0),
            "firstk" => stats.first_kills = value.parse().unwrap_or(0),
            "pistolk" => stats.pistol_kills = value.parse().unwrap_or(0),
            "sniperk" => stats.sniper_kills = value.parse().unwrap_or(0),
            "blindk" => stats.blind_kills = value.parse().unwrap_or(0),
            "bombk" => stats.bomb_kills = value.parse().unwrap_or(0),
            "firedmg" => stats.fire_damage = value.parse().unwrap_or(0),
            "uniquek" => stats.unique_kills = value.parse().unwrap_or(0),
            "dinks" => stats.dinks = value.parse().unwrap_or(0),
            "chickenk" => stats.chicken_kills = value.parse().unwrap_or(0),
            _ => {}
        }
    }

    stats
}

/// Split a `"fields"` entry value into trimmed field names.
pub fn split_fields(fields: &str) -> Vec<String> {
    fields
        .split(',')
        .map(|field| field.trim().to_string())
        .collect()
}
