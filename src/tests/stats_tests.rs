// src/tests/stats_tests.rs

//! Tests for [`stats`]: the positional player record decode.
//!
//! [`stats`]: crate::data::stats

use crate::data::stats::{
    decode_player_record,
    split_fields,
    PlayerRoundStats,
    STATS_FIELDS_DEFAULT,
};
use crate::tests::common::BLOCK_FIELDS;

use ::test_case::test_case;

fn default_fields() -> Vec<String> {
    STATS_FIELDS_DEFAULT
        .iter()
        .map(|field| field.to_string())
        .collect()
}

#[test]
fn test_default_field_order() {
    assert_eq!(STATS_FIELDS_DEFAULT.len(), 26);
    assert_eq!(STATS_FIELDS_DEFAULT[0], "accountid");
    assert_eq!(STATS_FIELDS_DEFAULT[3], "kills");
    assert_eq!(STATS_FIELDS_DEFAULT[25], "chickenk");
    // the canned block's own field list matches the default order
    assert_eq!(split_fields(BLOCK_FIELDS), default_fields());
}

#[test]
fn test_decode_full_record() {
    let record: &str =
        "208135644,2,10250,19,23,9,2649,57.89,0.83,83,4,11,131,2,0,0,4,3,5,0,0,4,47,84,5,0";
    let stats: PlayerRoundStats = decode_player_record(record, &default_fields());
    assert_eq!(stats.account_id, 208135644);
    assert_eq!(stats.team, 2);
    assert_eq!(stats.money, 10250);
    assert_eq!(stats.kills, 19);
    assert_eq!(stats.deaths, 23);
    assert_eq!(stats.assists, 9);
    assert_eq!(stats.damage, 2649);
    assert_eq!(stats.headshot_pct, 57.89);
    assert_eq!(stats.kdr, 0.83);
    assert_eq!(stats.adr, 83);
    assert_eq!(stats.mvp, 4);
    assert_eq!(stats.enemies_flashed, 11);
    assert_eq!(stats.utility_damage, 131);
    assert_eq!(stats.triple_kills, 2);
    assert_eq!(stats.quad_kills, 0);
    assert_eq!(stats.ace_kills, 0);
    assert_eq!(stats.clutch_kills, 4);
    assert_eq!(stats.first_kills, 3);
    assert_eq!(stats.pistol_kills, 5);
    assert_eq!(stats.sniper_kills, 0);
    assert_eq!(stats.blind_kills, 0);
    assert_eq!(stats.bomb_kills, 4);
    assert_eq!(stats.fire_damage, 47);
    assert_eq!(stats.unique_kills, 84);
    assert_eq!(stats.dinks, 5);
    assert_eq!(stats.chicken_kills, 0);
}

/// A record shorter than the field list leaves trailing fields at zero.
#[test]
fn test_decode_short_record() {
    let stats: PlayerRoundStats = decode_player_record("208135644,2,10250", &default_fields());
    assert_eq!(stats.account_id, 208135644);
    assert_eq!(stats.team, 2);
    assert_eq!(stats.money, 10250);
    assert_eq!(stats.kills, 0);
    assert_eq!(stats.chicken_kills, 0);
}

/// Field order comes from the list, not from any fixed layout.
#[test]
fn test_decode_custom_field_order() {
    let fields: Vec<String> = split_fields("kills,deaths,accountid");
    let stats: PlayerRoundStats = decode_player_record("7,3,208135644", &fields);
    assert_eq!(stats.kills, 7);
    assert_eq!(stats.deaths, 3);
    assert_eq!(stats.account_id, 208135644);
    assert_eq!(stats.money, 0);
}

/// Unrecognized field names are skipped without disturbing the others.
#[test]
fn test_decode_unknown_field_ignored() {
    let fields: Vec<String> = split_fields("kills,newstat,deaths");
    let stats: PlayerRoundStats = decode_player_record("7,9,3", &fields);
    assert_eq!(stats.kills, 7);
    assert_eq!(stats.deaths, 3);
}

/// A value that does not parse leaves the zero value in place.
#[test_case("abc,2", 0, 2; "non numeric first value")]
#[test_case(",2", 0, 2; "missing first value")]
fn test_decode_bad_value(
    record: &str,
    account_id: i64,
    team: i32,
) {
    let stats: PlayerRoundStats = decode_player_record(record, &default_fields());
    assert_eq!(stats.account_id, account_id);
    assert_eq!(stats.team, team);
}

#[test]
fn test_decode_empty_record() {
    let stats: PlayerRoundStats = decode_player_record("", &default_fields());
    assert_eq!(stats, PlayerRoundStats::default());
}

/// Values and field names are whitespace-trimmed before use.
#[test]
fn test_decode_trims_whitespace() {
    let fields: Vec<String> = split_fields(" kills , deaths ");
    assert_eq!(fields, vec!["kills", "deaths"]);
    let stats: PlayerRoundStats = decode_player_record(" 7 , 3 ", &fields);
    assert_eq!(stats.kills, 7);
    assert_eq!(stats.deaths, 3);
}
