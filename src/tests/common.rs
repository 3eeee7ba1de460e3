// src/tests/common.rs

//! Helpers shared by the test modules.

use crate::data::datetime::DateTimeL;

use ::chrono::NaiveDate;

/// Build a [`DateTimeL`] from parts; panics on invalid parts (tests only).
pub fn ymdhms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTimeL {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// The timestamp shared by every line of the canned statistics block.
pub const BLOCK_TS: &str = "08/31/2025 - 16:30:18.000";

/// Parsed form of [`BLOCK_TS`].
pub fn block_dt() -> DateTimeL {
    ymdhms(2025, 8, 31, 16, 30, 18)
}

/// The positional field list current srcds builds put in the `"fields"`
/// entry.
pub const BLOCK_FIELDS: &str = "accountid,team,money,kills,deaths,assists,dmg,hsp,kdr,adr,mvp,ef,ud,3k,4k,5k,clutchk,firstk,pistolk,sniperk,blindk,bombk,firedmg,uniquek,dinks,chickenk";

/// A complete, well-formed statistics block as it appears in real logs.
pub fn block_lines() -> Vec<String> {
    vec![
        format!("{}: JSON_BEGIN{{", BLOCK_TS),
        format!("{}: \"name\": \"round_stats\",", BLOCK_TS),
        format!("{}: \"round_number\" : \"33\",", BLOCK_TS),
        format!("{}: \"score_t\" : \"16\",", BLOCK_TS),
        format!("{}: \"score_ct\" : \"15\",", BLOCK_TS),
        format!("{}: \"map\" : \"de_dust2\",", BLOCK_TS),
        format!("{}: \"server\" : \"Test Server\",", BLOCK_TS),
        format!("{}: \"fields\" : \"{}\"", BLOCK_TS, BLOCK_FIELDS),
        format!("{}: \"players\" : {{", BLOCK_TS),
        format!(
            "{}: \"player_0\" : \"208135644,2,10250,19,23,9,2649,57.89,0.83,83,4,11,131,2,0,0,4,3,5,0,0,4,47,84,5,0\"",
            BLOCK_TS
        ),
        format!(
            "{}: \"player_1\" : \"1014228401,2,10050,23,26,4,2537,65.22,0.88,79,2,8,7,0,0,0,0,3,1,0,0,5,0,7,4,1\"",
            BLOCK_TS
        ),
        format!("{}: }}}}JSON_END", BLOCK_TS),
    ]
}
