// src/readers/registry.rs

//! The Pattern Registry and the Single-Line Dispatcher.
//!
//! The registry is an **ordered** list of `(regex, constructor)` entries,
//! compiled once into [`struct@PATTERN_REGISTRY`] and shared read-only by
//! every parse session. [`dispatch`] tries the entries in registration
//! order and the first regex that accepts the body wins; nothing is
//! scanned past the first acceptance.
//!
//! Ordering is a correctness property, not an optimization. Several bodies
//! are special cases of more general bodies (a chat command is a special
//! case of a chat message, `Planted_The_Bomb` is a special case of a
//! generic `triggered` body) and the more specific entry must be
//! registered first. The generic [`TriggeredEvent`] entry is always the
//! last entry tried; after it comes only the [`Unknown`] fallback, which
//! accepts everything.
//!
//! [`TriggeredEvent`]: crate::data::event::EventData::TriggeredEvent
//! [`Unknown`]: crate::data::event::EventData::Unknown

use crate::common::ParseError;
use crate::data::datetime::{
    datetime_parse,
    DateTimeL,
    RegexPattern,
};
use crate::data::event::{
    Event,
    EventData,
    Player,
    Position,
    PositionFloat,
    Velocity,
};
use crate::readers::framer::frame_line;

use ::const_format::concatcp;
use ::lazy_static::lazy_static;
use ::regex::{Captures, Regex};

// -------------------------------------------------------------------------
// regex pattern fragments
// -------------------------------------------------------------------------

/// Capture groups for the `"name<uid><steamid><side>"` player header;
/// four groups.
pub const CGP_PLAYER: &RegexPattern = r#""(.+?)<(\d+)><(.+?)><(.*?)>""#;
/// Player header without a side, as logged before team assignment;
/// three groups.
pub const CGP_PLAYER_NOSIDE: &RegexPattern = r#""(.+?)<(\d+)><(.+?)><>""#;
/// Integer `[x y z]` coordinates; three groups.
pub const CGP_POSITION: &RegexPattern = r"\[(-?\d+) (-?\d+) (-?\d+)\]";
/// A float scalar as logged by trajectory debug lines.
pub const CGP_FLOAT: &RegexPattern = r"(-?\d+\.?\d*)";
/// Three blank-separated float scalars; three groups.
pub const CGP_FLOAT3: &RegexPattern = concatcp!(CGP_FLOAT, " ", CGP_FLOAT, " ", CGP_FLOAT);

// -------------------------------------------------------------------------
// body patterns, in registration order
// -------------------------------------------------------------------------

pub const SERVER_MESSAGE_PATTERN: &RegexPattern = r#"server_message: "(\w+)""#;
pub const FREEZE_PERIOD_START_PATTERN: &RegexPattern = "Starting Freeze period";
pub const WORLD_MATCH_START_PATTERN: &RegexPattern = r#"World triggered "Match_Start" on "(\w+)""#;
pub const WORLD_ROUND_START_PATTERN: &RegexPattern = r#"World triggered "Round_Start""#;
pub const WORLD_ROUND_RESTART_PATTERN: &RegexPattern =
    r#"World triggered "Restart_Round_\((\d+)_seconds?\)""#;
pub const WORLD_ROUND_END_PATTERN: &RegexPattern = r#"World triggered "Round_End""#;
pub const WORLD_GAME_COMMENCING_PATTERN: &RegexPattern =
    r#"World triggered "Game_Commencing""#;
pub const TEAM_SCORED_PATTERN: &RegexPattern =
    r#"Team "(CT|TERRORIST)" scored "(\d+)" with "(\d+)" players"#;
pub const TEAM_NOTICE_PATTERN: &RegexPattern =
    r#"Team "(CT|TERRORIST)" triggered "(\w+)" \(CT "(\d+)"\) \(T "(\d+)"\)"#;
pub const PLAYER_CONNECTED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER_NOSIDE, r#" connected, address "(.*?)""#);
pub const PLAYER_DISCONNECTED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" disconnected \(reason "(.+?)"\)"#);
pub const PLAYER_ENTERED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER_NOSIDE, " entered the game");
pub const PLAYER_BANNED_PATTERN: &RegexPattern =
    concatcp!("Banid: ", CGP_PLAYER, r#" was banned "([\w. ]+)" by "(\w+)""#);
pub const PLAYER_SWITCHED_PATTERN: &RegexPattern =
    r#""(.+?)<(\d+)><(.+?)>" switched from team <(\w+)> to <(\w+)>"#;
/// Must precede [`PLAYER_SAY_PATTERN`]: a chat command is a special case
/// of a chat message.
pub const CHAT_COMMAND_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" say(?:_team)? "\.(\w+)\s*(.*)""#);
pub const PLAYER_SAY_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" say(_team)? "(.*)""#);
pub const PLAYER_PURCHASE_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" purchased "(\w+)""#);
pub const PLAYER_KILL_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    " ",
    CGP_POSITION,
    " killed ",
    CGP_PLAYER,
    " ",
    CGP_POSITION,
    r#" with "(\w+)"(?: \((headshot|penetrated|headshot penetrated)\))?"#
);
pub const PLAYER_KILL_ASSIST_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, " assisted killing ", CGP_PLAYER);
pub const PLAYER_ATTACK_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    " ",
    CGP_POSITION,
    " attacked ",
    CGP_PLAYER,
    " ",
    CGP_POSITION,
    r#" with "(\w+)" \(damage "(\d+)"\) \(damage_armor "(\d+)"\) \(health "(\d+)"\) \(armor "(\d+)"\) \(hitgroup "(.+?)"\)"#
);
pub const PLAYER_KILLED_BOMB_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, " ", CGP_POSITION, " was killed by the bomb");
pub const PLAYER_KILLED_SUICIDE_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    " ",
    CGP_POSITION,
    r#" committed suicide with "(\w+)""#
);
pub const PLAYER_PICKED_UP_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" picked up "(\w+)""#);
pub const PLAYER_DROPPED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" dropped "(\w+)""#);
pub const PLAYER_MONEY_CHANGE_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    r#" money change (\d+)([+-])(\d+) = \$(\d+) \(tracked\)(?: \(purchase: (\w+)\))?"#
);
pub const PLAYER_BOMB_GOT_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Got_The_Bomb""#);
pub const PLAYER_BOMB_PLANTED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Planted_The_Bomb""#);
pub const PLAYER_BOMB_DROPPED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Dropped_The_Bomb""#);
pub const PLAYER_BOMB_BEGIN_DEFUSE_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Begin_Bomb_Defuse_With(out)?_Kit""#);
pub const PLAYER_BOMB_DEFUSED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Defused_The_Bomb""#);
pub const PLAYER_BOMB_BEGIN_PLANT_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r#" triggered "Bomb_Begin_Plant""#);
pub const PLAYER_THREW_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    r" threw (\w+) ",
    CGP_POSITION,
    r"(?: flashbang entindex (\d+)\))?"
);
pub const PLAYER_BLINDED_PATTERN: &RegexPattern = concatcp!(
    CGP_PLAYER,
    r" blinded for ([0-9.]+) by ",
    CGP_PLAYER,
    r" from flashbang entindex (\d+)"
);
pub const PROJECTILE_SPAWNED_PATTERN: &RegexPattern = concatcp!(
    "Molotov projectile spawned at ",
    CGP_FLOAT3,
    ", velocity ",
    CGP_FLOAT3
);
pub const GAME_OVER_PATTERN: &RegexPattern =
    r"Game Over: (\w+) (\w+) (\w+) score (\d+):(\d+) after (\d+) min";
pub const PLAYER_LEFT_BUYZONE_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER, r" left buyzone with \[(.*?)\]");
pub const PLAYER_VALIDATED_PATTERN: &RegexPattern =
    concatcp!(CGP_PLAYER_NOSIDE, " STEAM USERID validated");
/// Delimiters between the accolade fields are tabs or commas, varying by
/// server build.
pub const PLAYER_ACCOLADE_PATTERN: &RegexPattern =
    r"ACCOLADE, (FINAL|ROUND): \{(.+?)\}[,\t]\s*(.+?)<(\d+)>[,\t]\s*VALUE: ([^,\t]+)";
pub const MATCH_STATUS_SCORE_PATTERN: &RegexPattern =
    r#"MatchStatus: Score: (\d+):(\d+) on map "(.+?)" RoundsPlayed: (-?\d+)"#;
/// Must precede [`TEAM_PLAYING_PATTERN`], of which it is a superstring.
pub const MATCH_STATUS_TEAM_PATTERN: &RegexPattern =
    r#"MatchStatus: Team playing "(TERRORIST|CT)": (.+)"#;
pub const TEAM_PLAYING_PATTERN: &RegexPattern =
    r#"Team playing "(TERRORIST|CT)": (.+)"#;
pub const MATCH_PAUSE_ENABLED_PATTERN: &RegexPattern = "Match pause is enabled";
pub const MATCH_PAUSE_DISABLED_PATTERN: &RegexPattern = "Match pause is disabled";
pub const MATCH_UNPAUSE_PATTERN: &RegexPattern = "Match unpaused";
pub const GRENADE_THROW_DEBUG_PATTERN: &RegexPattern = concatcp!(
    r#""(.+?)" (sv_throw_\w+) "#,
    CGP_FLOAT3,
    " ",
    CGP_FLOAT3
);
pub const SERVER_CVAR_PATTERN: &RegexPattern = r#"server_cvar: "(.+?)" "(.*?)""#;
pub const MP_CVAR_PATTERN: &RegexPattern = r#""(mp_.+?)" = "(.*?)""#;
pub const RCON_COMMAND_PATTERN: &RegexPattern = r#"rcon from "(.+?)": command "(.+?)""#;
pub const LOADING_MAP_PATTERN: &RegexPattern = r#"Loading map "(.+?)""#;
pub const STARTED_MAP_PATTERN: &RegexPattern = r#"Started map "(.+?)""#;
pub const LOG_FILE_STARTED_PATTERN: &RegexPattern = r#"Log file started \(file "(.+?)"\)"#;
pub const LOG_FILE_CLOSED_PATTERN: &RegexPattern = "Log file closed";
pub const GAME_OVER_DETAILED_PATTERN: &RegexPattern =
    r"Game Over: (\w+) (.+?) score (\d+):(\d+) after (\d+) min";
pub const FREEZE_PERIOD_END_PATTERN: &RegexPattern =
    r#"World triggered "Round_Freeze_End""#;
pub const WARMUP_START_PATTERN: &RegexPattern = r#"World triggered "Warmup_Start""#;
pub const WARMUP_END_PATTERN: &RegexPattern = r#"World triggered "Warmup_End""#;
/// The most general body shape; must be the **last** registered entry.
pub const TRIGGERED_EVENT_PATTERN: &RegexPattern =
    r#"(World|Team ".*?") triggered "(.+?)""#;

// -------------------------------------------------------------------------
// capture helpers
// -------------------------------------------------------------------------

// A recognized-but-unparsable field degrades to its zero value; a matched
// body always becomes an event.

fn cap<'a>(
    captures: &'a Captures,
    index: usize,
) -> &'a str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn cap_string(
    captures: &Captures,
    index: usize,
) -> String {
    cap(captures, index).to_string()
}

fn cap_u32(
    captures: &Captures,
    index: usize,
) -> u32 {
    cap(captures, index).parse::<u32>().unwrap_or(0)
}

fn cap_i32(
    captures: &Captures,
    index: usize,
) -> i32 {
    cap(captures, index).parse::<i32>().unwrap_or(0)
}

fn cap_f32(
    captures: &Captures,
    index: usize,
) -> f32 {
    cap(captures, index).parse::<f32>().unwrap_or(0.0)
}

fn cap_f64(
    captures: &Captures,
    index: usize,
) -> f64 {
    cap(captures, index).parse::<f64>().unwrap_or(0.0)
}

/// Build a [`Player`] from the four [`CGP_PLAYER`] groups starting at
/// `index`.
fn cap_player(
    captures: &Captures,
    index: usize,
) -> Player {
    Player::new(
        cap(captures, index),
        cap(captures, index + 1),
        cap(captures, index + 2),
        cap(captures, index + 3),
    )
}

/// Build a [`Player`] from the three [`CGP_PLAYER_NOSIDE`] groups starting
/// at `index`.
fn cap_player_noside(
    captures: &Captures,
    index: usize,
) -> Player {
    Player::new(
        cap(captures, index),
        cap(captures, index + 1),
        cap(captures, index + 2),
        "",
    )
}

/// Build a [`Position`] from the three [`CGP_POSITION`] groups starting at
/// `index`.
fn cap_position(
    captures: &Captures,
    index: usize,
) -> Position {
    Position {
        x: cap_i32(captures, index),
        y: cap_i32(captures, index + 1),
        z: cap_i32(captures, index + 2),
    }
}

fn cap_position_float(
    captures: &Captures,
    index: usize,
) -> PositionFloat {
    PositionFloat {
        x: cap_f32(captures, index),
        y: cap_f32(captures, index + 1),
        z: cap_f32(captures, index + 2),
    }
}

fn cap_velocity(
    captures: &Captures,
    index: usize,
) -> Velocity {
    Velocity {
        x: cap_f32(captures, index),
        y: cap_f32(captures, index + 1),
        z: cap_f32(captures, index + 2),
    }
}

// -------------------------------------------------------------------------
// payload constructors
// -------------------------------------------------------------------------

fn ev_server_message(captures: &Captures) -> EventData {
    EventData::ServerMessage {
        text: cap_string(captures, 1),
    }
}

fn ev_freeze_period_start(_captures: &Captures) -> EventData {
    EventData::FreezePeriod {
        action: "start".to_string(),
    }
}

fn ev_freeze_period_end(_captures: &Captures) -> EventData {
    EventData::FreezePeriod {
        action: "end".to_string(),
    }
}

fn ev_world_match_start(captures: &Captures) -> EventData {
    EventData::WorldMatchStart {
        map: cap_string(captures, 1),
    }
}

fn ev_world_round_start(_captures: &Captures) -> EventData {
    EventData::WorldRoundStart
}

fn ev_world_round_restart(captures: &Captures) -> EventData {
    EventData::WorldRoundRestart {
        timeout: cap_u32(captures, 1),
    }
}

fn ev_world_round_end(_captures: &Captures) -> EventData {
    EventData::WorldRoundEnd
}

fn ev_world_game_commencing(_captures: &Captures) -> EventData {
    EventData::WorldGameCommencing
}

fn ev_team_scored(captures: &Captures) -> EventData {
    EventData::TeamScored {
        side: cap_string(captures, 1),
        score: cap_u32(captures, 2),
        player_count: cap_u32(captures, 3),
    }
}

fn ev_team_notice(captures: &Captures) -> EventData {
    EventData::TeamNotice {
        side: cap_string(captures, 1),
        notice: cap_string(captures, 2),
        score_ct: cap_u32(captures, 3),
        score_t: cap_u32(captures, 4),
    }
}

fn ev_player_connected(captures: &Captures) -> EventData {
    EventData::PlayerConnected {
        player: cap_player_noside(captures, 1),
        address: cap_string(captures, 4),
    }
}

fn ev_player_disconnected(captures: &Captures) -> EventData {
    EventData::PlayerDisconnected {
        player: cap_player(captures, 1),
        reason: cap_string(captures, 5),
    }
}

fn ev_player_entered(captures: &Captures) -> EventData {
    EventData::PlayerEntered {
        player: cap_player_noside(captures, 1),
    }
}

fn ev_player_banned(captures: &Captures) -> EventData {
    EventData::PlayerBanned {
        player: cap_player(captures, 1),
        duration: cap_string(captures, 5),
        by: cap_string(captures, 6),
    }
}

fn ev_player_switched(captures: &Captures) -> EventData {
    EventData::PlayerSwitched {
        player: cap_player_noside(captures, 1),
        from: cap_string(captures, 4),
        to: cap_string(captures, 5),
    }
}

fn ev_chat_command(captures: &Captures) -> EventData {
    let command: String = cap_string(captures, 5);
    let args: String = cap_string(captures, 6);
    let text: String = format!(".{} {}", command, args);
    EventData::ChatCommand {
        player: cap_player(captures, 1),
        command,
        args,
        text,
    }
}

fn ev_player_say(captures: &Captures) -> EventData {
    EventData::PlayerSay {
        player: cap_player(captures, 1),
        team: captures.get(5).is_some(),
        text: cap_string(captures, 6),
    }
}

fn ev_player_purchase(captures: &Captures) -> EventData {
    EventData::PlayerPurchase {
        player: cap_player(captures, 1),
        item: cap_string(captures, 5),
    }
}

fn ev_player_kill(captures: &Captures) -> EventData {
    let flags: &str = cap(captures, 16);
    EventData::PlayerKill {
        attacker: cap_player(captures, 1),
        attacker_position: cap_position(captures, 5),
        victim: cap_player(captures, 8),
        victim_position: cap_position(captures, 12),
        weapon: cap_string(captures, 15),
        headshot: flags.contains("headshot"),
        penetrated: flags.contains("penetrated"),
    }
}

fn ev_player_kill_assist(captures: &Captures) -> EventData {
    EventData::PlayerKillAssist {
        attacker: cap_player(captures, 1),
        victim: cap_player(captures, 5),
    }
}

fn ev_player_attack(captures: &Captures) -> EventData {
    EventData::PlayerAttack {
        attacker: cap_player(captures, 1),
        attacker_position: cap_position(captures, 5),
        victim: cap_player(captures, 8),
        victim_position: cap_position(captures, 12),
        weapon: cap_string(captures, 15),
        damage: cap_u32(captures, 16),
        damage_armor: cap_u32(captures, 17),
        health: cap_u32(captures, 18),
        armor: cap_u32(captures, 19),
        hitgroup: cap_string(captures, 20),
    }
}

fn ev_player_killed_bomb(captures: &Captures) -> EventData {
    EventData::PlayerKilledBomb {
        player: cap_player(captures, 1),
        position: cap_position(captures, 5),
    }
}

fn ev_player_killed_suicide(captures: &Captures) -> EventData {
    EventData::PlayerKilledSuicide {
        player: cap_player(captures, 1),
        position: cap_position(captures, 5),
        with: cap_string(captures, 8),
    }
}

fn ev_player_picked_up(captures: &Captures) -> EventData {
    EventData::PlayerPickedUp {
        player: cap_player(captures, 1),
        item: cap_string(captures, 5),
    }
}

fn ev_player_dropped(captures: &Captures) -> EventData {
    EventData::PlayerDropped {
        player: cap_player(captures, 1),
        item: cap_string(captures, 5),
    }
}

fn ev_player_money_change(captures: &Captures) -> EventData {
    let amount: i32 = cap_i32(captures, 7);
    let delta: i32 = match cap(captures, 6) {
        "-" => -amount,
        _ => amount,
    };
    EventData::PlayerMoneyChange {
        player: cap_player(captures, 1),
        before: cap_i32(captures, 5),
        delta,
        after: cap_i32(captures, 8),
        purchase: cap_string(captures, 9),
    }
}

fn bomb_action(
    captures: &Captures,
    action: &str,
) -> EventData {
    EventData::BombAction {
        player: cap_player(captures, 1),
        action: action.to_string(),
    }
}

fn ev_player_bomb_got(captures: &Captures) -> EventData {
    bomb_action(captures, "got")
}

fn ev_player_bomb_planted(captures: &Captures) -> EventData {
    bomb_action(captures, "planted")
}

fn ev_player_bomb_dropped(captures: &Captures) -> EventData {
    bomb_action(captures, "dropped")
}

fn ev_player_bomb_begin_defuse(captures: &Captures) -> EventData {
    match captures.get(5) {
        Some(_) => bomb_action(captures, "begin_defuse_without_kit"),
        None => bomb_action(captures, "begin_defuse_with_kit"),
    }
}

fn ev_player_bomb_defused(captures: &Captures) -> EventData {
    bomb_action(captures, "defused")
}

fn ev_player_bomb_begin_plant(captures: &Captures) -> EventData {
    bomb_action(captures, "begin_plant")
}

fn ev_player_threw(captures: &Captures) -> EventData {
    EventData::PlayerThrew {
        player: cap_player(captures, 1),
        grenade: cap_string(captures, 5),
        position: cap_position(captures, 6),
        entindex: cap_u32(captures, 9),
    }
}

fn ev_player_blinded(captures: &Captures) -> EventData {
    EventData::PlayerBlinded {
        victim: cap_player(captures, 1),
        duration: cap_f32(captures, 5),
        attacker: cap_player(captures, 6),
        entindex: cap_u32(captures, 10),
    }
}

fn ev_projectile_spawned(captures: &Captures) -> EventData {
    EventData::ProjectileSpawned {
        position: cap_position_float(captures, 1),
        velocity: cap_velocity(captures, 4),
    }
}

fn ev_game_over(captures: &Captures) -> EventData {
    EventData::GameOver {
        mode: cap_string(captures, 1),
        map_group: cap_string(captures, 2),
        map: cap_string(captures, 3),
        score_ct: cap_u32(captures, 4),
        score_t: cap_u32(captures, 5),
        duration: cap_u32(captures, 6),
    }
}

fn ev_player_left_buyzone(captures: &Captures) -> EventData {
    let equipment: Vec<String> = cap(captures, 5)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    EventData::PlayerLeftBuyzone {
        player: cap_player(captures, 1),
        equipment,
    }
}

fn ev_player_validated(captures: &Captures) -> EventData {
    EventData::PlayerValidated {
        player: cap_player_noside(captures, 1),
    }
}

fn ev_player_accolade(captures: &Captures) -> EventData {
    EventData::PlayerAccolade {
        accolade: cap_string(captures, 2),
        player: Player::new(cap(captures, 3), cap(captures, 4), "", ""),
        value: cap_f64(captures, 5),
        is_final: cap(captures, 1) == "FINAL",
    }
}

fn ev_match_status_score(captures: &Captures) -> EventData {
    EventData::MatchStatus {
        score_ct: cap_u32(captures, 1),
        score_t: cap_u32(captures, 2),
        map: cap_string(captures, 3),
        rounds_played: cap_i32(captures, 4),
    }
}

fn ev_team_playing(captures: &Captures) -> EventData {
    EventData::TeamPlaying {
        side: cap_string(captures, 1),
        team_name: cap_string(captures, 2),
    }
}

fn ev_match_pause_enabled(_captures: &Captures) -> EventData {
    EventData::MatchPause {
        action: "enabled".to_string(),
    }
}

fn ev_match_pause_disabled(_captures: &Captures) -> EventData {
    EventData::MatchPause {
        action: "disabled".to_string(),
    }
}

fn ev_match_unpause(_captures: &Captures) -> EventData {
    EventData::MatchPause {
        action: "unpaused".to_string(),
    }
}

fn ev_grenade_throw_debug(captures: &Captures) -> EventData {
    let grenade_type: String = cap(captures, 2)
        .trim_start_matches("sv_throw_")
        .to_string();
    let debug_command: String = captures
        .iter()
        .skip(2)
        .flatten()
        .map(|m| m.as_str())
        .collect::<Vec<&str>>()
        .join(" ");
    EventData::GrenadeThrowDebug {
        player: Player::new(cap(captures, 1), "", "", ""),
        grenade_type,
        position: cap_position_float(captures, 3),
        velocity: cap_velocity(captures, 6),
        debug_command,
    }
}

fn ev_server_cvar(captures: &Captures) -> EventData {
    EventData::ServerCvar {
        name: cap_string(captures, 1),
        value: cap_string(captures, 2),
    }
}

fn ev_rcon_command(captures: &Captures) -> EventData {
    EventData::RconCommand {
        source: cap_string(captures, 1),
        command: cap_string(captures, 2),
    }
}

fn ev_loading_map(captures: &Captures) -> EventData {
    EventData::LoadingMap {
        map: cap_string(captures, 1),
    }
}

fn ev_started_map(captures: &Captures) -> EventData {
    EventData::StartedMap {
        map: cap_string(captures, 1),
    }
}

fn ev_log_file_started(captures: &Captures) -> EventData {
    EventData::LogFileStarted {
        filename: cap_string(captures, 1),
    }
}

fn ev_log_file_closed(_captures: &Captures) -> EventData {
    EventData::LogFileClosed
}

fn ev_game_over_detailed(captures: &Captures) -> EventData {
    EventData::GameOverDetailed {
        mode: cap_string(captures, 1),
        map: cap_string(captures, 2),
        score_ct: cap_u32(captures, 3),
        score_t: cap_u32(captures, 4),
        duration: cap_u32(captures, 5),
    }
}

fn ev_warmup_start(_captures: &Captures) -> EventData {
    EventData::WarmupPeriod {
        action: "start".to_string(),
    }
}

fn ev_warmup_end(_captures: &Captures) -> EventData {
    EventData::WarmupPeriod {
        action: "end".to_string(),
    }
}

fn ev_triggered_event(captures: &Captures) -> EventData {
    EventData::TriggeredEvent {
        source: cap_string(captures, 1),
        event: cap_string(captures, 2),
    }
}

// -------------------------------------------------------------------------
// the registry
// -------------------------------------------------------------------------

/// Constructor half of a [`PatternEntry`]: captured substrings in, payload
/// out. Infallible; field-level decode failures degrade to zero values.
pub type EventCtor = fn(&Captures) -> EventData;

/// One `(matcher, constructor)` pair in the ordered dispatch table.
/// Immutable once registered.
pub struct PatternEntry {
    pub regex: Regex,
    pub ctor: EventCtor,
}

fn entry(
    pattern: &str,
    ctor: EventCtor,
) -> PatternEntry {
    PatternEntry {
        // all patterns are compile-time constants; a failure here is a
        // defect in this file, caught by `test_registry_compiles`
        regex: Regex::new(pattern).unwrap(),
        ctor,
    }
}

lazy_static! {
    /// The process-wide, read-only dispatch table, in registration order.
    ///
    /// No two entries may be reordered without changing observable output;
    /// see the module documentation.
    pub static ref PATTERN_REGISTRY: Vec<PatternEntry> = vec![
        entry(SERVER_MESSAGE_PATTERN, ev_server_message),
        entry(FREEZE_PERIOD_START_PATTERN, ev_freeze_period_start),
        entry(WORLD_MATCH_START_PATTERN, ev_world_match_start),
        entry(WORLD_ROUND_START_PATTERN, ev_world_round_start),
        entry(WORLD_ROUND_RESTART_PATTERN, ev_world_round_restart),
        entry(WORLD_ROUND_END_PATTERN, ev_world_round_end),
        entry(WORLD_GAME_COMMENCING_PATTERN, ev_world_game_commencing),
        entry(TEAM_SCORED_PATTERN, ev_team_scored),
        entry(TEAM_NOTICE_PATTERN, ev_team_notice),
        entry(PLAYER_CONNECTED_PATTERN, ev_player_connected),
        entry(PLAYER_DISCONNECTED_PATTERN, ev_player_disconnected),
        entry(PLAYER_ENTERED_PATTERN, ev_player_entered),
        entry(PLAYER_BANNED_PATTERN, ev_player_banned),
        entry(PLAYER_SWITCHED_PATTERN, ev_player_switched),
        // chat command before say; a command is a special case of a say
        entry(CHAT_COMMAND_PATTERN, ev_chat_command),
        entry(PLAYER_SAY_PATTERN, ev_player_say),
        entry(PLAYER_PURCHASE_PATTERN, ev_player_purchase),
        entry(PLAYER_KILL_PATTERN, ev_player_kill),
        entry(PLAYER_KILL_ASSIST_PATTERN, ev_player_kill_assist),
        entry(PLAYER_ATTACK_PATTERN, ev_player_attack),
        entry(PLAYER_KILLED_BOMB_PATTERN, ev_player_killed_bomb),
        entry(PLAYER_KILLED_SUICIDE_PATTERN, ev_player_killed_suicide),
        entry(PLAYER_PICKED_UP_PATTERN, ev_player_picked_up),
        entry(PLAYER_DROPPED_PATTERN, ev_player_dropped),
        entry(PLAYER_MONEY_CHANGE_PATTERN, ev_player_money_change),
        entry(PLAYER_BOMB_GOT_PATTERN, ev_player_bomb_got),
        entry(PLAYER_BOMB_PLANTED_PATTERN, ev_player_bomb_planted),
        entry(PLAYER_BOMB_DROPPED_PATTERN, ev_player_bomb_dropped),
        entry(PLAYER_BOMB_BEGIN_DEFUSE_PATTERN, ev_player_bomb_begin_defuse),
        entry(PLAYER_BOMB_DEFUSED_PATTERN, ev_player_bomb_defused),
        entry(PLAYER_BOMB_BEGIN_PLANT_PATTERN, ev_player_bomb_begin_plant),
        entry(PLAYER_THREW_PATTERN, ev_player_threw),
        entry(PLAYER_BLINDED_PATTERN, ev_player_blinded),
        entry(PROJECTILE_SPAWNED_PATTERN, ev_projectile_spawned),
        entry(GAME_OVER_PATTERN, ev_game_over),
        entry(PLAYER_LEFT_BUYZONE_PATTERN, ev_player_left_buyzone),
        entry(PLAYER_VALIDATED_PATTERN, ev_player_validated),
        entry(PLAYER_ACCOLADE_PATTERN, ev_player_accolade),
        entry(MATCH_STATUS_SCORE_PATTERN, ev_match_status_score),
        // the MatchStatus-prefixed form is a superstring of the bare form
        entry(MATCH_STATUS_TEAM_PATTERN, ev_team_playing),
        entry(TEAM_PLAYING_PATTERN, ev_team_playing),
        entry(MATCH_PAUSE_ENABLED_PATTERN, ev_match_pause_enabled),
        entry(MATCH_PAUSE_DISABLED_PATTERN, ev_match_pause_disabled),
        entry(MATCH_UNPAUSE_PATTERN, ev_match_unpause),
        entry(GRENADE_THROW_DEBUG_PATTERN, ev_grenade_throw_debug),
        entry(SERVER_CVAR_PATTERN, ev_server_cvar),
        entry(MP_CVAR_PATTERN, ev_server_cvar),
        entry(RCON_COMMAND_PATTERN, ev_rcon_command),
        entry(LOADING_MAP_PATTERN, ev_loading_map),
        entry(STARTED_MAP_PATTERN, ev_started_map),
        entry(LOG_FILE_STARTED_PATTERN, ev_log_file_started),
        entry(LOG_FILE_CLOSED_PATTERN, ev_log_file_closed),
        entry(GAME_OVER_DETAILED_PATTERN, ev_game_over_detailed),
        entry(FREEZE_PERIOD_END_PATTERN, ev_freeze_period_end),
        entry(WARMUP_START_PATTERN, ev_warmup_start),
        entry(WARMUP_END_PATTERN, ev_warmup_end),
        // must stay last; accepts any `X triggered "Y"` shaped body
        entry(TRIGGERED_EVENT_PATTERN, ev_triggered_event),
    ];
}

// -------------------------------------------------------------------------
// the single-line dispatcher
// -------------------------------------------------------------------------

/// Classify one framed body into exactly one event.
///
/// Entries are tried in registration order; the first acceptance wins and
/// scanning stops. An unmatched body yields [`EventData::Unknown`], never
/// a silent drop.
pub fn dispatch(
    timestamp: DateTimeL,
    body: &str,
) -> Event {
    for pattern_entry in PATTERN_REGISTRY.iter() {
        if let Some(captures) = pattern_entry.regex.captures(body) {
            return Event::new(timestamp, (pattern_entry.ctor)(&captures));
        }
    }

    Event::new(
        timestamp,
        EventData::Unknown {
            raw: body.to_string(),
        },
    )
}

/// Stateless single-line parse: frame, parse the timestamp, dispatch.
///
/// This does not know about statistics blocks; callers with a full line
/// sequence want [`LogProcessor`] instead.
///
/// [`LogProcessor`]: crate::readers::accumulator::LogProcessor
pub fn parse_line(line: &str) -> Result<Event, ParseError> {
    let framed = frame_line(line)?;
    let timestamp: DateTimeL = datetime_parse(framed.timestamp)?;

    Ok(dispatch(timestamp, framed.body))
}
