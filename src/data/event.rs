// src/data/event.rs

//! The [`Event`] type: one decoded, typed record derived from either one
//! log line or one completed multi-line statistics block.
//!
//! An `Event` is a common header (the parsed timestamp) plus an
//! [`EventData`] payload. `EventData` is a closed sum type with one variant
//! per recognized event kind; the serialized form is self-describing,
//! carrying a `kind` tag next to the timestamp and the payload fields.
//!
//! Event kinds are data shapes, not a behavior hierarchy. Code that needs
//! the discriminant without the payload uses [`EventDataKind`]
//! (derived with [`kinded`]).

use crate::data::datetime::DateTimeL;
use crate::data::stats::RoundStats;

use ::kinded::Kinded;
use ::serde::Serialize;

/// The `name<uid><steamid><side>` quadruple most player-scoped log bodies
/// start with.
///
/// `side` is empty for events logged before team assignment
/// (connect, validate, enter).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub id: u32,
    pub steam_id: String,
    pub side: String,
}

impl Player {
    /// Build a `Player` from raw captured substrings.
    ///
    /// A non-numeric `id` degrades to `0`; it never fails.
    pub fn new(
        name: &str,
        id: &str,
        steam_id: &str,
        side: &str,
    ) -> Player {
        Player {
            name: name.to_string(),
            id: id.parse::<u32>().unwrap_or(0),
            steam_id: steam_id.to_string(),
            side: side.to_string(),
        }
    }
}

/// Integer world coordinates; the `[-1285 2279 -52]` bracket form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Float world coordinates, used by projectile and throw-debug lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PositionFloat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A velocity vector, used by projectile and throw-debug lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Payload of one recognized event kind.
///
/// The serde `kind` tag is the variant name in `snake_case`; that tag plus
/// the timestamp of the enclosing [`Event`] make every serialized event
/// self-describing.
#[derive(Clone, Debug, PartialEq, Serialize, Kinded)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventData {
    // server and world state
    ServerMessage {
        text: String,
    },
    /// `Loading map "de_nuke"`
    LoadingMap {
        map: String,
    },
    /// `Started map "de_nuke"`
    StartedMap {
        map: String,
    },
    LogFileStarted {
        filename: String,
    },
    LogFileClosed,
    ServerCvar {
        name: String,
        value: String,
    },
    RconCommand {
        source: String,
        command: String,
    },
    WorldMatchStart {
        map: String,
    },
    WorldRoundStart,
    WorldRoundRestart {
        timeout: u32,
    },
    WorldRoundEnd,
    WorldGameCommencing,
    /// `Starting Freeze period` / `World triggered "Round_Freeze_End"`
    FreezePeriod {
        action: String,
    },
    WarmupPeriod {
        action: String,
    },
    MatchPause {
        action: String,
    },
    /// `MatchStatus: Score: 16:15 on map "de_nuke" RoundsPlayed: 31`
    MatchStatus {
        score_ct: u32,
        score_t: u32,
        map: String,
        rounds_played: i32,
    },
    /// `Team playing "CT": Monte`, with or without the `MatchStatus:` prefix
    TeamPlaying {
        side: String,
        team_name: String,
    },
    TeamScored {
        side: String,
        score: u32,
        player_count: u32,
    },
    TeamNotice {
        side: String,
        notice: String,
        score_ct: u32,
        score_t: u32,
    },
    GameOver {
        mode: String,
        map_group: String,
        map: String,
        score_ct: u32,
        score_t: u32,
        duration: u32,
    },
    GameOverDetailed {
        mode: String,
        map: String,
        score_ct: u32,
        score_t: u32,
        duration: u32,
    },

    // player lifecycle
    PlayerConnected {
        player: Player,
        address: String,
    },
    PlayerValidated {
        player: Player,
    },
    PlayerEntered {
        player: Player,
    },
    PlayerDisconnected {
        player: Player,
        reason: String,
    },
    PlayerBanned {
        player: Player,
        duration: String,
        by: String,
    },
    PlayerSwitched {
        player: Player,
        from: String,
        to: String,
    },

    // player actions
    /// A chat line starting with a `.command`; dispatched before
    /// [`EventData::PlayerSay`], of which it is a special case.
    ChatCommand {
        player: Player,
        command: String,
        args: String,
        text: String,
    },
    PlayerSay {
        player: Player,
        team: bool,
        text: String,
    },
    PlayerPurchase {
        player: Player,
        item: String,
    },
    PlayerLeftBuyzone {
        player: Player,
        equipment: Vec<String>,
    },
    PlayerPickedUp {
        player: Player,
        item: String,
    },
    PlayerDropped {
        player: Player,
        item: String,
    },
    PlayerMoneyChange {
        player: Player,
        before: i32,
        delta: i32,
        after: i32,
        purchase: String,
    },
    PlayerKill {
        attacker: Player,
        attacker_position: Position,
        victim: Player,
        victim_position: Position,
        weapon: String,
        headshot: bool,
        penetrated: bool,
    },
    PlayerKillAssist {
        attacker: Player,
        victim: Player,
    },
    PlayerAttack {
        attacker: Player,
        attacker_position: Position,
        victim: Player,
        victim_position: Position,
        weapon: String,
        damage: u32,
        damage_armor: u32,
        health: u32,
        armor: u32,
        hitgroup: String,
    },
    PlayerKilledBomb {
        player: Player,
        position: Position,
    },
    PlayerKilledSuicide {
        player: Player,
        position: Position,
        with: String,
    },
    PlayerThrew {
        player: Player,
        grenade: String,
        position: Position,
        entindex: u32,
    },
    PlayerBlinded {
        victim: Player,
        duration: f32,
        attacker: Player,
        entindex: u32,
    },
    ProjectileSpawned {
        position: PositionFloat,
        velocity: Velocity,
    },
    /// `ACCOLADE, FINAL: {3k}, ragga<6>, VALUE: 2.000000`
    PlayerAccolade {
        accolade: String,
        player: Player,
        value: f64,
        is_final: bool,
    },
    /// `sv_throw_*` trajectory debug output
    GrenadeThrowDebug {
        player: Player,
        grenade_type: String,
        position: PositionFloat,
        velocity: Velocity,
        debug_command: String,
    },

    // bomb
    /// The `"player<…>" triggered "…"` bomb forms, collapsed by action:
    /// `got`, `dropped`, `begin_plant`, `planted`, `begin_defuse`,
    /// `begin_defuse_with_kit`, `defused`.
    BombAction {
        player: Player,
        action: String,
    },

    /// Generic `World triggered "X"` / `Team "Y" triggered "X"` catch-all.
    /// Must stay the last registered pattern; every more specific
    /// `triggered` form above shadows it.
    TriggeredEvent {
        source: String,
        event: String,
    },

    /// One completed multi-line statistics block.
    RoundStats(RoundStats),

    /// A well-framed body matched by no registered pattern. Never a silent
    /// drop; the raw body is carried for downstream consumers.
    Unknown {
        raw: String,
    },
}

/// One decoded, typed record: common header plus payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub timestamp: DateTimeL,
    #[serde(flatten)]
    pub data: EventData,
}

impl Event {
    pub fn new(
        timestamp: DateTimeL,
        data: EventData,
    ) -> Event {
        Event { timestamp, data }
    }

    /// The kind discriminant of the payload.
    pub fn kind(&self) -> EventDataKind {
        self.data.kind()
    }
}

/// Serialize one event to a JSON document.
///
/// Serialization cannot fail for these closed data shapes; an empty string
/// is returned in the impossible case rather than panicking.
pub fn to_json(event: &Event) -> String {
    serde_json::to_string(event).unwrap_or_default()
}
