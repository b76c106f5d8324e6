use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::server::Battle;

/// Slot a replacement is sent into. The service only runs single battles.
pub const SWITCH_ORIGIN_SLOT: u32 = 1;

/// Kind of intent carried by a [`PlayerCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Use one of the active creature's moves
    Move,
    /// Send a creature from the team into the field
    Switch,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Move => "move",
            CommandType::Switch => "switch",
        }
    }
}

impl FromStr for CommandType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(CommandType::Move),
            "switch" => Ok(CommandType::Switch),
            other => Err(ParseError::UnknownCommandType(other.to_string())),
        }
    }
}

/// Body of `POST /battle/command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCommand {
    pub battle_id: u64,
    pub player_key: String,
    pub command_type: CommandType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pokemon_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_slot: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_slot: Option<u32>,
}

impl PlayerCommand {
    /// Use `move_key` with the creature identified by `pokemon_key`
    pub fn use_move(
        battle: &Battle,
        player_key: &str,
        move_key: &str,
        pokemon_key: &str,
    ) -> Self {
        Self {
            battle_id: battle.id,
            player_key: player_key.to_string(),
            command_type: CommandType::Move,
            move_key: Some(move_key.to_string()),
            pokemon_key: Some(pokemon_key.to_string()),
            target_slot: None,
            origin_slot: None,
        }
    }

    /// Replace the active creature with `pokemon_key`
    pub fn switch_to(battle: &Battle, player_key: &str, pokemon_key: &str) -> Self {
        Self {
            battle_id: battle.id,
            player_key: player_key.to_string(),
            command_type: CommandType::Switch,
            move_key: None,
            pokemon_key: Some(pokemon_key.to_string()),
            target_slot: None,
            origin_slot: Some(SWITCH_ORIGIN_SLOT),
        }
    }
}

/// HTTP verb used by an [`Endpoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The fixed REST surface exposed by the battle service
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// POST /player/new?name=NAME -> plain text player key
    CreatePlayer { name: String },

    /// POST /battle/new-vs-ai[?level=N], body is the JSON-encoded player key
    CreateBattle { level: Option<u32> },

    /// POST /battle/command, body is a [`PlayerCommand`]
    Command,

    /// GET /battle/info?battleId=ID&playerKey=KEY
    BattleInfo { battle_id: u64, player_key: String },

    /// POST /battle/force-action?battleId=ID
    ForceAction { battle_id: u64 },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Self::BattleInfo { .. } => Method::Get,
            _ => Method::Post,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::CreatePlayer { .. } => "/player/new",
            Self::CreateBattle { .. } => "/battle/new-vs-ai",
            Self::Command => "/battle/command",
            Self::BattleInfo { .. } => "/battle/info",
            Self::ForceAction { .. } => "/battle/force-action",
        }
    }

    /// Query pairs, unencoded. The HTTP layer takes care of escaping.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CreatePlayer { name } => vec![("name", name.clone())],
            Self::CreateBattle { level } => level
                .map(|level| vec![("level", level.to_string())])
                .unwrap_or_default(),
            Self::Command => Vec::new(),
            Self::BattleInfo {
                battle_id,
                player_key,
            } => vec![
                ("battleId", battle_id.to_string()),
                ("playerKey", player_key.clone()),
            ],
            Self::ForceAction { battle_id } => vec![("battleId", battle_id.to_string())],
        }
    }
}
