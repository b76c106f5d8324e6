//! Snapshot types returned by the battle service
//!
//! Every battle endpoint answers with a full [`Battle`] snapshot. The client
//! never patches a snapshot; it replaces the previous one.

mod pokemon;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

pub use pokemon::{
    BattlePokemon, MoveCategory, MoveData, MoveSlot, PokemonInstance, PrimaryStatus, SpeciesData,
    StatusKind,
};

/// A player session as seen by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub key: String,
}

/// Server-side lifecycle of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleState {
    Started,
    /// The service has pending work (usually the opponent's move) that the
    /// client has to trigger with a force-action request
    Processing,
    WaitingForInputMoves,
    WaitingForInputReplacePokemon,
    Won,
    Lost,
}

impl BattleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleState::Started => "STARTED",
            BattleState::Processing => "PROCESSING",
            BattleState::WaitingForInputMoves => "WAITING_FOR_INPUT_MOVES",
            BattleState::WaitingForInputReplacePokemon => "WAITING_FOR_INPUT_REPLACE_POKEMON",
            BattleState::Won => "WON",
            BattleState::Lost => "LOST",
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, BattleState::Processing)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, BattleState::Won | BattleState::Lost)
    }

    /// The service expects a move from us
    pub fn awaits_move(&self) -> bool {
        matches!(self, BattleState::WaitingForInputMoves)
    }

    /// Our active creature fainted and must be replaced
    pub fn awaits_replacement(&self) -> bool {
        matches!(self, BattleState::WaitingForInputReplacePokemon)
    }
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BattleState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(BattleState::Started),
            "PROCESSING" => Ok(BattleState::Processing),
            "WAITING_FOR_INPUT_MOVES" => Ok(BattleState::WaitingForInputMoves),
            "WAITING_FOR_INPUT_REPLACE_POKEMON" => Ok(BattleState::WaitingForInputReplacePokemon),
            "WON" => Ok(BattleState::Won),
            "LOST" => Ok(BattleState::Lost),
            other => Err(ParseError::UnknownState(other.to_string())),
        }
    }
}

/// One line of the battle log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub time: String,
    pub message: String,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub pokemon: Option<BattlePokemon>,
}

/// Our side of the battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleTeam {
    pub player: Player,
    #[serde(default)]
    pub pokemon: Vec<BattlePokemon>,
}

impl BattleTeam {
    pub fn get(&self, key: &str) -> Option<&BattlePokemon> {
        self.pokemon.iter().find(|p| p.key == key)
    }

    pub fn alive(&self) -> impl Iterator<Item = &BattlePokemon> {
        self.pokemon.iter().filter(|p| p.alive)
    }
}

/// Battle snapshot, from the point of view of the requesting player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: u64,
    pub state: BattleState,
    pub player_a: Player,
    pub player_b: Player,
    pub player_team: BattleTeam,
    #[serde(default)]
    pub turn: u32,
    /// Absent while the service has no creature on the field for us
    #[serde(default)]
    pub active_pokemon_player: Option<BattlePokemon>,
    #[serde(default)]
    pub active_pokemon_opponent: Option<BattlePokemon>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub completed: bool,
}

impl Battle {
    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}

/// Decode a snapshot from a response body
pub fn parse_battle(body: &str) -> Result<Battle, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    Ok(serde_json::from_str(body)?)
}
