//! Creature and move payloads

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;

/// Non-volatile status conditions reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Burned,
    Frostbitten,
    Paralyzed,
    Poisoned,
    Asleep,
}

impl StatusKind {
    /// Wire name ("BURNED", "PARALYZED", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Burned => "BURNED",
            StatusKind::Frostbitten => "FROSTBITTEN",
            StatusKind::Paralyzed => "PARALYZED",
            StatusKind::Poisoned => "POISONED",
            StatusKind::Asleep => "ASLEEP",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryStatus {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Static move data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    #[serde(default)]
    pub implemented: bool,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub category: MoveCategory,
    /// 0 for moves without base power
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub pp: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target: String,
    /// Effect descriptors, opaque to the client
    #[serde(default)]
    pub effect: Vec<serde_json::Value>,
}

/// A move as currently known by a creature in battle, with remaining PP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub data: MoveData,
    pub current_pp: u32,
    pub max_pp: u32,
}

impl MoveSlot {
    pub fn key(&self) -> &str {
        &self.data.key
    }

    pub fn has_pp(&self) -> bool {
        self.current_pp > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub implemented: bool,
}

/// Team-builder view of a creature (species, level, learned moves)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonInstance {
    pub species: SpeciesData,
    pub level: u32,
    #[serde(default)]
    pub learned_moves: Vec<MoveData>,
    #[serde(default)]
    pub ability: String,
}

/// A creature taking part in a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePokemon {
    pub key: String,
    pub current_hp: u32,
    pub max_hp: u32,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    pub alive: bool,
    #[serde(default)]
    pub types: Vec<String>,
    pub pokemon: PokemonInstance,
    pub owner: Player,
    #[serde(default)]
    pub primary_status: Option<PrimaryStatus>,
}

impl BattlePokemon {
    /// Species display name
    pub fn name(&self) -> &str {
        &self.pokemon.species.name
    }

    pub fn level(&self) -> u32 {
        self.pokemon.level
    }

    pub fn status(&self) -> Option<StatusKind> {
        self.primary_status.as_ref().map(|s| s.kind)
    }

    pub fn find_move(&self, key: &str) -> Option<&MoveSlot> {
        self.moves.iter().find(|m| m.key() == key)
    }
}
