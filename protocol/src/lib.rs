use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{CommandType, Endpoint, Method, PlayerCommand, SWITCH_ORIGIN_SLOT};
pub use server::{
    Battle, BattlePokemon, BattleState, BattleTeam, LogEntry, MoveCategory, MoveData, MoveSlot,
    Player, PokemonInstance, PrimaryStatus, SpeciesData, StatusKind, parse_battle,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid battle payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Unknown command type: {0}")]
    UnknownCommandType(String),

    #[error("Unknown battle state: {0}")]
    UnknownState(String),

    #[error("Empty payload")]
    EmptyPayload,
}
