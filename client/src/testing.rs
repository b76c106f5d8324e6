//! In-memory battle service for session tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use skirmish_protocol::{Battle, BattleState, PlayerCommand, parse_battle};

use crate::api::BattleApi;
use crate::config::{ClientConfig, ProcessingPolicy};
use crate::error::{Error, Result};

const BATTLE_JSON: &str = include_str!("../../protocol/testdata/battle.json");

pub fn battle_in(state: BattleState) -> Battle {
    let mut battle = parse_battle(BATTLE_JSON).unwrap();
    battle.state = state;
    battle
}

pub fn server_error() -> Error {
    Error::Status {
        status: 500,
        reason: "Internal Server Error".into(),
    }
}

pub fn config(max_rounds: usize) -> ClientConfig {
    ClientConfig {
        processing: ProcessingPolicy {
            max_rounds,
            poll_interval: Duration::ZERO,
        },
        ..ClientConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreatePlayer(String),
    CreateBattle(String, Option<u32>),
    Command(PlayerCommand),
    Info(u64, String),
    Force(u64),
}

/// Answers battle calls from a queue, in order, and records every call
#[derive(Default)]
pub struct ScriptedApi {
    player_key: Mutex<Option<Result<String>>>,
    responses: Mutex<VecDeque<Result<Battle>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(self, key: Result<String>) -> Self {
        *self.player_key.lock().unwrap() = Some(key);
        self
    }

    pub fn then(self, response: Result<Battle>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pending(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    fn next(&self, call: Call) -> Result<Battle> {
        self.calls.lock().unwrap().push(call.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call: {:?}", call))
    }
}

impl BattleApi for ScriptedApi {
    async fn create_player(&self, name: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreatePlayer(name.to_string()));
        self.player_key
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok("pk-1".to_string()))
    }

    async fn create_battle(&self, player_key: &str, level: Option<u32>) -> Result<Battle> {
        self.next(Call::CreateBattle(player_key.to_string(), level))
    }

    async fn send_command(&self, command: &PlayerCommand) -> Result<Battle> {
        self.next(Call::Command(command.clone()))
    }

    async fn battle_info(&self, battle_id: u64, player_key: &str) -> Result<Battle> {
        self.next(Call::Info(battle_id, player_key.to_string()))
    }

    async fn force_ai_action(&self, battle_id: u64) -> Result<Battle> {
        self.next(Call::Force(battle_id))
    }
}
