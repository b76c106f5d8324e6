use skirmish_protocol::{Battle, PlayerCommand};

use crate::error::Result;

/// The battle service as seen by a session.
///
/// [`HttpApi`](crate::HttpApi) is the production implementation. Every
/// battle operation answers with a full snapshot.
pub trait BattleApi {
    /// Register a player session and return its key
    async fn create_player(&self, name: &str) -> Result<String>;

    /// Open a battle against the service AI
    async fn create_battle(&self, player_key: &str, level: Option<u32>) -> Result<Battle>;

    async fn send_command(&self, command: &PlayerCommand) -> Result<Battle>;

    async fn battle_info(&self, battle_id: u64, player_key: &str) -> Result<Battle>;

    /// Ask the service to run its pending AI turn
    async fn force_ai_action(&self, battle_id: u64) -> Result<Battle>;
}
