use std::time::Duration;

use clap::Parser;
use skirmish_client::{ClientConfig, DEFAULT_PLAYER_NAME, DEFAULT_SERVER_URL, ProcessingPolicy};

/// Highest level the service accepts for a new battle
pub const MAX_LEVEL: u32 = 100;

#[derive(Debug, Parser)]
#[command(
    name = "skirmish",
    version,
    about = "Play creature battles against the skirmish battle service"
)]
pub struct Args {
    /// Base URL of the battle service
    #[arg(long, env = "SKIRMISH_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Name registered for the player session
    #[arg(long, env = "SKIRMISH_PLAYER", default_value = DEFAULT_PLAYER_NAME)]
    pub name: String,

    /// Level of both teams; the service picks one when omitted
    #[arg(long, env = "SKIRMISH_LEVEL", value_parser = clap::value_parser!(u32).range(1..=MAX_LEVEL as i64))]
    pub level: Option<u32>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Force-action rounds spent on one pending AI turn
    #[arg(long, default_value_t = 5)]
    pub max_processing_rounds: usize,

    /// Pause between two force-action rounds in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub poll_interval_ms: u64,

    /// Play random legal choices instead of reading commands
    #[arg(long)]
    pub auto: bool,

    /// Battles to play in auto mode
    #[arg(long, default_value_t = 1)]
    pub games: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.server.clone(),
            request_timeout: Duration::from_millis(self.timeout_ms),
            player_name: self.name.clone(),
            processing: ProcessingPolicy {
                max_rounds: self.max_processing_rounds,
                poll_interval: Duration::from_millis(self.poll_interval_ms),
            },
        }
    }
}
