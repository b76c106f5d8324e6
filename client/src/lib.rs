mod api;
mod config;
mod error;
mod http;
mod screen;
mod session;

#[cfg(test)]
mod testing;

pub use api::BattleApi;
pub use config::{ClientConfig, DEFAULT_PLAYER_NAME, DEFAULT_SERVER_URL, ProcessingPolicy};
pub use error::{Error, Result};
pub use http::HttpApi;
pub use screen::{Awaiting, Screen};
pub use session::BattleSession;

pub use skirmish_battle::Outcome;
pub use skirmish_protocol::{Battle, BattleState, PlayerCommand};

/// Session talking to the battle service over HTTP
pub type HttpSession = BattleSession<HttpApi>;

/// Build an HTTP-backed session from `config`
pub fn connect(config: ClientConfig) -> Result<HttpSession> {
    let api = HttpApi::new(&config)?;
    tracing::debug!(base_url = api.base_url(), "Using battle service");
    Ok(BattleSession::new(api, config))
}
