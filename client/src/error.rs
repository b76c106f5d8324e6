use skirmish_protocol::{BattleState, ParseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-success status
    #[error("API Error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] ParseError),

    #[error("No battle in progress")]
    NoBattle,

    #[error("Battle is not waiting for {expected} (state {state})")]
    UnexpectedState {
        expected: &'static str,
        state: BattleState,
    },

    #[error("No active creature on the field")]
    NoActivePokemon,

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("No PP left for {0}")]
    NoPp(String),

    #[error("Cannot switch to {0}")]
    InvalidSwitch(String),
}

impl Error {
    /// Errors raised before any request was sent
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Error::Status { .. } | Error::Http(_) | Error::Decode(_))
    }
}
