use std::time::Duration;

/// Default address of a locally running battle service
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// How hard the session pushes a battle out of `PROCESSING`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingPolicy {
    /// Force-action rounds before giving up on one ply
    pub max_rounds: usize,
    /// Pause between two rounds
    pub poll_interval: Duration,
}

impl Default for ProcessingPolicy {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            poll_interval: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Name registered for every new player session
    pub player_name: String,
    pub processing: ProcessingPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            processing: ProcessingPolicy::default(),
        }
    }
}
