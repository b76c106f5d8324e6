use reqwest::{RequestBuilder, Response};
use skirmish_protocol::{Battle, Endpoint, Method, ParseError, PlayerCommand, parse_battle};

use crate::api::BattleApi;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// [`BattleApi`] over the service's REST surface
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.url(endpoint);
        let builder = match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };

        let query = endpoint.query();
        if query.is_empty() {
            builder
        } else {
            builder.query(&query)
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "Request rejected");
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response)
    }

    async fn fetch_battle(&self, builder: RequestBuilder) -> Result<Battle> {
        let body = self.send(builder).await?.text().await?;
        Ok(parse_battle(&body)?)
    }
}

impl BattleApi for HttpApi {
    async fn create_player(&self, name: &str) -> Result<String> {
        let endpoint = Endpoint::CreatePlayer {
            name: name.to_string(),
        };
        let body = self.send(self.request(&endpoint)).await?.text().await?;

        let key = body.trim();
        if key.is_empty() {
            return Err(ParseError::EmptyPayload.into());
        }
        Ok(key.to_string())
    }

    async fn create_battle(&self, player_key: &str, level: Option<u32>) -> Result<Battle> {
        // The body is the bare key, JSON-encoded as a string
        let builder = self
            .request(&Endpoint::CreateBattle { level })
            .json(player_key);
        self.fetch_battle(builder).await
    }

    async fn send_command(&self, command: &PlayerCommand) -> Result<Battle> {
        let builder = self.request(&Endpoint::Command).json(command);
        self.fetch_battle(builder).await
    }

    async fn battle_info(&self, battle_id: u64, player_key: &str) -> Result<Battle> {
        let endpoint = Endpoint::BattleInfo {
            battle_id,
            player_key: player_key.to_string(),
        };
        self.fetch_battle(self.request(&endpoint)).await
    }

    async fn force_ai_action(&self, battle_id: u64) -> Result<Battle> {
        self.fetch_battle(self.request(&Endpoint::ForceAction { battle_id }))
            .await
    }
}
