use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use shared::{ApiError, NewPlayerInput, PlayerDetailResponse, PlayerListResponse, Result};

use crate::api::utils::{ensure_ok, json_delete, json_get, json_post, read_json, transport_error};
use crate::api::RosterApi;
use crate::config::Config;

/// `RosterApi` over the browser's fetch
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRosterApi {
    config: Config,
}

impl HttpRosterApi {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait(?Send)]
impl RosterApi for HttpRosterApi {
    async fn list_players(&self) -> Result<PlayerListResponse> {
        let url = self.config.players_url();
        debug!("Fetching all players from {}", url);

        let response = json_get(&url).send().await.map_err(transport_error)?;
        let response = ensure_ok(response).await?;
        let players: PlayerListResponse = read_json(response).await?;

        debug!(
            "Fetched {} players",
            players.data.as_ref().map(|d| d.players.len()).unwrap_or(0)
        );
        Ok(players)
    }

    async fn get_player(&self, id: i64) -> Result<PlayerDetailResponse> {
        let url = self.config.player_url(id);
        debug!("Fetching player #{}", id);

        let response = json_get(&url).send().await.map_err(transport_error)?;
        let response = ensure_ok(response).await?;
        read_json(response).await
    }

    async fn create_player(&self, input: &NewPlayerInput) -> Result<Value> {
        debug!("Creating player with {} fields", input.len());

        let response = json_post(&self.config.players_url())
            .json(input)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_ok(response).await?;
        read_json(response).await
    }

    async fn delete_player(&self, id: i64) -> Result<()> {
        debug!("Deleting player #{}", id);

        let response = json_delete(&self.config.player_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        ensure_ok(response).await?;
        Ok(())
    }
}
