pub mod players;
pub mod utils;

use async_trait::async_trait;
use serde_json::Value;
use shared::{NewPlayerInput, PlayerDetailResponse, PlayerListResponse, Result};

pub use players::HttpRosterApi;

/// The four roster endpoints. Each call is a single attempt; failures are
/// handed back to the caller untouched.
#[async_trait(?Send)]
pub trait RosterApi {
    /// `GET players/`
    async fn list_players(&self) -> Result<PlayerListResponse>;

    /// `GET players/{id}`
    async fn get_player(&self, id: i64) -> Result<PlayerDetailResponse>;

    /// `POST players/`; the response shape is not relied on
    async fn create_player(&self, input: &NewPlayerInput) -> Result<Value>;

    /// `DELETE players/{id}`; the response body is ignored
    async fn delete_player(&self, id: i64) -> Result<()>;
}
