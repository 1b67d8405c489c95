pub mod dto {
    pub mod common;
    pub mod player;
}

pub mod error;

// Re-export commonly used items
pub use error::{ApiError, Result};

// Re-export DTOs
pub use dto::{
    common::{error_message, ApiEnvelope},
    player::{
        NewPlayerInput, Player, PlayerDetail, PlayerDetailResponse, PlayerList,
        PlayerListResponse,
    },
};
