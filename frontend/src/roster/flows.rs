use log::{error, info};
use shared::{ApiError, NewPlayerInput, Player};

use crate::api::RosterApi;
use crate::roster::state::RosterAction;

async fn fetch_players<A: RosterApi + ?Sized>(api: &A) -> Vec<Player> {
    match api.list_players().await.and_then(|r| r.into_data()) {
        Ok(list) => {
            info!("Loaded {} players", list.players.len());
            list.players
        }
        Err(e) => {
            error!("Uh oh, trouble fetching players! {}", e);
            Vec::new()
        }
    }
}

/// Startup: load the roster and render a fresh form. A failed load still
/// lands on an empty list.
pub async fn initialize<A: RosterApi + ?Sized>(api: &A) -> RosterAction {
    RosterAction::Initialized(fetch_players(api).await)
}

/// "Back" from the detail view re-runs startup.
pub async fn go_back<A: RosterApi + ?Sized>(api: &A) -> RosterAction {
    initialize(api).await
}

pub async fn open_detail<A: RosterApi + ?Sized>(api: &A, id: i64) -> Option<RosterAction> {
    match api.get_player(id).await.and_then(|r| r.into_data()) {
        Ok(detail) => Some(RosterAction::ShowDetail(detail.player)),
        Err(e) => {
            error!("Oh no, trouble fetching player #{}! {}", id, e);
            None
        }
    }
}

/// Deletes, then reloads the list once. The reload happens whatever status
/// the server answered with; only a request that never got an answer leaves
/// the screen as it was.
pub async fn remove<A: RosterApi + ?Sized>(api: &A, id: i64) -> Option<RosterAction> {
    match api.delete_player(id).await {
        Ok(()) => info!("Removed player #{}", id),
        Err(e @ ApiError::Transport(_)) => {
            error!("Whoops, trouble removing player #{} from the roster! {}", id, e);
            return None;
        }
        Err(e) => error!("Server refused to remove player #{}: {}", id, e),
    }
    Some(RosterAction::ShowList(fetch_players(api).await))
}

pub async fn submit_new_player<A: RosterApi + ?Sized>(
    api: &A,
    input: &NewPlayerInput,
    refresh_after_create: bool,
) -> Option<RosterAction> {
    match api.create_player(input).await {
        Ok(result) => info!("Created player: {}", result),
        Err(e) => {
            error!("Oops, something went wrong with adding that player! {}", e);
            return None;
        }
    }

    if refresh_after_create {
        Some(RosterAction::ShowList(fetch_players(api).await))
    } else {
        None
    }
}
