use shared::Player;
use yew::prelude::*;

use crate::components::player_card::PlayerCard;

#[derive(Properties, PartialEq)]
pub struct PlayerListProps {
    pub players: Vec<Player>,
    pub on_remove: Callback<i64>,
    pub on_details: Callback<i64>,
}

#[function_component(PlayerList)]
pub fn player_list(props: &PlayerListProps) -> Html {
    html! {
        <div class="player-list">
            {for props.players.iter().map(|player| html! {
                <PlayerCard
                    key={player.id}
                    player={player.clone()}
                    on_remove={props.on_remove.clone()}
                    on_details={props.on_details.clone()}
                />
            })}
        </div>
    }
}
