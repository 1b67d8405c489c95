use shared::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
    pub on_remove: Callback<i64>,
    pub on_details: Callback<i64>,
}

/// One roster entry in the list view
#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let id = props.player.id;

    let on_remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(id))
    };

    html! {
        <div class="player-card">
            <h4>{&props.player.name}</h4>
            <img src={props.player.image_url.clone()} alt={props.player.name.clone()} />
            <p>{&props.player.breed}</p>
            <button class="delete-button" data-id={id.to_string()} onclick={on_remove}>{"Remove"}</button>
            <button class="detail-button" data-id={id.to_string()} onclick={on_details}>{"See Details"}</button>
        </div>
    }
}
