use shared::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerDetailProps {
    pub player: Player,
    pub on_back: Callback<()>,
    pub on_remove: Callback<i64>,
}

/// A `null` id shows as an empty string rather than the word `null`.
fn optional_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[function_component(PlayerDetail)]
pub fn player_detail(props: &PlayerDetailProps) -> Html {
    let player = &props.player;
    let id = player.id;

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let on_remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    html! {
        <div class="player-detail">
            <img src={player.image_url.clone()} alt={player.name.clone()} />
            <h2>{&player.name}</h2>
            <p>{format!("Breed: {}", player.breed)}</p>
            <p>{format!("Status: {}", player.status)}</p>
            <p>{format!("Team ID: {}", optional_text(player.team_id))}</p>
            <p>{format!("Cohort ID: {}", optional_text(player.cohort_id))}</p>
            <button class="Back-button" onclick={on_back}>{"Back"}</button>
            <button class="delete-button" data-id={id.to_string()} onclick={on_remove}>{"Remove"}</button>
        </div>
    }
}
