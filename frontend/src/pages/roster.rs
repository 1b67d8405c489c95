use std::future::Future;

use log::debug;
use shared::NewPlayerInput;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpRosterApi;
use crate::components::new_player_form::NewPlayerForm;
use crate::components::player_detail::PlayerDetail;
use crate::components::player_list::PlayerList;
use crate::config::Config;
use crate::roster::flows;
use crate::roster::{RosterAction, RosterState, RosterView};

#[derive(Properties, PartialEq)]
pub struct RosterPageProps {
    #[prop_or_default]
    pub config: Config,
}

/// Runs `flow` in the background and applies whatever action it settles on.
fn dispatch_when_done<F>(dispatcher: UseReducerDispatcher<RosterState>, flow: F)
where
    F: Future<Output = Option<RosterAction>> + 'static,
{
    spawn_local(async move {
        if let Some(action) = flow.await {
            dispatcher.dispatch(action);
        }
    });
}

#[function_component(RosterPage)]
pub fn roster_page(props: &RosterPageProps) -> Html {
    let api = use_memo(props.config.clone(), |config| HttpRosterApi::new(config.clone()));
    let state = use_reducer(RosterState::default);

    // Initial load
    {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            debug!("Loading roster");
            dispatch_when_done(dispatcher, async move { Some(flows::initialize(&*api).await) });
            || ()
        });
    }

    let on_remove = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |id: i64| {
            let api = api.clone();
            dispatch_when_done(dispatcher.clone(), async move { flows::remove(&*api, id).await });
        })
    };

    let on_details = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |id: i64| {
            let api = api.clone();
            dispatch_when_done(dispatcher.clone(), async move { flows::open_detail(&*api, id).await });
        })
    };

    let on_back = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let api = api.clone();
            dispatch_when_done(dispatcher.clone(), async move { Some(flows::go_back(&*api).await) });
        })
    };

    let on_submit = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |input: NewPlayerInput| {
            let api = api.clone();
            let refresh = api.config().refresh_after_create;
            dispatch_when_done(dispatcher.clone(), async move {
                flows::submit_new_player(&*api, &input, refresh).await
            });
        })
    };

    html! {
        <RosterScreen
            state={(*state).clone()}
            {on_remove}
            {on_details}
            {on_back}
            {on_submit}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct RosterScreenProps {
    pub state: RosterState,
    pub on_remove: Callback<i64>,
    pub on_details: Callback<i64>,
    pub on_back: Callback<()>,
    pub on_submit: Callback<NewPlayerInput>,
}

/// Renders a `RosterState`; holds no state of its own.
#[function_component(RosterScreen)]
pub fn roster_screen(props: &RosterScreenProps) -> Html {
    let content = match &props.state.view {
        RosterView::List(players) => html! {
            <PlayerList
                players={players.clone()}
                on_remove={props.on_remove.clone()}
                on_details={props.on_details.clone()}
            />
        },
        RosterView::Detail(player) => html! {
            <PlayerDetail
                player={player.clone()}
                on_back={props.on_back.clone()}
                on_remove={props.on_remove.clone()}
            />
        },
    };

    html! {
        <main class="roster">
            <div id="all-players-container">{content}</div>
            <div id="new-player-form-container">
                <NewPlayerForm key={props.state.form_epoch} on_submit={props.on_submit.clone()} />
            </div>
        </main>
    }
}
