use yew::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::Config;
use crate::pages::roster::RosterPage;

pub mod api;
pub mod components;
pub mod config;
pub mod roster;
pub mod pages {
    pub mod roster;
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <div class="app-container">
            <RosterPage config={Config::default()} />
        </div>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    info!("Mounting roster application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
