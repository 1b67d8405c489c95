use js_sys::Array;
use log::error;
use shared::NewPlayerInput;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};
use yew::events::SubmitEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewPlayerFormProps {
    pub on_submit: Callback<NewPlayerInput>,
}

/// Every `(name, value)` pair the browser would submit for `form`.
/// Non-string values (file inputs) are skipped.
pub fn form_entries(form: &HtmlFormElement) -> Result<Vec<(String, String)>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let iter = js_sys::try_iter(&data)?.ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut entries = Vec::new();
    for entry in iter {
        let pair: Array = entry?.dyn_into()?;
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((name, value));
        }
    }
    Ok(entries)
}

pub fn read_form(form: &HtmlFormElement) -> Result<NewPlayerInput, JsValue> {
    form_entries(form).map(NewPlayerInput::from_entries)
}

#[function_component(NewPlayerForm)]
pub fn new_player_form(props: &NewPlayerFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            match read_form(&form) {
                Ok(input) => on_submit.emit(input),
                Err(err) => error!("Could not read the new player form: {:?}", err),
            }
        })
    };

    html! {
        <form id="new-player-form" {onsubmit}>
            <label for="name">{"Name:"}</label>
            <input type="text" id="name" name="name" placeholder="Enter Name" required=true />
            <label for="breed">{"Breed:"}</label>
            <input type="text" id="breed" name="breed" placeholder="Enter Breed" required=true />
            <label for="status">{"Status:"}</label>
            <select name="status" id="status">
                <option value="Field">{"Field"}</option>
                <option value="Bench">{"Bench"}</option>
            </select>
            <label for="image_url">{"Image URL:"}</label>
            <input type="text" id="image_url" name="image_url" placeholder="Enter Image URL" required=true />
            <label for="teamID">{"Team ID:"}</label>
            <input type="number" id="teamID" name="teamID" placeholder="Enter teamID" required=true />
            <label for="details">{"Details:"}</label>
            <textarea id="details" name="details" placeholder="Enter Details"></textarea>
            <button type="submit">{"Create"}</button>
        </form>
    }
}
