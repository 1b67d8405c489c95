#![cfg(target_arch = "wasm32")]

use frontend::components::new_player_form::read_form;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlFormElement;

wasm_bindgen_test_configure!(run_in_browser);

fn build_form(inner_html: &str) -> HtmlFormElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_inner_html(inner_html);
    form
}

#[wasm_bindgen_test]
fn test_read_form_collects_every_named_field() {
    let form = build_form(
        r#"
        <input name="name" value="Biscuit" />
        <input name="breed" value="Beagle" />
        <select name="status"><option value="Field">Field</option><option value="Bench" selected>Bench</option></select>
        <input name="image_url" value="http://example.com/b.png" />
        <input type="number" name="teamID" value="12" />
        <textarea name="details">Good dog</textarea>
        <button type="submit">Create</button>
        "#,
    );

    let input = read_form(&form).unwrap();
    assert_eq!(
        input.names().collect::<Vec<_>>(),
        vec!["name", "breed", "status", "image_url", "teamID", "details"]
    );
    assert_eq!(input.get("status"), Some("Bench"));
    assert_eq!(input.get("teamID"), Some("12"));
    assert_eq!(input.get("details"), Some("Good dog"));
}

#[wasm_bindgen_test]
fn test_read_form_skips_unnamed_inputs() {
    let form = build_form(r#"<input value="ignored" /><input name="name" value="Rex" />"#);

    let input = read_form(&form).unwrap();
    assert_eq!(input.len(), 1);
    assert_eq!(input.get("name"), Some("Rex"));
}
