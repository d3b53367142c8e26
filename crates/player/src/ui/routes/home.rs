//! Home route - entry screen that opens a sheet by id

use dioxus::prelude::*;

use super::Route;

#[component]
pub fn HomeRoute() -> Element {
    let navigator = use_navigator();
    let mut character_id = use_signal(String::new);

    let open = move |_| {
        let id = character_id.read().trim().to_string();
        if id.is_empty() {
            return;
        }
        navigator.push(Route::SheetRoute { id });
    };

    rsx! {
        div {
            class: "home",

            h1 { class: "home-title", "RPG" }
            p { class: "home-hint", "Informe o número da ficha para abrir." }

            div {
                class: "home-form",

                input {
                    r#type: "text",
                    value: "{character_id}",
                    oninput: move |e| character_id.set(e.value()),
                    placeholder: "Id do personagem",
                    class: "form-input",
                }

                button {
                    onclick: open,
                    class: "btn btn-primary",
                    "Abrir ficha"
                }
            }
        }
    }
}
