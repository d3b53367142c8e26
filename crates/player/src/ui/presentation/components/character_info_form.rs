//! Character Info Form - edit the character's personal details
//!
//! Seeded from the full view model and submitted verbatim as a partial
//! update. A successful submit does NOT touch the view model: persisted
//! personal details are picked up on the next reload. Failures surface
//! inline and are logged.

use dioxus::prelude::*;
use serde_json::Value;

use fichas_shared::{Character, UpdateDetailsRequest};

use crate::presentation::use_character_service;

#[derive(Props, Clone, PartialEq)]
pub struct CharacterInfoFormProps {
    /// Initial values: the full view model
    pub character: Character,
}

#[component]
pub fn CharacterInfoForm(props: CharacterInfoFormProps) -> Element {
    let character_service = use_character_service();

    // Form state. Seeded once per mount; the parent keys this component
    // by character id, so navigating to another character remounts it
    // with fresh initial values while in-progress edits survive
    // unrelated re-renders.
    let mut name = use_signal(|| props.character.name.clone());
    let mut details = use_signal(|| props.character.details.clone());
    let mut is_saving = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut saved = use_signal(|| false);

    let save = move |_| {
        if *is_saving.read() {
            return;
        }

        let name_val = name.read().trim().to_string();
        if name_val.is_empty() {
            error_message.set(Some("O nome é obrigatório".to_string()));
            return;
        }

        let request = UpdateDetailsRequest {
            name: name_val,
            details: details.read().clone(),
        };
        let svc = character_service.clone();
        let character_id = props.character.id;

        is_saving.set(true);
        error_message.set(None);
        saved.set(false);

        spawn(async move {
            match svc.update_details(character_id, &request).await {
                Ok(()) => {
                    // No local merge: the reload is the confirmation path.
                    saved.set(true);
                    is_saving.set(false);
                }
                Err(e) => {
                    tracing::error!("failed to update character details: {e}");
                    error_message.set(Some(e.to_string()));
                    is_saving.set(false);
                }
            }
        });
    };

    // Snapshot of the opaque fields for rendering; string-valued fields
    // are editable, everything else is shown as-is and passed through.
    let entries: Vec<(String, Value)> = details
        .read()
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    rsx! {
        div {
            class: "info-form",

            if let Some(err) = error_message.read().as_ref() {
                div { class: "form-error", "{err}" }
            }
            if *saved.read() {
                div { class: "form-success", "Detalhes salvos." }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Nome" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                    class: "form-input",
                }
            }

            for (field, value) in entries {
                {
                    let field_name = field.clone();
                    rsx! {
                        div {
                            key: "{field}",
                            class: "form-field",
                            label { class: "form-label", "{field}" }

                            if let Value::String(text) = value.clone() {
                                input {
                                    r#type: "text",
                                    value: "{text}",
                                    oninput: move |e| {
                                        details.write().insert(field_name.clone(), Value::String(e.value()));
                                    },
                                    class: "form-input",
                                }
                            } else {
                                span { class: "form-static", "{value}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    onclick: save,
                    disabled: *is_saving.read(),
                    class: "btn btn-primary",
                    if *is_saving.read() {
                        "Salvando..."
                    } else {
                        "Salvar"
                    }
                }
            }
        }
    }
}
