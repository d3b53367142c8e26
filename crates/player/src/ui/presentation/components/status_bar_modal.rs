//! Status Bar Modal - edit the character's hit points

use dioxus::prelude::*;

use fichas_shared::UpdateHitPointsRequest;

use crate::application::services::HitPointsInput;
use crate::presentation::use_character_service;
use crate::state::Platform;

/// Props for StatusBarModal
#[derive(Props, Clone, PartialEq)]
pub struct StatusBarModalProps {
    pub character_id: i64,
    pub current: i32,
    pub max: i32,
    /// Called with the confirmed payload so the parent can merge it
    pub on_saved: EventHandler<UpdateHitPointsRequest>,
    /// Called when the modal should close
    pub on_close: EventHandler<()>,
}

/// Modal editing the two hit-point fields. Closes only on a successful
/// submit; a failed submit keeps it open for retry.
#[component]
pub fn StatusBarModal(props: StatusBarModalProps) -> Element {
    let character_service = use_character_service();
    let platform = use_context::<Platform>();

    // Form state
    let mut current = use_signal(|| props.current.to_string());
    let mut max = use_signal(|| props.max.to_string());
    let mut is_saving = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let save = move |_| {
        // One submit in flight per facet
        if *is_saving.read() {
            return;
        }

        let input = HitPointsInput {
            current: current.read().clone(),
            max: max.read().clone(),
        };
        let svc = character_service.clone();
        let platform = platform.clone();
        let character_id = props.character_id;
        let on_saved = props.on_saved;
        let on_close = props.on_close;

        is_saving.set(true);
        error_message.set(None);

        spawn(async move {
            match svc.update_hit_points(character_id, &input).await {
                Ok(update) => {
                    on_saved.call(update);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("failed to update hit points: {e}");
                    platform.alert("Erro ao atualizar a vida!");
                    error_message.set(Some(e.to_string()));
                    is_saving.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "modal",
                onclick: |e| e.stop_propagation(),

                // Header
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "Vida" }
                    button {
                        onclick: move |_| props.on_close.call(()),
                        class: "modal-close",
                        "×"
                    }
                }

                // Error message
                if let Some(err) = error_message.read().as_ref() {
                    div {
                        class: "modal-error",
                        "{err}"
                    }
                }

                // Content
                div {
                    class: "modal-body",

                    div {
                        class: "form-field",
                        label { class: "form-label", "Atual" }
                        input {
                            r#type: "number",
                            value: "{current}",
                            oninput: move |e| current.set(e.value()),
                            class: "form-input",
                        }
                    }

                    div {
                        class: "form-field",
                        label { class: "form-label", "Máximo" }
                        input {
                            r#type: "number",
                            value: "{max}",
                            oninput: move |e| max.set(e.value()),
                            class: "form-input",
                        }
                    }
                }

                // Footer
                div {
                    class: "modal-footer",
                    button {
                        onclick: move |_| props.on_close.call(()),
                        class: "btn btn-secondary",
                        "Cancelar"
                    }
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
}
