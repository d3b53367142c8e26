//! Sheet View - the character sheet page shell
//!
//! Declarative composition only: title, two-column layout with the
//! personal-details form on one side and portrait + life bar on the
//! other, plus the on-demand hit-points modal. The single branch point
//! is the absent character, which renders the not-found body and
//! nothing else.

use dioxus::prelude::*;

use fichas_shared::{Character, UpdateHitPointsRequest};

use crate::presentation::components::{
    CharacterInfoForm, Header, Section, StatusBar, StatusBarModal,
};
use crate::presentation::state::SheetState;
use crate::presentation::theme;
use crate::state::Platform;

#[derive(Props, Clone, PartialEq)]
pub struct SheetViewProps {
    /// Snapshot produced by the page loader; `None` renders not-found
    pub raw_character: Option<Character>,
}

#[component]
pub fn SheetView(props: SheetViewProps) -> Element {
    let platform = use_context::<Platform>();
    let mut state = use_signal(|| SheetState::new(props.raw_character.clone()));
    let mut show_hit_points_modal = use_signal(|| false);

    // Wholesale resync whenever the upstream snapshot changes identity.
    // The component instance is reused across navigations, so a stale
    // view model must never survive a new snapshot.
    use_effect(use_reactive(
        (&props.raw_character,),
        move |(snapshot,)| {
            state.write().resync(snapshot);
        },
    ));

    // Keep the page title in sync with the rendered character.
    {
        let platform = platform.clone();
        use_effect(move || {
            if let Some(character) = state.read().character() {
                platform.set_page_title(&format!("Ficha de {} | RPG", character.name));
            }
        });
    }

    let character = state.read().character().cloned();
    let Some(character) = character else {
        return rsx! {
            div { class: "page-status", "Personagem não existe!" }
        };
    };

    let initial = character
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "sheet container",

            Header { title: "Ficha de {character.name}" }

            div {
                class: "sheet-columns",

                Section {
                    title: "Detalhes pessoais",

                    CharacterInfoForm {
                        key: "{character.id}",
                        character: character.clone(),
                    }
                }

                Section {
                    div {
                        class: "portrait",
                        span { class: "portrait-initial", "{initial}" }
                    }

                    div {
                        class: "bar-block",

                        div { class: "bar-title", "Vida" }

                        StatusBar {
                            current: character.current_hit_points,
                            max: character.max_hit_points,
                            label: "{character.current_hit_points}/{character.max_hit_points}",
                            primary_color: theme::LIFE.primary,
                            secondary_color: theme::LIFE.secondary,
                            on_click: move |_| show_hit_points_modal.set(true),
                        }
                    }
                }
            }

            if *show_hit_points_modal.read() {
                StatusBarModal {
                    character_id: character.id,
                    current: character.current_hit_points,
                    max: character.max_hit_points,
                    on_saved: move |update: UpdateHitPointsRequest| {
                        state.write().merge_hit_points(&update);
                    },
                    on_close: move |_| show_hit_points_modal.set(false),
                }
            }
        }
    }
}
