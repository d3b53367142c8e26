//! Sheet route - loads a character and renders the sheet page
//!
//! The loader runs before the page is produced; while it is in flight the
//! route shows a placeholder. The id parameter stays a string on purpose:
//! deciding what counts as a valid id is the loader's job, and anything
//! invalid renders the same not-found body as a missing record.

use dioxus::prelude::*;

use crate::presentation::use_sheet_loader;
use crate::presentation::views::SheetView;

#[component]
pub fn SheetRoute(id: String) -> Element {
    let loader = use_sheet_loader();

    // Re-runs whenever the id parameter changes, replacing the snapshot
    // wholesale even though this component instance is reused.
    let sheet = use_resource(use_reactive((&id,), move |(id,)| {
        let loader = loader.clone();
        async move {
            let result = loader.load(&id).await;
            if let Err(e) = &result {
                tracing::error!("failed to load character sheet: {e}");
            }
            result
        }
    }));

    match sheet.read_unchecked().as_ref() {
        None => rsx! {
            div { class: "page-status", "Carregando..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "page-status page-status-error", "Erro ao carregar a ficha." }
        },
        Some(Ok(props)) => rsx! {
            SheetView { raw_character: props.raw_character.clone() }
        },
    }
}
