use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        div {
            class: "app-root",
            Router::<routes::Route> {}
        }
    }
}
