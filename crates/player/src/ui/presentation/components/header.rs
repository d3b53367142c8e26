use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub title: String,
}

/// Page header with the sheet title
#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        header {
            class: "page-header",
            h1 { class: "page-title", "{props.title}" }
        }
    }
}
