use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    /// Optional section heading
    #[props(default)]
    pub title: Option<String>,
    pub children: Element,
}

/// Card-style content section
#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section {
            class: "card",

            if let Some(title) = props.title.as_ref() {
                h2 { class: "card-title", "{title}" }
            }

            {props.children}
        }
    }
}
