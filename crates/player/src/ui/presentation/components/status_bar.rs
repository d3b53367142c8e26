//! Status Bar - labeled proportional bar, clickable to edit

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatusBarProps {
    pub current: i32,
    pub max: i32,
    pub label: String,
    /// Fill color
    pub primary_color: &'static str,
    /// Track color
    pub secondary_color: &'static str,
    pub on_click: EventHandler<()>,
}

#[component]
pub fn StatusBar(props: StatusBarProps) -> Element {
    let percent = fill_percent(props.current, props.max);

    rsx! {
        div {
            class: "status-bar",
            style: "background-color: {props.secondary_color};",
            onclick: move |_| props.on_click.call(()),

            div {
                class: "status-bar-fill",
                style: "width: {percent}%; background-color: {props.primary_color};",
            }

            span {
                class: "status-bar-label",
                "{props.label}"
            }
        }
    }
}

/// Fill percentage, saturated to 0..=100. A non-positive maximum renders
/// an empty bar instead of dividing by zero.
fn fill_percent(current: i32, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    let ratio = f64::from(current.max(0)) / f64::from(max);
    (ratio * 100.0).round().clamp(0.0, 100.0) as i32
}
