//! Loading and failure placeholders shared by every fetching view.

use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaRotateRight};
use crate::Icon;

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "status status--loading",
            role: "status",
            span { class: "spinner" }
            "{label}"
        }
    }
}

/// A failed fetch, with a "Try again" action when `on_retry` is set.
#[component]
pub fn ErrorPanel(message: String, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "status status--error",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
            p { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn--secondary",
                    onclick: move |_| on_retry.call(()),
                    Icon { icon: FaRotateRight, width: 12, height: 12 }
                    "Try again"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "status status--empty", p { "{message}" } }
    }
}
