use dioxus::prelude::*;

use ui::views::{AboutView, HomeView};
use ui::ContactFormPanel;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_open: move |collection| {
                nav.push(Route::CollectionList { collection });
            },
        }
    }
}

#[component]
pub fn OurStory() -> Element {
    rsx! {
        AboutView {}
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            class: "contact-page",
            h1 { "Contact us" }
            p { "Questions, ideas or partnership requests: send us a message." }
            ContactFormPanel {}
        }
    }
}
