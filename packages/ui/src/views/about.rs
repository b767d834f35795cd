use api::{FetchState, SectionBody};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::fetch::use_fetch;
use crate::status::{EmptyState, ErrorPanel, LoadingIndicator};

/// "Our Story": the about sections in their fixed order.
#[component]
pub fn AboutView() -> Element {
    let client = use_hook(make_client);
    let about = use_fetch(move || {
        let client = client.clone();
        Some(async move { client.about().await })
    });

    let body = match about.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            LoadingIndicator {}
        },
        FetchState::Failed(err) => rsx! {
            ErrorPanel { message: err.user_message(), on_retry: move |_| about.retry() }
        },
        FetchState::Loaded(content) if content.is_empty() => rsx! {
            EmptyState { message: "Our story is coming soon." }
        },
        FetchState::Loaded(content) => rsx! {
            for part in content.sections {
                section {
                    key: "{part.key}",
                    class: "about-section",
                    h2 { "{part.title}" }
                    {section_body(part.title, part.body)}
                }
            }
        },
    };

    rsx! {
        section {
            class: "about-page",
            h1 { "Our Story" }
            {body}
        }
    }
}

fn section_body(title: &str, body: SectionBody) -> Element {
    match body {
        SectionBody::Text(text) => rsx! {
            div { class: "about-section__text", dangerous_inner_html: "{text}" }
        },
        SectionBody::Image(url) => rsx! {
            img { class: "about-section__image", src: "{url}", alt: "{title}" }
        },
    }
}
