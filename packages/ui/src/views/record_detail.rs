use api::{resolve_image_url, Collection, DetailPhase};
use dioxus::prelude::*;

use crate::avatar::Avatar;
use crate::client::make_client;
use crate::fetch::use_fetch_for;
use crate::icons::FaArrowLeft;
use crate::status::{EmptyState, ErrorPanel, LoadingIndicator};
use crate::Icon;

/// Full view of one record, looked up by the route key.
#[component]
pub fn RecordDetailView(collection: Collection, id: String, on_back: EventHandler<()>) -> Element {
    let client = use_hook(make_client);
    let config = client.config().clone();

    let record = use_fetch_for((collection, id), move |(collection, id)| {
        let id = id.trim().to_string();
        if id.is_empty() {
            return None;
        }
        let client = client.clone();
        Some(async move { client.detail(collection, &id).await })
    });

    let state = record.state();
    let body = match state.detail_phase() {
        DetailPhase::Loading => rsx! {
            LoadingIndicator {}
        },
        DetailPhase::Error(err) => rsx! {
            ErrorPanel { message: err.user_message(), on_retry: move |_| record.retry() }
        },
        DetailPhase::NotFound => rsx! {
            EmptyState { message: format!("This {} could not be found.", collection.singular()) }
        },
        DetailPhase::Loaded(found) => {
            let name = found.display_name().to_string();
            let image = resolve_image_url(&config, found.photo.as_deref());
            let facts = [
                ("Area of focus", found.area_of_focus.clone()),
                ("Role", found.role.clone()),
                ("Date", found.date.clone()),
                ("Location", found.location.clone()),
            ];
            rsx! {
                article {
                    class: "record-detail",
                    Avatar { name: name.clone(), src: image, size: "lg" }
                    div {
                        class: "record-detail__body",
                        h1 { "{name}" }
                        dl {
                            for (label, value) in facts {
                                if let Some(value) = value {
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        }
                        if let Some(website) = found.website.clone() {
                            a { href: "{website}", target: "_blank", rel: "noopener", "{website}" }
                        }
                        if let Some(text) = found.description() {
                            div { class: "record-detail__text", dangerous_inner_html: "{text}" }
                        }
                    }
                }
            }
        }
    };

    let back_label = format!("Back to {}", collection.title());
    rsx! {
        section {
            class: "detail-page",
            button {
                class: "btn btn--link",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                "{back_label}"
            }
            {body}
        }
    }
}
