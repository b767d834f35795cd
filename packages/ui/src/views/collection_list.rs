use api::{Collection, FetchState};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::fetch::use_fetch_for;
use crate::record_card::{card_entries, empty_message, RecordGrid};
use crate::search_bar::SearchBar;
use crate::status::{EmptyState, ErrorPanel, LoadingIndicator};

/// Searchable card listing of one collection.
#[component]
pub fn CollectionListView(
    collection: Collection,
    /// Called with the route key of the clicked record.
    on_open: EventHandler<String>,
) -> Element {
    let client = use_hook(make_client);
    let config = client.config().clone();
    // The search term belongs to the collection it was typed in
    let mut search = use_signal(|| (collection, String::new()));
    let term = move || {
        let search = search.read();
        if search.0 == collection {
            search.1.clone()
        } else {
            String::new()
        }
    };

    let records = use_fetch_for(collection, move |collection| {
        let client = client.clone();
        Some(async move { client.list(collection).await })
    });

    let plural = collection.plural();
    let title = collection.title();
    let body = match records.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            LoadingIndicator { label: "Loading {plural}..." }
        },
        FetchState::Failed(err) => rsx! {
            ErrorPanel { message: err.user_message(), on_retry: move |_| records.retry() }
        },
        FetchState::Loaded(list) => {
            let entries = card_entries(&config, collection, &list, &term());
            if entries.is_empty() {
                rsx! {
                    EmptyState { message: empty_message(collection, &term()) }
                }
            } else {
                rsx! {
                    RecordGrid { entries, on_open }
                }
            }
        }
    };

    rsx! {
        section {
            class: "collection-list",
            header {
                class: "page-header",
                h1 { "{title}" }
                SearchBar {
                    value: term(),
                    placeholder: "Search {plural}...",
                    on_input: move |value| search.set((collection, value)),
                }
            }
            {body}
        }
    }
}
