use api::Collection;
use dioxus::prelude::*;

use ui::views::{CollectionListView, RecordDetailView};

use crate::Route;

#[component]
pub fn CollectionList(collection: Collection) -> Element {
    let nav = use_navigator();
    rsx! {
        CollectionListView {
            collection,
            on_open: move |id: String| {
                nav.push(Route::RecordDetail { collection, id });
            },
        }
    }
}

#[component]
pub fn RecordDetail(collection: Collection, id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        RecordDetailView {
            collection,
            id,
            on_back: move |_| {
                nav.push(Route::CollectionList { collection });
            },
        }
    }
}
