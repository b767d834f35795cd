//! Admin dashboard: record counts, collection management and the record editor.
//!
//! Every mutation carries the session token as a bearer credential. A 401 from
//! the backend ends the session; the admin layout then sends the user to the
//! login page.

use api::{ApiError, Collection, FetchState, RecordDraft};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::fetch::{use_fetch, use_fetch_for};
use crate::icons::FaRightFromBracket;
use crate::record_card::{card_entries, empty_message, RecordGrid};
use crate::rich_text::RichTextField;
use crate::search_bar::SearchBar;
use crate::session::{use_session, Session};
use crate::status::{EmptyState, ErrorPanel, LoadingIndicator};
use crate::Icon;

/// Turn a failed admin call into a notice, ending the session on a 401.
fn admin_failure(session: Session, action: &str, err: &ApiError) -> String {
    if err.is_unauthorized() {
        tracing::warn!("Admin token rejected while trying to {}", action);
        session.logout();
        return "Your session has expired. Please sign in again.".to_string();
    }
    tracing::error!("Failed to {}: {}", action, err);
    format!("Could not {action}: {}", err.user_message())
}

/// Header bar for admin pages, with the logout button.
#[component]
pub fn AdminHeader(on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    rsx! {
        header {
            class: "admin-header",
            h1 { "Site administration" }
            button {
                class: "btn btn--secondary",
                onclick: move |_| {
                    session.logout();
                    on_logout.call(());
                },
                Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                "Log out"
            }
        }
    }
}

/// One tile per collection with its current record count.
#[component]
pub fn AdminDashboardView(on_open: EventHandler<Collection>) -> Element {
    rsx! {
        section {
            class: "tile-grid",
            for collection in Collection::ALL {
                CountTile { key: "{collection}", collection, on_open }
            }
        }
    }
}

#[component]
fn CountTile(collection: Collection, on_open: EventHandler<Collection>) -> Element {
    let client = use_hook(make_client);
    let records = use_fetch(move || {
        let client = client.clone();
        Some(async move { client.list(collection).await })
    });

    let count = match records.state() {
        FetchState::Loaded(list) => list.len().to_string(),
        FetchState::Failed(_) => "!".to_string(),
        FetchState::Idle | FetchState::Loading => "…".to_string(),
    };
    let title = collection.title();

    rsx! {
        button {
            class: "tile tile--count",
            onclick: move |_| on_open.call(collection),
            span { class: "tile__count", "{count}" }
            span { class: "tile__label", "{title}" }
        }
    }
}

/// Search, delete and create records of one collection.
#[component]
pub fn CollectionManagerView(collection: Collection, on_open: EventHandler<String>) -> Element {
    let client = use_hook(make_client);
    let config = client.config().clone();
    let session = use_session();
    // Search term and notices belong to the collection they were made in
    let mut search = use_signal(|| (collection, String::new()));
    let mut notice = use_signal(|| Option::<(Collection, String)>::None);
    let term = move || {
        let search = search.read();
        if search.0 == collection {
            search.1.clone()
        } else {
            String::new()
        }
    };
    let current_notice = move || {
        notice
            .read()
            .as_ref()
            .filter(|(shown_for, _)| *shown_for == collection)
            .map(|(_, message)| message.clone())
    };

    let list_client = client.clone();
    let records = use_fetch_for(collection, move |collection| {
        let client = list_client.clone();
        Some(async move { client.list(collection).await })
    });

    let delete_client = client.clone();
    let on_delete = move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            let Some(token) = session.token() else {
                session.logout();
                return;
            };
            match client.delete_record(collection, &id, &token).await {
                Ok(()) => {
                    tracing::info!("Deleted {} {}", collection.singular(), id);
                    let message = format!("Deleted {} {id}", collection.singular());
                    notice.set(Some((collection, message)));
                    records.retry();
                }
                Err(err) => {
                    let action = format!("delete {} {id}", collection.singular());
                    notice.set(Some((collection, admin_failure(session, &action, &err))));
                }
            }
        });
    };

    let plural = collection.plural();
    let title = collection.title();
    let body = match records.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            LoadingIndicator {}
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
                    RecordGrid { entries, on_open, on_delete }
                }
            }
        }
    };

    rsx! {
        section {
            class: "collection-manager",
            header {
                class: "page-header",
                h2 { "{title}" }
                SearchBar {
                    value: term(),
                    placeholder: "Search {plural}...",
                    on_input: move |value| search.set((collection, value)),
                }
            }
            if let Some(message) = current_notice() {
                p { class: "form-status", role: "status", "{message}" }
            }
            {body}
            RecordEditor {
                collection,
                on_saved: move |_| records.retry(),
            }
        }
    }
}

/// Form for a new record: name, area of focus, photo URL and a rich-text bio.
#[component]
pub fn RecordEditor(collection: Collection, on_saved: EventHandler<()>) -> Element {
    let client = use_hook(make_client);
    let session = use_session();
    let mut draft = use_signal(RecordDraft::default);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if saving() {
                return;
            }
            let current = draft.peek().clone();
            if let Err(err) = current.validate() {
                notice.set(Some((true, err.user_message())));
                return;
            }
            let Some(token) = session.token() else {
                session.logout();
                return;
            };
            saving.set(true);
            let result = client.create_record(collection, &current, &token).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Created {} {}", collection.singular(), current.name);
                    draft.write().clear();
                    notice.set(Some((false, format!("Added {}", current.name))));
                    on_saved.call(());
                }
                Err(err) => {
                    let action = format!("add {}", collection.singular());
                    notice.set(Some((true, admin_failure(session, &action, &err))));
                }
            }
        }
    };

    let heading = format!("Add {}", collection.singular());
    let text_input = move |label: &'static str, value: String, set: fn(&mut RecordDraft, String)| {
        rsx! {
            label {
                class: "form-field",
                span { "{label}" }
                input {
                    r#type: "text",
                    value,
                    oninput: move |evt: FormEvent| set(&mut *draft.write(), evt.value()),
                }
            }
        }
    };

    rsx! {
        form {
            class: "record-editor",
            onsubmit,
            h3 { "{heading}" }
            {text_input("Name", draft.read().name.clone(), |d, v| d.name = v)}
            {text_input("Area of focus", draft.read().area_of_focus.clone(), |d, v| d.area_of_focus = v)}
            {text_input("Photo URL", draft.read().photo_url.clone(), |d, v| d.photo_url = v)}
            RichTextField {
                label: "Bio",
                value: draft.read().bio.clone(),
                on_change: move |text: String| draft.write().bio = text,
            }
            if let Some((is_error, message)) = notice() {
                p {
                    class: if is_error { "form-status form-status--error" } else { "form-status" },
                    "{message}"
                }
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save" }
            }
        }
    }
}
