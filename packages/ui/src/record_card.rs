//! Cards for collection listings.

use api::{filter_records, resolve_image_url, ApiConfig, Collection, Record};
use dioxus::prelude::*;

use crate::avatar::Avatar;
use crate::icons::FaTrash;
use crate::Icon;

/// One card's worth of data: the record, its route key, link and resolved image.
#[derive(Clone, Debug, PartialEq)]
pub struct CardEntry {
    pub key: String,
    /// Detail page path, `/{collection}/{key}`.
    pub href: String,
    pub image_url: String,
    pub record: Record,
}

impl CardEntry {
    /// The backend id, which is what admin mutations must target.
    ///
    /// `None` for records keyed by list position.
    pub fn record_id(&self) -> Option<&str> {
        self.record.id.as_deref()
    }
}

/// Filter `records` by `term` and pair each match with its route key and image.
pub fn card_entries(
    config: &ApiConfig,
    collection: Collection,
    records: &[Record],
    term: &str,
) -> Vec<CardEntry> {
    filter_records(records, term)
        .into_iter()
        .map(|(index, record)| {
            let key = record.route_key(index);
            CardEntry {
                href: format!("/{}/{}", collection.slug(), key),
                image_url: resolve_image_url(config, record.photo.as_deref()),
                record: record.clone(),
                key,
            }
        })
        .collect()
}

/// Text for a listing with nothing to show.
pub fn empty_message(collection: Collection, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        format!("No {} available yet", collection.plural())
    } else {
        format!("No {} match \"{}\"", collection.plural(), term)
    }
}

#[component]
pub fn RecordCard(
    entry: CardEntry,
    on_open: EventHandler<String>,
    /// Shows a delete button when set (admin listings), for records with an id.
    /// Called with that id.
    #[props(default)]
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let record = &entry.record;
    let name = record.display_name().to_string();
    let subtitle = record
        .area_of_focus
        .clone()
        .or_else(|| record.role.clone())
        .unwrap_or_default();
    let open_key = entry.key.clone();
    let delete_id = entry.record_id().map(str::to_string);

    rsx! {
        article {
            class: "record-card",
            a {
                class: "record-card__link",
                href: "{entry.href}",
                onclick: move |evt: MouseEvent| {
                    // Plain clicks navigate in-app; modified clicks keep the browser default
                    let modifiers = evt.modifiers();
                    if modifiers.ctrl() || modifiers.meta() || modifiers.shift() {
                        return;
                    }
                    evt.prevent_default();
                    on_open.call(open_key.clone());
                },
                Avatar { name: name.clone(), src: entry.image_url.clone() }
                div {
                    class: "record-card__body",
                    h3 { class: "record-card__title", "{name}" }
                    if !subtitle.is_empty() {
                        p { class: "record-card__subtitle", "{subtitle}" }
                    }
                }
            }
            if let (Some(on_delete), Some(id)) = (on_delete, delete_id) {
                button {
                    class: "btn btn--danger record-card__delete",
                    title: "Delete {name}",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}

#[component]
pub fn RecordGrid(
    entries: Vec<CardEntry>,
    on_open: EventHandler<String>,
    #[props(default)] on_delete: Option<EventHandler<String>>,
) -> Element {
    rsx! {
        div {
            class: "record-grid",
            for entry in entries {
                if let Some(on_delete) = on_delete {
                    RecordCard {
                        key: "{entry.key}",
                        entry: entry.clone(),
                        on_open,
                        on_delete,
                    }
                } else {
                    RecordCard { key: "{entry.key}", entry: entry.clone(), on_open }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(Collection::Authors, ""), "No authors available yet");
        assert_eq!(empty_message(Collection::Authors, "  "), "No authors available yet");
        assert_eq!(
            empty_message(Collection::Partners, "acme"),
            "No partners match \"acme\""
        );
    }

    #[test]
    fn test_card_entries_keys_and_images() {
        let config = ApiConfig::default().with_base_url("http://cms.test");
        let mut ada = Record::named("Ada Lovelace");
        ada.id = Some("7".to_string());
        ada.photo = Some("ada.jpg".to_string());
        let records = vec![ada, Record::named("Grace Hopper")];

        let entries = card_entries(&config, Collection::Authors, &records, "");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "7");
        assert_eq!(entries[0].href, "/authors/7");
        assert_eq!(entries[0].image_url, "http://cms.test/images/ada.jpg");
        // No id: keyed by position in the unfiltered list
        assert_eq!(entries[1].key, "1");
        assert_eq!(entries[1].href, "/authors/1");
        assert_eq!(entries[1].image_url, api::PLACEHOLDER_IMAGE);

        let entries = card_entries(&config, Collection::Authors, &records, "GRACE");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "1");
    }

    #[test]
    fn test_positional_entries_have_no_record_id() {
        let config = ApiConfig::default();
        let mut with_id = Record::named("Acme");
        with_id.id = Some("42".to_string());
        // Bare-string payloads normalise to id-less records
        let records = vec![Record::named("Globex"), with_id];

        let entries = card_entries(&config, Collection::Partners, &records, "");
        assert_eq!(entries[0].key, "0");
        assert_eq!(entries[0].record_id(), None);
        assert_eq!(entries[1].key, "42");
        assert_eq!(entries[1].record_id(), Some("42"));
    }
}
