//! # Record: one content item (author, partner, advisor, ...)
//!
//! Endpoints return records in loosely typed shapes: ids as numbers or
//! strings, the photo under one of several keys, and some list endpoints return
//! bare strings instead of objects. [`Record::from_value`] folds every shape
//! into one struct so views never branch on payload shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown instead of initials when a record has no usable name.
pub const INITIALS_PLACEHOLDER: &str = "?";

const NAME_KEYS: [&str; 3] = ["name", "title", "full_name"];
const PHOTO_KEYS: [&str; 4] = ["photo_url", "photo", "image_url", "image"];

/// A content item in canonical shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<String>,
    pub name: String,
    pub bio: Option<String>,
    pub details: Option<String>,
    /// Raw photo reference; resolve with [`crate::resolve_image_url`].
    pub photo: Option<String>,
    pub area_of_focus: Option<String>,
    pub role: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl Record {
    /// A record that only has a name, as produced by bare-string payloads.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Normalise one element of an API payload.
    ///
    /// Strings become named records, objects are read field by field, and
    /// anything else (numbers, nulls, nested arrays) is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::named(name.trim())),
            Value::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: map.get("id").and_then(id_value),
            name: first_text(map, &NAME_KEYS).unwrap_or_default(),
            bio: text(map, "bio"),
            details: text(map, "details"),
            photo: first_text(map, &PHOTO_KEYS),
            area_of_focus: text(map, "area_of_focus"),
            role: text(map, "role"),
            summary: text(map, "summary"),
            date: text(map, "date"),
            location: text(map, "location"),
            website: text(map, "website"),
        }
    }

    /// A record with neither identity nor content is treated as absent.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_empty()
            && self.description().is_none()
            && self.photo.is_none()
    }

    /// Identifier used in the detail route: the id, or the list position.
    pub fn route_key(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }

    /// Name to show, with a fallback for nameless records.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }

    /// Long-form text: bio, then details, then summary.
    pub fn description(&self) -> Option<&str> {
        self.bio
            .as_deref()
            .or(self.details.as_deref())
            .or(self.summary.as_deref())
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(map, key))
}

/// One- or two-letter badge label derived from a name.
///
/// Takes the first character of the first two whitespace-separated tokens,
/// uppercased. Empty names yield [`INITIALS_PLACEHOLDER`].
pub fn initials(name: &str) -> String {
    let label: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if label.is_empty() {
        INITIALS_PLACEHOLDER.to_string()
    } else {
        label
    }
}

/// Records whose name contains `term`, paired with their list position.
///
/// An empty term keeps everything.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<(usize, &'a Record)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(term))
        .collect()
}
