//! Content of the "Our Story" page (`GET /api/about`).

use serde_json::Value;

use crate::config::ApiConfig;
use crate::media::{is_image_reference, resolve_image_url};
use crate::payload::unwrap_object;

/// Payload keys in display order, with their headings.
pub const ABOUT_SECTIONS: [(&str, &str); 7] = [
    ("who_we_are", "Who We Are"),
    ("our_story", "Our Story"),
    ("our_mission", "Our Mission"),
    ("our_mandate", "Our Mandate"),
    ("why_us", "Why Us"),
    ("our_approach", "Our Approach"),
    ("what_we_offer", "What We Offer"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Text(String),
    /// Resolved image URL.
    Image(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutSection {
    pub key: &'static str,
    pub title: &'static str,
    pub body: SectionBody,
}

/// The sections present in the payload, in [`ABOUT_SECTIONS`] order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutContent {
    pub sections: Vec<AboutSection>,
}

impl AboutContent {
    pub fn from_value(value: &Value, config: &ApiConfig) -> Self {
        let object = unwrap_object(value);
        let sections = ABOUT_SECTIONS
            .iter()
            .filter_map(|&(key, title)| {
                let raw = object.get(key)?.as_str()?.trim();
                if raw.is_empty() {
                    return None;
                }
                let body = if is_image_reference(raw) {
                    SectionBody::Image(resolve_image_url(config, Some(raw)))
                } else {
                    SectionBody::Text(raw.to_string())
                };
                Some(AboutSection { key, title, body })
            })
            .collect();
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
