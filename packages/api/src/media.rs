//! # Image reference resolution
//!
//! Records carry photo references in several shapes. [`resolve_image_url`]
//! turns any of them into something an `img` tag can load. The rules are
//! checked in this order:
//!
//! 1. absolute `http://` / `https://` URL → unchanged
//! 2. starts with a known image path prefix (`/images/`, `/uploads/`) → base URL + reference
//! 3. bare filename with an image extension → base URL + `/images/` + filename
//! 4. anything else → [`PLACEHOLDER_IMAGE`]
//!
//! Relative paths that match neither 2 nor 3 (e.g. `photos/a.png`, `a.pdf`)
//! fall through to the placeholder.

use crate::config::{ApiConfig, IMAGES_SUBPATH};

/// Site-local image shown when a reference cannot be resolved.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Path prefixes the backend serves images under.
pub const IMAGE_PATH_PREFIXES: [&str; 2] = ["/images/", "/uploads/"];

/// Extensions accepted for bare filenames.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Which resolution rule a reference falls under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Absolute,
    Prefixed,
    BareFile,
    Unrecognized,
}

impl ImageSource {
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ImageSource::Absolute
        } else if IMAGE_PATH_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            ImageSource::Prefixed
        } else if !raw.contains('/')
            && !raw.contains(char::is_whitespace)
            && has_image_extension(raw)
        {
            ImageSource::BareFile
        } else {
            ImageSource::Unrecognized
        }
    }
}

fn has_image_extension(raw: &str) -> bool {
    match raw.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        _ => false,
    }
}

/// Resolve a raw photo reference against the API base URL.
pub fn resolve_image_url(config: &ApiConfig, raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_string();
    };
    match ImageSource::classify(raw) {
        ImageSource::Absolute => raw.to_string(),
        ImageSource::Prefixed => format!("{}{}", config.base_url(), raw),
        ImageSource::BareFile => format!("{}{}/{}", config.base_url(), IMAGES_SUBPATH, raw),
        ImageSource::Unrecognized => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Whether a content string should be rendered as an image rather than prose.
///
/// Absolute URLs only count when they end in an image extension, so a link
/// pasted as prose stays text.
pub fn is_image_reference(raw: &str) -> bool {
    let raw = raw.trim();
    match ImageSource::classify(raw) {
        ImageSource::Prefixed | ImageSource::BareFile => true,
        ImageSource::Absolute => {
            let path = raw.split(['?', '#']).next().unwrap_or(raw);
            path.rsplit('/').next().is_some_and(has_image_extension)
        }
        ImageSource::Unrecognized => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::default().with_base_url("https://api.example.org")
    }

    #[test]
    fn test_bare_filename() {
        assert_eq!(
            resolve_image_url(&config(), Some("pic.jpg")),
            "https://api.example.org/images/pic.jpg"
        );
        assert_eq!(
            resolve_image_url(&config(), Some("Portrait.PNG")),
            "https://api.example.org/images/Portrait.PNG"
        );
    }

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve_image_url(&config(), Some("https://x.com/p.png")),
            "https://x.com/p.png"
        );
        assert_eq!(
            resolve_image_url(&config(), Some("http://cdn.test/avatar")),
            "http://cdn.test/avatar"
        );
    }

    #[test]
    fn test_known_prefix() {
        assert_eq!(
            resolve_image_url(&config(), Some("/images/a.png")),
            "https://api.example.org/images/a.png"
        );
        assert_eq!(
            resolve_image_url(&config(), Some("/uploads/2024/b.webp")),
            "https://api.example.org/uploads/2024/b.webp"
        );
    }

    #[test]
    fn test_unrecognized_falls_back() {
        for raw in ["photos/a.png", "document.pdf", ".png", "portrait", "/static/a.png"] {
            assert_eq!(
                resolve_image_url(&config(), Some(raw)),
                PLACEHOLDER_IMAGE,
                "{raw}"
            );
        }
        assert_eq!(resolve_image_url(&config(), None), PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image_url(&config(), Some("  ")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_image_reference_detection() {
        assert!(is_image_reference("/images/mission.jpg"));
        assert!(is_image_reference("team.png"));
        assert!(is_image_reference("https://cdn.test/story.jpeg?w=600"));
        assert!(!is_image_reference("https://example.org/about"));
        assert!(!is_image_reference("We started in 2012 with a small team."));
    }

    #[test]
    fn test_prose_ending_in_extension_is_text() {
        assert_eq!(ImageSource::classify("See our team.png"), ImageSource::Unrecognized);
        assert_eq!(
            resolve_image_url(&config(), Some("Meet the crew at launch.jpg")),
            PLACEHOLDER_IMAGE
        );
        assert!(!is_image_reference("Read more in the annual report.PNG"));
        // Surrounding whitespace alone is trimmed
        assert_eq!(ImageSource::classify("  team.png "), ImageSource::BareFile);
    }
}
