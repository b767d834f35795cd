//! # API configuration — base URL of the content backend
//!
//! Every request the front-end makes is relative to a single base URL. It is
//! taken from the `API_BASE_URL` environment variable:
//!
//! | Target | Source |
//! |--------|--------|
//! | native | process environment, after loading `.env` via `dotenvy` |
//! | `wasm32` | captured at compile time with `option_env!` |
//!
//! When the variable is unset or blank, [`DEFAULT_API_BASE_URL`] is used.
//! Trailing slashes are trimmed so paths can always be appended with a leading
//! `/`.

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Fallback base URL when the environment does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Subpath under the base URL where bare image filenames are served from.
pub const IMAGES_SUBPATH: &str = "/images";

/// Connection settings for the content API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build from the environment, falling back to the default base URL.
    pub fn from_env() -> Self {
        Self::from_value(read_env())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(&url),
            _ => Self::default(),
        }
    }

    /// Builder method to override the base URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a base-relative path such as `/api/authors`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_env() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_env() -> Option<String> {
    option_env!("API_BASE_URL").map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_value_falls_back() {
        assert_eq!(ApiConfig::from_value(None), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_value(Some("   ".to_string())),
            ApiConfig::default()
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::from_value(Some("https://cms.example.org/".to_string()));
        assert_eq!(config.base_url(), "https://cms.example.org");
        assert_eq!(config.url("/api/about"), "https://cms.example.org/api/about");
        assert_eq!(config.url("api/about"), "https://cms.example.org/api/about");
    }
}
