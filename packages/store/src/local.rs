//! # Browser token store backed by `localStorage`
//!
//! [`LocalStore`] is the [`TokenStore`] used on the web platform. It reads and
//! writes `window.localStorage[TOKEN_KEY]` through `web-sys`.
//!
//! The storage handle is looked up on every call: it can be unavailable
//! (private browsing, disabled storage), in which case reads return `None` and
//! writes are dropped with a log line.

use web_sys::Storage;

use crate::token::{TokenStore, TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    tracing::error!("localStorage rejected the session token");
                }
            }
            None => tracing::error!("localStorage is unavailable; session will not persist"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
