//! # Token storage seam
//!
//! The admin session token is the only state the site persists. Where it lives
//! depends on the platform:
//!
//! | Store | Backing |
//! |-------|---------|
//! | [`crate::LocalStore`] | browser `localStorage` (WASM + `web` feature) |
//! | [`crate::FileStore`] | a file under the platform data directory (native) |
//! | [`crate::MemoryStore`] | process memory (tests) |
//!
//! All implementations keep the token under [`TOKEN_KEY`]. Storage failures
//! are logged and read back as "no token"; they never surface to the UI.

/// Fixed key (or filename) the token is stored under.
pub const TOKEN_KEY: &str = "admin_token";

/// Persistence for the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}
