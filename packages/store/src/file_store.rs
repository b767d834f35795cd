//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the token in a single file named [`TOKEN_KEY`] inside a
//! base directory. It backs native builds (desktop previews, `dx serve`
//! without WASM) where `localStorage` does not exist.
//!
//! Use [`FileStore::default_location`] for the platform data directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/site/` |
//! | Linux | `~/.local/share/site/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\site\` |

use std::path::PathBuf;

use crate::token::{TokenStore, TOKEN_KEY};

/// Directory name under the platform data directory.
const APP_DIR: &str = "site";

/// Filesystem-backed TokenStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store under the platform data directory, or the working directory if there is none.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::error!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::error!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}
