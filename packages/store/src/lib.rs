//! Persisted client state: the admin session token and its lifetime.

pub mod claims;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use claims::token_expiry;
pub use session::{plan_expiry, unix_now, ExpiryPlan, SessionManager, SessionStatus, TimerHandle};
pub use token::{TokenStore, TOKEN_KEY};
