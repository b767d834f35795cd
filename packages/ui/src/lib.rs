//! This crate contains all shared UI for the workspace.
//!
//! Views take navigation callbacks instead of routes, so the platform package
//! owns the router.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_token_store, PlatformStore};

mod fetch;
pub use fetch::{use_fetch, Fetch};

mod session;
pub use session::{use_session, ExpiryTask, Session, SessionProvider, ADMIN_ROOT, LOGIN_PATH};

mod avatar;
pub use avatar::{Avatar, InitialsBadge};

mod search_bar;
pub use search_bar::SearchBar;

mod status;
pub use status::{EmptyState, ErrorPanel, LoadingIndicator};

mod record_card;
pub use record_card::{card_entries, empty_message, CardEntry, RecordCard, RecordGrid};

mod rich_text;
pub use rich_text::RichTextField;

mod contact_form;
pub use contact_form::ContactFormPanel;

mod login_form;
pub use login_form::{complete_login, LoginForm};

mod navbar;
pub use navbar::Navbar;

pub mod views;
