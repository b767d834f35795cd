//! # API crate — client for the site's content backend
//!
//! Every page of the site is driven by a remote REST API. This crate owns the
//! whole conversation with it: where it lives, how requests are sent, how the
//! loosely shaped responses are folded into typed records, and how failures are
//! classified. It has no UI dependency, so all of it is testable natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `API_BASE_URL` lookup with a fixed fallback |
//! | [`error`] | [`ApiError`] taxonomy and user-facing messages |
//! | [`transport`] | [`Transport`] trait, [`ApiRequest`]/[`ApiResponse`], reqwest-backed [`HttpTransport`] |
//! | [`payload`] | `{data: ...}` / bare array / bare string normalisation |
//! | [`models`] | [`Record`], [`AboutContent`], form data and submit status |
//! | [`media`] | photo reference → image URL resolution |
//! | [`fetch`] | [`FetchState`] and the generation-guarded [`FetchLifecycle`] |
//!
//! ## Endpoints
//!
//! - `GET /api/{collection}` and `GET /api/{collection}/:id` for every [`Collection`]
//! - `GET /api/about`
//! - `POST /api/contact`, `POST /api/admin/login`
//! - `POST /api/{collection}`, `DELETE /api/{collection}/:id` (admin, bearer token)

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod fetch;
pub mod media;
pub mod models;
pub mod payload;
pub mod transport;

mod stub;
pub use stub::StubTransport;

pub use client::{ApiClient, ABOUT_ENDPOINT, CONTACT_ENDPOINT, LOGIN_ENDPOINT};
pub use collection::Collection;
pub use config::ApiConfig;
pub use error::ApiError;
pub use fetch::{DetailPhase, FetchLifecycle, FetchState, FetchTicket};
pub use media::{resolve_image_url, PLACEHOLDER_IMAGE};
pub use models::{
    filter_records, initials, login_error_message, send_contact, AboutContent, AboutSection,
    ContactField, ContactForm, Credentials, Record, RecordDraft, SectionBody, SubmitStatus,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
