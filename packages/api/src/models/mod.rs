//! Data models for the content API.

mod about;
mod forms;
mod record;

pub use about::{AboutContent, AboutSection, SectionBody, ABOUT_SECTIONS};
pub use forms::{
    login_error_message, send_contact, ContactField, ContactForm, Credentials, LoginResponse,
    RecordDraft, SubmitStatus, LOGIN_FAILED_MESSAGE, LOGIN_UNREACHABLE_MESSAGE,
    MISSING_TOKEN_MESSAGE,
};
pub use record::{filter_records, initials, Record, INITIALS_PLACEHOLDER};
