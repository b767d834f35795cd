//! Form data for the contact page, the admin login and the record editor.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

/// Shown on the login page when the server cannot be reached.
pub const LOGIN_UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again later.";

/// Shown when the server rejected a login without saying why.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Raised when a 2xx login response carries no token.
pub const MISSING_TOKEN_MESSAGE: &str = "Login response did not include a token";

/// Fields of the contact form, serialised as the POST body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Name, a plausible email and a message are required; the subject is optional.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Please enter your name".to_string()));
        }
        if !is_plausible_email(&self.email) {
            return Err(ApiError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(ApiError::Validation("Please enter a message".to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold a finished submission back into the live form.
    ///
    /// Only a successful send clears it; otherwise whatever the visitor has
    /// typed, including edits made while the request was in flight, stays.
    pub fn apply_outcome(&mut self, status: &SubmitStatus) {
        if *status == SubmitStatus::Sent {
            self.clear();
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Progress of a form submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Rejected by client-side validation; nothing was sent.
    Invalid(String),
    Failed(String),
}

impl SubmitStatus {
    /// Status line for display, if there is one.
    pub fn message(&self) -> Option<String> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some("Sending...".to_string()),
            SubmitStatus::Sent => Some("Message sent successfully!".to_string()),
            SubmitStatus::Invalid(reason) => Some(reason.clone()),
            SubmitStatus::Failed(reason) => Some(format!("Message sending failed: {reason}")),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmitStatus::Invalid(_) | SubmitStatus::Failed(_))
    }
}

/// Validate and submit a snapshot of the contact form.
///
/// The caller applies the result with [`ContactForm::apply_outcome`].
pub async fn send_contact<T: Transport>(client: &ApiClient<T>, form: &ContactForm) -> SubmitStatus {
    if let Err(err) = form.validate() {
        return SubmitStatus::Invalid(err.user_message());
    }
    match client.submit_contact(form).await {
        Ok(()) => SubmitStatus::Sent,
        Err(err) => {
            tracing::warn!("Contact submission failed: {}", err);
            SubmitStatus::Failed(err.user_message())
        }
    }
}

/// Admin login body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::Validation(
                "Please enter your username and password".to_string(),
            ));
        }
        Ok(())
    }
}

/// Successful login body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Text shown on the login page for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => LOGIN_UNREACHABLE_MESSAGE.to_string(),
        ApiError::Http {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Validation(message) | ApiError::Malformed(message) => message.clone(),
        ApiError::Http { message: None, .. } | ApiError::NotFound => {
            LOGIN_FAILED_MESSAGE.to_string()
        }
    }
}

/// Admin editor body for a new record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub area_of_focus: String,
    pub photo_url: String,
    pub bio: String,
}

impl RecordDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
