use api::{login_error_message, ApiClient, Credentials, Transport};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::session::use_session;

/// Log in and hand the issued token to `persist`.
///
/// On failure nothing is persisted and the returned text is what the login
/// page shows.
pub async fn complete_login<T: Transport>(
    client: &ApiClient<T>,
    credentials: &Credentials,
    persist: impl FnOnce(&str),
) -> Result<(), String> {
    match client.login(credentials).await {
        Ok(token) => {
            persist(&token);
            Ok(())
        }
        Err(err) => {
            tracing::warn!("Admin login failed: {}", err);
            Err(login_error_message(&err))
        }
    }
}

/// Admin sign-in form. Calls `on_success` once the session holds a token.
#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let client = use_hook(make_client);
    let session = use_session();
    let mut credentials = use_signal(Credentials::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            error.set(None);
            let attempt = credentials.peek().clone();
            let result = complete_login(&client, &attempt, |token| session.login(token)).await;
            submitting.set(false);
            match result {
                Ok(()) => on_success.call(()),
                Err(message) => error.set(Some(message)),
            }
        }
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit,
            h1 { "Admin sign in" }
            label {
                class: "form-field",
                span { "Username" }
                input {
                    r#type: "text",
                    autocomplete: "username",
                    value: credentials.read().username.clone(),
                    oninput: move |evt: FormEvent| credentials.write().username = evt.value(),
                }
            }
            label {
                class: "form-field",
                span { "Password" }
                input {
                    r#type: "password",
                    autocomplete: "current-password",
                    value: credentials.read().password.clone(),
                    oninput: move |evt: FormEvent| credentials.write().password = evt.value(),
                }
            }
            if let Some(message) = error() {
                p { class: "form-status form-status--error", role: "alert", "{message}" }
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
