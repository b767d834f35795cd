use api::{send_contact, ContactField, ContactForm, SubmitStatus};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::rich_text::RichTextField;

/// The public contact form (`POST /api/contact`).
#[component]
pub fn ContactFormPanel() -> Element {
    let client = use_hook(make_client);
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(SubmitStatus::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if status.peek().is_sending() {
                return;
            }
            status.set(SubmitStatus::Sending);
            let snapshot = form.peek().clone();
            let outcome = send_contact(&client, &snapshot).await;
            form.write().apply_outcome(&outcome);
            status.set(outcome);
        }
    };

    let sending = status().is_sending();
    let status_class = if status().is_error() {
        "form-status form-status--error"
    } else {
        "form-status"
    };

    let text_input = move |field: ContactField, label: &'static str, kind: &'static str| {
        rsx! {
            label {
                class: "form-field",
                span { "{label}" }
                input {
                    r#type: kind,
                    value: form.read().get(field).to_string(),
                    disabled: sending,
                    oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                }
            }
        }
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit,
            {text_input(ContactField::Name, "Name", "text")}
            {text_input(ContactField::Email, "Email", "email")}
            {text_input(ContactField::Subject, "Subject", "text")}
            RichTextField {
                label: "Message",
                placeholder: "How can we help?",
                value: form.read().message.clone(),
                disabled: sending,
                on_change: move |text: String| form.write().set(ContactField::Message, text),
            }
            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: sending,
                if sending { "Sending..." } else { "Send message" }
            }
            if let Some(message) = status().message() {
                p { class: "{status_class}", role: "status", "{message}" }
            }
        }
    }
}
