//! Record portraits, with an initials badge when there is no usable image.

use dioxus::prelude::*;

/// Round badge with the one- or two-letter initials of `name`.
#[component]
pub fn InitialsBadge(name: String, #[props(default = "md".to_string())] size: String) -> Element {
    let label = api::initials(&name);
    rsx! {
        span {
            class: "initials-badge initials-badge--{size}",
            title: "{name}",
            "{label}"
        }
    }
}

/// Image at `src`, swapped for an [`InitialsBadge`] if it fails to load.
#[component]
pub fn Avatar(
    name: String,
    /// Already resolved image URL.
    src: String,
    #[props(default = "md".to_string())] size: String,
) -> Element {
    let mut failed = use_signal(|| false);

    // A new source gets a fresh attempt
    let mut current_src = use_signal(|| src.clone());
    if *current_src.peek() != src {
        current_src.set(src.clone());
        failed.set(false);
    }

    if failed() {
        return rsx! {
            InitialsBadge { name, size }
        };
    }

    rsx! {
        img {
            class: "avatar avatar--{size}",
            src: "{src}",
            alt: "{name}",
            onerror: move |_| {
                tracing::debug!("Image failed to load, showing initials");
                failed.set(true);
            },
        }
    }
}
