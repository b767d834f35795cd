use dioxus::prelude::*;

use ui::{use_session, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let session = use_session();

    // Already signed in
    if session.is_authenticated() {
        nav.replace(Route::AdminDashboard {});
    }

    rsx! {
        LoginForm {
            on_success: move |_| {
                nav.replace(Route::AdminDashboard {});
            },
        }
    }
}
