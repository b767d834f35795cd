use api::Collection;
use dioxus::prelude::*;

use ui::use_session;
use ui::views::{AdminDashboardView, AdminHeader, CollectionManagerView};

use crate::Route;

/// Gate for the admin pages: without a live session, go to the login page.
#[component]
pub fn AdminLayout() -> Element {
    let navigator = use_navigator();
    let session = use_session();

    if !session.is_authenticated() {
        tracing::debug!("Admin page requested without a session");
        navigator.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        section {
            class: "admin",
            AdminHeader {
                on_logout: move |_| {
                    navigator.replace(Route::Login {});
                },
            }
            nav {
                class: "admin-nav",
                Link { to: Route::AdminDashboard {}, "Overview" }
                for collection in Collection::ALL {
                    Link {
                        key: "{collection}",
                        to: Route::AdminCollection { collection },
                        {collection.title()}
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let navigator = use_navigator();
    rsx! {
        AdminDashboardView {
            on_open: move |collection| {
                navigator.push(Route::AdminCollection { collection });
            },
        }
    }
}

#[component]
pub fn AdminCollection(collection: Collection) -> Element {
    let navigator = use_navigator();
    rsx! {
        CollectionManagerView {
            collection,
            on_open: move |id: String| {
                navigator.push(Route::RecordDetail { collection, id });
            },
        }
    }
}
