use api::Collection;
use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

/// Public chrome: the navbar and the routed page beneath it.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Navbar {
            brand: "Home",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::OurStory {}, "Our Story" }
            for collection in Collection::ALL {
                Link {
                    key: "{collection}",
                    to: Route::CollectionList { collection },
                    {collection.title()}
                }
            }
            Link { to: Route::Contact {}, "Contact" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section {
            class: "status status--empty",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}
