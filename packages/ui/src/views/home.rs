use api::Collection;
use dioxus::prelude::*;

/// Landing page: a short introduction and a tile per public collection.
#[component]
pub fn HomeView(on_open: EventHandler<Collection>) -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Stories, people and the work behind them" }
            p { "Meet our authors, partners and advisors, and see what we are working on." }
        }
        nav {
            class: "tile-grid",
            for collection in Collection::ALL {
                button {
                    key: "{collection}",
                    class: "tile",
                    onclick: move |_| on_open.call(collection),
                    {collection.title()}
                }
            }
        }
    }
}
