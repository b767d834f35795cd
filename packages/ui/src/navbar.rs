use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Site header. Platform packages supply the links as children.
#[component]
pub fn Navbar(#[props(default = "Home".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            span { class: "navbar__brand", "{brand}" }
            nav { class: "navbar__links", {children} }
        }
    }
}
