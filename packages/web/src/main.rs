use api::Collection;
use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminCollection, AdminDashboard, AdminLayout, Contact, CollectionList, Home, Login, NotFound,
    OurStory, RecordDetail, SiteLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/our-story")]
        OurStory {},
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
        #[layout(AdminLayout)]
            #[route("/admin")]
            AdminDashboard {},
            #[route("/admin/:collection")]
            AdminCollection { collection: Collection },
        #[end_layout]
        #[route("/:collection")]
        CollectionList { collection: Collection },
        #[route("/:collection/:id")]
        RecordDetail { collection: Collection, id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Content API at {}", api::ApiConfig::from_env().base_url());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin");
        assert_eq!(
            Route::CollectionList {
                collection: Collection::Authors
            }
            .to_string(),
            "/authors"
        );
        assert_eq!(
            Route::RecordDetail {
                collection: Collection::Team,
                id: "7".to_string()
            }
            .to_string(),
            "/team/7"
        );
        assert_eq!(
            Route::AdminCollection {
                collection: Collection::Partners
            }
            .to_string(),
            "/admin/partners"
        );
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(
            "/advisors".parse::<Route>().ok(),
            Some(Route::CollectionList {
                collection: Collection::Advisors
            })
        );
        assert_eq!(
            "/events/12".parse::<Route>().ok(),
            Some(Route::RecordDetail {
                collection: Collection::Events,
                id: "12".to_string()
            })
        );
        assert_eq!("/our-story".parse::<Route>().ok(), Some(Route::OurStory {}));
        assert_eq!("/admin".parse::<Route>().ok(), Some(Route::AdminDashboard {}));
        assert!(matches!(
            "/unknown-page".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_card_links_parse_as_detail_routes() {
        let config = api::ApiConfig::default();
        let mut record = api::Record::named("Ada");
        record.id = Some("7".to_string());
        let records = vec![record, api::Record::named("Grace")];

        let entries = ui::card_entries(&config, Collection::Authors, &records, "");
        for entry in entries {
            assert_eq!(
                entry.href.parse::<Route>().ok(),
                Some(Route::RecordDetail {
                    collection: Collection::Authors,
                    id: entry.key.clone()
                })
            );
        }
    }
}
