mod layout;
pub use layout::{NotFound, SiteLayout};

mod pages;
pub use pages::{Contact, Home, OurStory};

mod collections;
pub use collections::{CollectionList, RecordDetail};

mod login;
pub use login::Login;

mod admin;
pub use admin::{AdminCollection, AdminDashboard, AdminLayout};
