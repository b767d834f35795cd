mod about;
pub use about::AboutView;

mod admin;
pub use admin::{AdminDashboardView, AdminHeader, CollectionManagerView, RecordEditor};

mod collection_list;
pub use collection_list::CollectionListView;

mod home;
pub use home::HomeView;

mod record_detail;
pub use record_detail::RecordDetailView;
