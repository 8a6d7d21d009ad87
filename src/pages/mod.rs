//! Single-resource pages built on the same fetch lifecycle as the listing
//! controller: the listing detail view, the home preview and the admin
//! overview.

pub mod admin;
pub mod detail;
pub mod home;

pub use admin::{load_admin_overview, AdminOverview, AdminStats};
pub use detail::{load_detail, DetailState, Gallery};
pub use home::load_home;
