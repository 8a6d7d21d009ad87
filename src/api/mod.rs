pub mod client;
pub mod traits;
pub mod types;

pub use client::ApiClient;
pub use traits::ListingSource;
pub use types::{ListingPage, ListingQuery, ListingsResponse};
