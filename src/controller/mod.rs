//! Listing page controller: filter state, URL mirroring, and the fetch
//! lifecycle that feeds the view.

pub mod listing;
pub mod navigation;
pub mod render;

pub use listing::{ListingQueryController, RenderSnapshot};
pub use navigation::{
    detail_location, properties_location, without_filter_keys, MemoryHistory, Navigator,
    PROPERTIES_PATH,
};
pub use render::{fetch_listings, RenderState, LOAD_ERROR_MESSAGE};
