use crate::api::types::{ListingPage, ListingQuery};
use crate::error::Result;
use crate::models::{Listing, ListingId};
use async_trait::async_trait;

/// Common trait for anything that can serve listings.
/// The HTTP client implements it; controllers and pages only see this seam.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of listings matching the query
    async fn list(&self, query: &ListingQuery) -> Result<ListingPage>;

    /// Fetch a single listing by id
    async fn get(&self, id: ListingId) -> Result<Listing>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
