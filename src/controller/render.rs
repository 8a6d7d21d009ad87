use crate::api::{ListingQuery, ListingSource};
use crate::models::Listing;
use tracing::{info, warn};

/// Static message shown for any failed listing fetch
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load listings.";

/// What the listing view should currently show. Replaced wholesale on every
/// transition, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success {
        items: Vec<Listing>,
        total_count: u64,
    },
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }

    /// True once a fetch has resolved, either way
    pub fn is_settled(&self) -> bool {
        matches!(self, RenderState::Error(_) | RenderState::Success { .. })
    }

    /// A successful fetch that matched nothing. Not an error.
    pub fn is_empty_success(&self) -> bool {
        matches!(self, RenderState::Success { items, .. } if items.is_empty())
    }

    pub fn items(&self) -> &[Listing] {
        match self {
            RenderState::Success { items, .. } => items,
            _ => &[],
        }
    }
}

/// Issues one collection request and folds the outcome into a render state.
///
/// Never fails: transport, status and decode errors are logged and reported
/// as [`LOAD_ERROR_MESSAGE`].
pub async fn fetch_listings(source: &dyn ListingSource, query: &ListingQuery) -> RenderState {
    match source.list(query).await {
        Ok(page) => {
            info!(
                "{} returned {} listings for {:?}",
                source.source_name(),
                page.items.len(),
                query.filters
            );
            let total_count = page.total_count();
            RenderState::Success {
                items: page.items,
                total_count,
            }
        }
        Err(e) => {
            warn!("Listing fetch from {} failed: {}", source.source_name(), e);
            RenderState::Error(LOAD_ERROR_MESSAGE.to_string())
        }
    }
}
