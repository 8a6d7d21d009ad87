use crate::api::{ListingQuery, ListingSource};
use crate::controller::{fetch_listings, RenderState};

/// Latest listings for the home page, unfiltered
pub async fn load_home(source: &dyn ListingSource, page_size: u32) -> RenderState {
    fetch_listings(source, &ListingQuery::unfiltered(page_size)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListingPage;
    use crate::error::Result;
    use crate::models::fixtures::listing;
    use crate::models::{Listing, ListingId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<ListingQuery>>,
    }

    #[async_trait]
    impl ListingSource for Recording {
        async fn list(&self, query: &ListingQuery) -> Result<ListingPage> {
            self.seen.lock().unwrap().push(query.clone());
            Ok(ListingPage::new(vec![listing(1, "Villa Monaco", "Monaco")], None))
        }

        async fn get(&self, id: ListingId) -> Result<Listing> {
            Ok(listing(id, "unused", "Paris"))
        }

        fn source_name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_home_requests_unfiltered_preview() {
        let source = Recording::default();
        let state = load_home(&source, 6).await;

        assert_eq!(state.items().len(), 1);
        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [ListingQuery::unfiltered(6)]);
    }
}
