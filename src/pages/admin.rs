//! Admin overview.
//!
//! Only the listing total is backed by data; user and favourite counters are
//! not exposed by the API. Access control belongs to the server and is not
//! checked here.

use crate::api::{ListingQuery, ListingSource};
use crate::error::Result;
use crate::models::{Listing, TransactionType};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_properties: u64,
    pub featured: usize,
    pub for_sale: usize,
    pub for_rent: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminOverview {
    pub stats: AdminStats,
    pub listings: Vec<Listing>,
}

pub async fn load_admin_overview(source: &dyn ListingSource, page_size: u32) -> Result<AdminOverview> {
    let page = source.list(&ListingQuery::unfiltered(page_size)).await?;

    let count_of = |kind: TransactionType| {
        page.items
            .iter()
            .filter(|l| l.transaction() == Some(kind))
            .count()
    };
    let stats = AdminStats {
        total_properties: page.total_or_len(),
        featured: page.items.iter().filter(|l| l.featured).count(),
        for_sale: count_of(TransactionType::Sale),
        for_rent: count_of(TransactionType::Rental),
    };

    info!("Admin overview: {} properties", stats.total_properties);

    Ok(AdminOverview {
        stats,
        listings: page.items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListingPage;
    use crate::error::ApiError;
    use crate::models::fixtures::listing;
    use crate::models::ListingId;
    use async_trait::async_trait;

    struct Fixed(Option<u64>);

    #[async_trait]
    impl ListingSource for Fixed {
        async fn list(&self, query: &ListingQuery) -> Result<ListingPage> {
            assert_eq!(query.page_size, 100);
            let mut rental = listing(2, "T3 Nice", "Nice");
            rental.transaction_type = "location".into();
            rental.featured = true;
            Ok(ListingPage::new(vec![listing(1, "Studio", "Paris"), rental], self.0))
        }

        async fn get(&self, _id: ListingId) -> Result<Listing> {
            Err(ApiError::Http { status: 404 })
        }

        fn source_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_total_prefers_server_count() {
        let overview = load_admin_overview(&Fixed(Some(57)), 100).await.unwrap();
        assert_eq!(overview.stats.total_properties, 57);
        assert_eq!(overview.stats.featured, 1);
        assert_eq!(overview.stats.for_sale, 1);
        assert_eq!(overview.stats.for_rent, 1);
        assert_eq!(overview.listings.len(), 2);
    }

    #[tokio::test]
    async fn test_total_falls_back_to_items() {
        let overview = load_admin_overview(&Fixed(None), 100).await.unwrap();
        assert_eq!(overview.stats.total_properties, 2);

        let overview = load_admin_overview(&Fixed(Some(0)), 100).await.unwrap();
        assert_eq!(overview.stats.total_properties, 2);
    }
}
