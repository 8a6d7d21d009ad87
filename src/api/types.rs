use crate::error::Result;
use crate::filters::FilterState;
use crate::models::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

pub const PROPERTIES_ENDPOINT: &str = "api/properties/";

/// Parameters for one request against the listing collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filters: FilterState,
    /// Always sent, never reflected in the navigable URL
    pub page_size: u32,
}

impl ListingQuery {
    pub fn new(filters: FilterState, page_size: u32) -> Self {
        Self { filters, page_size }
    }

    pub fn unfiltered(page_size: u32) -> Self {
        Self::new(FilterState::default(), page_size)
    }

    /// Builds `{base}api/properties/?<filters>&page_size=N`.
    ///
    /// Only non-empty filters are appended, in canonical order, so an empty
    /// filter state produces `?page_size=N` alone.
    pub fn request_url(&self, api_base: &Url) -> Result<Url> {
        let mut url = api_base.join(PROPERTIES_ENDPOINT)?;
        url.query_pairs_mut()
            .extend_pairs(self.filters.query_pairs())
            .append_pair("page_size", &self.page_size.to_string());
        Ok(url)
    }
}

/// Raw collection body. The API answers either paginated or with a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingsResponse {
    Paginated {
        results: Vec<Listing>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<Listing>),
}

/// Normalised collection response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingPage {
    pub items: Vec<Listing>,
    /// Total reported by the server, when it reports one
    pub count: Option<u64>,
    pub fetched_at: DateTime<Utc>,
}

impl ListingPage {
    pub fn new(items: Vec<Listing>, count: Option<u64>) -> Self {
        Self {
            items,
            count,
            fetched_at: Utc::now(),
        }
    }

    /// Server-reported total, 0 when absent
    pub fn total_count(&self) -> u64 {
        self.count.unwrap_or(0)
    }

    /// Server-reported total when non-zero, otherwise the number of items received
    pub fn total_or_len(&self) -> u64 {
        self.count
            .filter(|c| *c > 0)
            .unwrap_or(self.items.len() as u64)
    }
}

impl From<ListingsResponse> for ListingPage {
    fn from(response: ListingsResponse) -> Self {
        match response {
            ListingsResponse::Paginated { results, count } => ListingPage::new(results, count),
            ListingsResponse::Bare(items) => ListingPage::new(items, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyType, TransactionType};
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://127.0.0.1:8000/").unwrap()
    }

    #[test]
    fn test_request_url_with_city() {
        let filters = FilterState {
            city: Some("Paris".into()),
            ..Default::default()
        };
        let url = ListingQuery::new(filters, 20).request_url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/properties/?city=Paris&page_size=20"
        );
    }

    #[test]
    fn test_request_url_empty_filters_only_page_size() {
        let url = ListingQuery::unfiltered(20).request_url(&base()).unwrap();
        assert_eq!(url.query(), Some("page_size=20"));
    }

    #[test]
    fn test_request_url_all_filters_in_order() {
        let filters = FilterState {
            zip_code: Some("06000".into()),
            property_type: Some(PropertyType::Villa),
            transaction_type: Some(TransactionType::Sale),
            city: Some("Nice".into()),
        };
        let url = ListingQuery::new(filters, 100).request_url(&base()).unwrap();
        assert_eq!(
            url.query(),
            Some("city=Nice&transaction_type=vente&property_type=villa&zip_code=06000&page_size=100")
        );
    }

    #[test]
    fn test_request_url_keeps_base_path() {
        let base = Url::parse("https://example.test/backend/").unwrap();
        let url = ListingQuery::unfiltered(6).request_url(&base).unwrap();
        assert_eq!(url.as_str(), "https://example.test/backend/api/properties/?page_size=6");
    }

    #[test]
    fn test_paginated_response() {
        let response: ListingsResponse = serde_json::from_value(json!({
            "results": [{"id": 1, "title": "Studio Paris"}],
            "count": 1
        }))
        .unwrap();
        let page = ListingPage::from(response);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count(), 1);
    }

    #[test]
    fn test_bare_array_response() {
        let response: ListingsResponse =
            serde_json::from_value(json!([{"id": 1}, {"id": 2}])).unwrap();
        let page = ListingPage::from(response);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count(), 0);
        assert_eq!(page.total_or_len(), 2);
    }

    #[test]
    fn test_results_without_count() {
        let response: ListingsResponse =
            serde_json::from_value(json!({"results": [], "next": null})).unwrap();
        let page = ListingPage::from(response);
        assert!(page.items.is_empty());
        assert_eq!(page.count, None);
        assert_eq!(page.total_or_len(), 0);
    }

    #[test]
    fn test_unrecognised_body_is_rejected() {
        let result: std::result::Result<ListingsResponse, _> =
            serde_json::from_value(json!({"detail": "Not found."}));
        assert!(result.is_err());
    }
}
