use crate::api::traits::ListingSource;
use crate::api::types::{ListingPage, ListingQuery, ListingsResponse, PROPERTIES_ENDPOINT};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Listing, ListingId};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client for the remote listing API
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    /// Create a client with the configured timeout and user agent
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Self::with_client(client, &config.api_url)
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client, api_url: &str) -> Result<Self> {
        let mut base = Url::parse(api_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listing API returned status {} for {}", status, url);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Downloaded {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Could not decode response from {}: {}", url, e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn list(&self, query: &ListingQuery) -> Result<ListingPage> {
        let url = query.request_url(&self.base)?;
        let response: ListingsResponse = self.get_json(url).await?;
        let page = ListingPage::from(response);

        info!(
            "Fetched {} listings (count: {:?})",
            page.items.len(),
            page.count
        );
        Ok(page)
    }

    async fn get(&self, id: ListingId) -> Result<Listing> {
        let url = self.base.join(&format!("{}{}/", PROPERTIES_ENDPOINT, id))?;
        self.get_json(url).await
    }

    fn source_name(&self) -> &'static str {
        "Listing API"
    }
}
