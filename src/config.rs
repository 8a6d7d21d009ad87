use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_USER_AGENT: &str = concat!("immo-scout/", env!("CARGO_PKG_VERSION"));

/// Runtime settings for the listing API client and the pages built on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the listing API, without the `/api/properties/` suffix.
    pub api_url: String,
    /// `page_size` sent by the filtered listing page.
    pub listing_page_size: u32,
    /// `page_size` sent by the home page preview.
    pub home_page_size: u32,
    /// `page_size` sent by the admin overview.
    pub admin_page_size: u32,
    /// Upper bound on a single request; expiry surfaces as a network failure.
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            listing_page_size: 20,
            home_page_size: 6,
            admin_page_size: 100,
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Reads `IMMO_API_URL`, `IMMO_PAGE_SIZE` and `IMMO_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Malformed numbers keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("IMMO_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("IMMO_PAGE_SIZE") {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.listing_page_size = size,
                _ => warn!("Ignoring invalid IMMO_PAGE_SIZE={:?}", raw),
            }
        }

        if let Some(raw) = lookup("IMMO_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid IMMO_TIMEOUT_SECS={:?}", raw),
            }
        }

        config
    }
}
