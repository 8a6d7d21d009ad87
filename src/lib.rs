//! # Immo Scout
//!
//! Client for a remote real-estate listing API. The core is the listing
//! query controller: it keeps the filter state, the page's location and the
//! render state consistent, and guarantees that a superseded request never
//! overwrites a newer result.
//!
//! ```ignore
//! use immo_scout::{ApiClient, Config, ListingQueryController, MemoryHistory};
//! use std::sync::Arc;
//!
//! let config = Config::from_env();
//! let client = Arc::new(ApiClient::new(&config)?);
//! let mut page = ListingQueryController::new(
//!     client,
//!     MemoryHistory::new("/properties?city=Paris"),
//!     config.listing_page_size,
//! );
//! page.mount();
//! let state = page.settled().await;
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod models;
pub mod pages;
pub mod view;

pub use api::{ApiClient, ListingPage, ListingQuery, ListingSource};
pub use config::Config;
pub use controller::{ListingQueryController, MemoryHistory, Navigator, RenderState};
pub use error::{ApiError, Result};
pub use filters::{FilterField, FilterState};
pub use models::{Listing, ListingId, PropertyType, TransactionType};
