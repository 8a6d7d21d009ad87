use crate::api::ListingSource;
use crate::error::ApiError;
use crate::models::{Listing, ListingId};
use tracing::{info, warn};

pub const DETAIL_ERROR_MESSAGE: &str = "Unable to load this listing.";

/// What the detail view should show
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// The API answered with a non-success status for this id
    NotFound,
    Error(String),
    Loaded(Box<Listing>),
}

/// Fetches one listing. Any non-success status is presented as "not found";
/// transport and decode failures become a generic error.
pub async fn load_detail(source: &dyn ListingSource, id: ListingId) -> DetailState {
    match source.get(id).await {
        Ok(listing) => {
            info!("Loaded listing {} ({})", listing.id, listing.title);
            DetailState::Loaded(Box::new(listing))
        }
        Err(ApiError::Http { status }) => {
            warn!("Listing {} unavailable (HTTP {})", id, status);
            DetailState::NotFound
        }
        Err(e) => {
            warn!("Failed to load listing {}: {}", id, e);
            DetailState::Error(DETAIL_ERROR_MESSAGE.to_string())
        }
    }
}

/// Image carousel for a listing detail page. The index is local to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, current: 0 }
    }

    pub fn for_listing(listing: &Listing) -> Self {
        Self::new(listing.gallery_image_urls())
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Advance, wrapping from the last image to the first
    pub fn next(&mut self) -> usize {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
        self.current
    }

    /// Step back, wrapping from the first image to the last
    pub fn previous(&mut self) -> usize {
        if !self.images.is_empty() {
            self.current = self.current.checked_sub(1).unwrap_or(self.images.len() - 1);
        }
        self.current
    }

    /// Jump to a thumbnail. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// `"3 / 6"`
    pub fn counter(&self) -> String {
        if self.images.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.images.len())
    }
}
