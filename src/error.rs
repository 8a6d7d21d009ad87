use thiserror::Error;

/// Failures raised by the listing API layer.
///
/// These never reach the view directly: the controllers fold every variant
/// into a static, user-facing message and only log the detail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, no response received (includes timeouts).
    #[error("network failure: {0}")]
    Network(String),

    /// A response arrived with a non-success status.
    #[error("listing API returned HTTP {status}")]
    Http { status: u16 },

    /// The body was neither a paginated object nor a bare array of listings.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404 })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
