//! Error types for the recipe client

/// Failure of a single REST call.
///
/// Both kinds are handled the same way by the state manager; the split only
/// matters for diagnostics and for picking the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network error, bad body)
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Common result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Form input that cannot be applied to a recipe field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown recipe field: {0}")]
    UnknownField(String),
    #[error("servings must be a positive whole number, got {0:?}")]
    InvalidServings(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
