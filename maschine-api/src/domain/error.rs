use thiserror::Error;

/// Errors that can occur when searching users upstream.
#[derive(Debug, Error)]
pub enum UserSearchError {
    #[error("upstream rejected the API key")]
    Unauthorized,
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream response was not valid JSON: {0}")]
    InvalidBody(String),
}
