use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::UserSearchError;

/// Message returned for every upstream failure. The cause is only logged.
pub const SEARCH_FAILED: &str = "Failed to search users";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<UserSearchError> for ApiError {
    fn from(err: UserSearchError) -> Self {
        tracing::error!("Search API error: {}", err);
        Self::internal(SEARCH_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_collapse_to_generic_message() {
        for err in [
            UserSearchError::Unauthorized,
            UserSearchError::UpstreamStatus(503),
            UserSearchError::Transport("connection reset".to_string()),
            UserSearchError::InvalidBody("expected value".to_string()),
        ] {
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.message, SEARCH_FAILED);
        }
    }
}
