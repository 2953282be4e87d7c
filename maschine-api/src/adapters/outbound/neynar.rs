use async_trait::async_trait;

use crate::domain::{ports::outbound::UserSearchPort, UserSearchError};

/// Adapter that wraps the Neynar client to implement the UserSearchPort.
pub struct NeynarAdapter {
    client: ::neynar::NeynarClient,
}

impl NeynarAdapter {
    pub fn new(client: ::neynar::NeynarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserSearchPort for NeynarAdapter {
    async fn search_users(&self, query: &str) -> Result<serde_json::Value, UserSearchError> {
        self.client
            .search_users(query)
            .await
            .map_err(map_neynar_error)
    }
}

fn map_neynar_error(e: ::neynar::NeynarFetchError) -> UserSearchError {
    match e {
        ::neynar::NeynarFetchError::Unauthorized => UserSearchError::Unauthorized,
        ::neynar::NeynarFetchError::Status(status) => {
            UserSearchError::UpstreamStatus(status.as_u16())
        }
        ::neynar::NeynarFetchError::ResponseError(msg) => UserSearchError::Transport(msg),
        ::neynar::NeynarFetchError::ParsingError(msg) => UserSearchError::InvalidBody(msg),
    }
}
