use async_trait::async_trait;

use crate::domain::UserSearchError;

/// Upstream user search provider.
///
/// Returns the provider's JSON body as-is so the HTTP layer can relay it
/// without dropping fields.
#[async_trait]
pub trait UserSearchPort: Send + Sync + 'static {
    async fn search_users(&self, query: &str) -> Result<serde_json::Value, UserSearchError>;
}
