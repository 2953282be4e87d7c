use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A Farcaster user as returned by the user search endpoint.
///
/// Only the fields the search front-end needs are modelled; unknown fields are
/// ignored when deserializing. Counts that are missing or `null` read as 0.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub fid: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub follower_count: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub following_count: u64,
}

impl User {
    /// The name to show for this user: the display name when it is set and
    /// non-empty, otherwise the username.
    pub fn shown_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// Avatar URL, treating an empty string as absent.
    pub fn avatar_url(&self) -> Option<&str> {
        self.pfp_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSearchResult {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Body of `GET /v2/farcaster/user/search`:
/// `{ "result": { "users": [...] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSearchResponse {
    pub result: UserSearchResult,
}

impl UserSearchResponse {
    pub fn into_users(self) -> Vec<User> {
        self.result.users
    }
}
