//! Minimal client for the Neynar Farcaster API.
//!
//! Only the user search endpoint is covered. The client is constructed with
//! an explicit API key so callers decide where the credential comes from.

mod client;
pub mod domain;
mod neynar_url;

pub(crate) use neynar_url::*;

pub use client::*;
pub use domain::{User, UserSearchResponse, UserSearchResult};

/// Default location of the user search endpoint.
pub const DEFAULT_USER_SEARCH_URL: &str = "https://api.neynar.com/v2/farcaster/user/search";

/// Header Neynar reads the API key from.
pub const DEFAULT_API_KEY_HEADER: &str = "api_key";
