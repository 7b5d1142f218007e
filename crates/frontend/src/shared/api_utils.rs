//! API utilities for talking to randomuser.me
//!
//! The endpoint and its query are fixed at compile time; nothing here is
//! configurable at runtime.

use serde::Serialize;

/// Base URL of the public random user API
pub const RANDOM_USER_API: &str = "https://randomuser.me/api/";

/// Query parameters for `GET /api/`
#[derive(Debug, Clone, Serialize)]
pub struct RandomUserQuery {
    pub results: u32,
}

impl Default for RandomUserQuery {
    fn default() -> Self {
        Self { results: 1 }
    }
}

/// Build a full API URL from a typed query
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::{api_url, RandomUserQuery};
///
/// let url = api_url(&RandomUserQuery { results: 1 });
/// assert_eq!(url, "https://randomuser.me/api/?results=1");
/// ```
pub fn api_url(query: &RandomUserQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", RANDOM_USER_API, qs),
        _ => RANDOM_USER_API.to_string(),
    }
}

/// URL used by the Login screen: exactly one user
pub fn random_user_url() -> String {
    api_url(&RandomUserQuery::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_url() {
        assert_eq!(random_user_url(), "https://randomuser.me/api/?results=1");
    }

    #[test]
    fn test_api_url_with_count() {
        assert_eq!(
            api_url(&RandomUserQuery { results: 5 }),
            "https://randomuser.me/api/?results=5"
        );
    }
}
