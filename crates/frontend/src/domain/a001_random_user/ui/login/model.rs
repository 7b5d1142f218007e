//! API layer for the Login screen

use crate::shared::api_utils::random_user_url;
use contracts::domain::a001_random_user::{RandomUserResponse, UserRecord};
use gloo_net::http::Request;
use thiserror::Error;

/// Ways the single outbound fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Response contained no users")]
    EmptyResults,
}

/// GET one random user. No retry, no timeout.
pub async fn fetch_random_user() -> Result<UserRecord, FetchError> {
    let url = random_user_url();
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_random_user(&text)
}

/// Decode the response body and take its first result
pub fn decode_random_user(body: &str) -> Result<UserRecord, FetchError> {
    let envelope: RandomUserResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    envelope.into_first().ok_or(FetchError::EmptyResults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::sample_user_json;
    use serde_json::json;

    fn envelope(results: Vec<serde_json::Value>) -> String {
        json!({
            "results": results,
            "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
        })
        .to_string()
    }

    #[test]
    fn test_decode_first_result() {
        let user = decode_random_user(&envelope(vec![sample_user_json()])).unwrap();
        assert_eq!(user.login.username, "bigkoala482");
    }

    #[test]
    fn test_decode_empty_results() {
        let err = decode_random_user(&envelope(vec![])).unwrap_err();
        assert!(matches!(err, FetchError::EmptyResults));
    }

    #[test]
    fn test_decode_incomplete_record() {
        let mut user = sample_user_json();
        user["location"].as_object_mut().unwrap().remove("coordinates");

        let err = decode_random_user(&envelope(vec![user])).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().contains("coordinates"));
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_random_user("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
