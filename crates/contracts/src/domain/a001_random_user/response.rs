use serde::{Deserialize, Serialize};

use super::aggregate::UserRecord;

/// Envelope returned by `GET /api/?results=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<UserRecord>,
    pub info: ResponseInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}

impl RandomUserResponse {
    /// First result of the batch (we always request exactly one)
    pub fn into_first(self) -> Option<UserRecord> {
        self.results.into_iter().next()
    }
}
