use crate::{RandomUserError, RandomUserResponse, RandomUserResult};

use pc_core::UserRecord;

use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;

/// HTTP client for the random-profile service
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl RandomUserClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL without the `/api/` suffix (e.g., "https://randomuser.me")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> RandomUserResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch `results` freshly generated profiles, already shaped as records.
    ///
    /// The count is passed through unchecked; bounds are the caller's call.
    pub async fn fetch(&self, results: u32) -> RandomUserResult<Vec<UserRecord>> {
        let url = format!("{}/api/?results={}", self.base_url, results);
        debug!("Fetching {} random profile(s) from {}", results, self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RandomUserError::status(status.as_u16()));
        }

        let body: RandomUserResponse = response.json().await?;
        Ok(body.results.into_iter().map(UserRecord::from).collect())
    }
}
