use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RANDOM_USER_BASE_URL, DEFAULT_RANDOM_USER_MAX_RESULTS,
    DEFAULT_RANDOM_USER_RESULTS, DEFAULT_RANDOM_USER_TIMEOUT_SECS, MAX_RANDOM_USER_RESULTS,
    MAX_RANDOM_USER_TIMEOUT_SECS, MIN_RANDOM_USER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Upstream random-profile service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RandomUserConfig {
    pub base_url: String,
    /// Profiles fetched when the request names no count
    pub default_results: u32,
    /// Largest count a single request may ask for
    pub max_results: u32,
    pub timeout_secs: u64,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_RANDOM_USER_BASE_URL),
            default_results: DEFAULT_RANDOM_USER_RESULTS,
            max_results: DEFAULT_RANDOM_USER_MAX_RESULTS,
            timeout_secs: DEFAULT_RANDOM_USER_TIMEOUT_SECS,
        }
    }
}

impl RandomUserConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::random_user(format!(
                "random_user.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.max_results == 0 || self.max_results > MAX_RANDOM_USER_RESULTS {
            return Err(ConfigError::random_user(format!(
                "random_user.max_results must be 1-{}, got {}",
                MAX_RANDOM_USER_RESULTS, self.max_results
            )));
        }

        if self.default_results == 0 || self.default_results > self.max_results {
            return Err(ConfigError::random_user(format!(
                "random_user.default_results must be 1-{}, got {}",
                self.max_results, self.default_results
            )));
        }

        if self.timeout_secs < MIN_RANDOM_USER_TIMEOUT_SECS
            || self.timeout_secs > MAX_RANDOM_USER_TIMEOUT_SECS
        {
            return Err(ConfigError::random_user(format!(
                "random_user.timeout_secs must be {}-{}, got {}",
                MIN_RANDOM_USER_TIMEOUT_SECS, MAX_RANDOM_USER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
