//! API Configuration Builder
//!
//! Provides a flexible builder pattern for constructing client configurations

use super::ApiConfig;
use shared::{ClientError, ClientResult};
use std::time::Duration;
use url::Url;

pub struct ApiConfigBuilder {
    config: ApiConfig,
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            base_url: None,
        }
    }

    /// Set the service base URL (scheme and host, optional path prefix)
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header value
    pub fn user_agent<S: Into<String>>(mut self, agent: S) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> ClientResult<ApiConfig> {
        if let Some(raw) = self.base_url {
            let url = Url::parse(raw.trim()).map_err(|_| ClientError::InvalidConfig {
                field: "base_url".to_string(),
                value: raw.clone(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ClientError::InvalidConfig {
                    field: "base_url".to_string(),
                    value: raw,
                });
            }
            self.config.base_url = url;
        }

        if self.config.timeout.is_zero() {
            return Err(ClientError::InvalidConfig {
                field: "timeout".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(self.config)
    }
}

impl Default for ApiConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
