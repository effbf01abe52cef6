//! API Client Configuration
//!
//! Where the service lives and how long to wait for it

use shared::{ClientError, ClientResult, DEFAULT_URL, Endpoints};
use std::time::Duration;
use url::Url;

pub const BASE_URL_VAR: &str = "STELLAR_BURGERS_URL";
pub const TIMEOUT_VAR: &str = "STELLAR_BURGERS_TIMEOUT_SECS";

/// Values given on the command line; each one shadows its environment variable
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Wrap a lookup so overridden keys never reach it
    pub fn apply<'a, F>(&'a self, lookup: F) -> impl Fn(&str) -> Option<String> + 'a
    where
        F: Fn(&str) -> Option<String> + 'a,
    {
        move |key| match key {
            BASE_URL_VAR if self.base_url.is_some() => self.base_url.clone(),
            TIMEOUT_VAR if self.timeout_secs.is_some() => self.timeout_secs.map(|secs| secs.to_string()),
            _ => lookup(key),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.clone(),
            timeout: Duration::from_secs(30),
            user_agent: format!("stellar-tester/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Create a new builder
    pub fn builder() -> crate::config::builder::ApiConfigBuilder {
        crate::config::builder::ApiConfigBuilder::new()
    }

    /// Load `.env` if present, then read overrides from the environment
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with command-line values taking precedence
    pub fn from_env_with(overrides: &ConfigOverrides) -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(overrides.apply(|key| std::env::var(key).ok()))
    }

    /// Build from a key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup(BASE_URL_VAR) {
            builder = builder.base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ClientError::InvalidConfig {
                field: TIMEOUT_VAR.to_string(),
                value: raw.clone(),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn endpoints(&self) -> ClientResult<Endpoints> {
        Endpoints::new(self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "https://stellarburgers.nomoreparties.site/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://127.0.0.1:9000"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_shadow_invalid_environment() {
        let overrides = ConfigOverrides {
            base_url: Some("http://127.0.0.1:7000".to_string()),
            timeout_secs: Some(9),
        };
        let env = lookup_from(&[(BASE_URL_VAR, "::bad::"), (TIMEOUT_VAR, "soon")]);

        let config = ApiConfig::from_lookup(overrides.apply(env)).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:7000/");
        assert_eq!(config.timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_unset_overrides_fall_through_to_environment() {
        let overrides = ConfigOverrides::default();
        let env = lookup_from(&[(TIMEOUT_VAR, "4")]);

        let config = ApiConfig::from_lookup(overrides.apply(env)).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = ApiConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        match result {
            Err(ClientError::InvalidConfig { field, value }) => {
                assert_eq!(field, TIMEOUT_VAR);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}
