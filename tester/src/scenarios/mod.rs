//! Test Scenarios
//!
//! Every case runs on its own client and is always followed by `cleanup()`.

pub mod auth;
pub mod orders;
pub mod profile;

use shared::CleanupReport;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;
use crate::error::{TesterError, TesterResult};
use crate::fixtures;
use crate::runtime::StellarBurgersClient;

pub const AUTH_CASES: &[&str] = &[
    "register_unique",
    "register_existing",
    "register_missing_field",
    "login_success",
    "login_wrong_password",
    "logout",
    "password_reset_request",
    "password_reset_invalid_token",
    "update_profile",
    "update_profile_unauthorized",
];

pub const ORDER_CASES: &[&str] = &[
    "order_with_auth",
    "order_without_auth",
    "order_no_ingredients",
    "order_invalid_ingredient",
    "orders_with_auth",
    "orders_without_auth",
    "orders_feed",
];

/// Outcome of one case plus what its cleanup left behind
#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub error: Option<String>,
    pub cleanup: CleanupReport,
    pub duration: Duration,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

pub struct TestScenarios {
    config: ApiConfig,
}

impl TestScenarios {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Resolve a case or group name to the cases it covers
    pub fn resolve(name: &str) -> TesterResult<Vec<&'static str>> {
        match name {
            "auth" => Ok(AUTH_CASES.to_vec()),
            "orders" => Ok(ORDER_CASES.to_vec()),
            "all" => Ok(AUTH_CASES.iter().chain(ORDER_CASES).copied().collect()),
            _ => AUTH_CASES
                .iter()
                .chain(ORDER_CASES)
                .find(|case| **case == name)
                .map(|case| vec![*case])
                .ok_or_else(|| TesterError::UnknownScenario {
                    name: name.to_string(),
                    available: Self::available_scenarios().join(", "),
                }),
        }
    }

    /// Run a specific scenario or group by name
    pub async fn run_scenario(&self, name: &str) -> TesterResult<Vec<ScenarioReport>> {
        let cases = Self::resolve(name)?;
        let mut reports = Vec::with_capacity(cases.len());
        for case in cases {
            reports.push(self.run_case(case).await?);
        }
        Ok(reports)
    }

    /// Run one case on a fresh client; the case failing does not skip cleanup
    pub async fn run_case(&self, name: &'static str) -> TesterResult<ScenarioReport> {
        tracing::info!("🧪 Running scenario '{}'", name);
        let started = Instant::now();

        let mut client = fixtures::api_client(&self.config)?;
        let outcome = dispatch(name, &self.config, &mut client).await;
        let cleanup = client.cleanup().await;

        let report = ScenarioReport {
            name,
            error: outcome.err().map(|err| err.to_string()),
            cleanup,
            duration: started.elapsed(),
        };

        match &report.error {
            None => tracing::info!("✅ Scenario '{}' passed in {:?}", name, report.duration),
            Some(err) => tracing::error!("❌ Scenario '{}' failed: {}", name, err),
        }
        Ok(report)
    }

    /// Get list of available scenarios
    pub fn available_scenarios() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = AUTH_CASES.iter().chain(ORDER_CASES).copied().collect();
        names.extend(["auth", "orders", "all"]);
        names
    }
}

async fn dispatch(
    name: &str,
    config: &ApiConfig,
    client: &mut StellarBurgersClient,
) -> TesterResult<()> {
    match name {
        "register_unique" => auth::register_unique(config, client).await,
        "register_existing" => auth::register_existing(config, client).await,
        "register_missing_field" => auth::register_missing_field(config, client).await,
        "login_success" => auth::login_success(config, client).await,
        "login_wrong_password" => auth::login_wrong_password(config, client).await,
        "logout" => auth::logout(config, client).await,
        "password_reset_request" => auth::password_reset_request(config, client).await,
        "password_reset_invalid_token" => auth::password_reset_invalid_token(config, client).await,
        "update_profile" => profile::update_profile(config, client).await,
        "update_profile_unauthorized" => profile::update_profile_unauthorized(config, client).await,
        "order_with_auth" => orders::order_with_auth(config, client).await,
        "order_without_auth" => orders::order_without_auth(config, client).await,
        "order_no_ingredients" => orders::order_no_ingredients(config, client).await,
        "order_invalid_ingredient" => orders::order_invalid_ingredient(config, client).await,
        "orders_with_auth" => orders::orders_with_auth(config, client).await,
        "orders_without_auth" => orders::orders_without_auth(config, client).await,
        "orders_feed" => orders::orders_feed(config, client).await,
        _ => Err(TesterError::UnknownScenario {
            name: name.to_string(),
            available: TestScenarios::available_scenarios().join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_resolve_to_cases() {
        assert_eq!(TestScenarios::resolve("auth").unwrap().len(), AUTH_CASES.len());
        assert_eq!(TestScenarios::resolve("orders").unwrap().len(), ORDER_CASES.len());
        assert_eq!(
            TestScenarios::resolve("all").unwrap().len(),
            AUTH_CASES.len() + ORDER_CASES.len()
        );
        assert_eq!(TestScenarios::resolve("logout").unwrap(), vec!["logout"]);
    }

    #[test]
    fn test_unknown_scenario_lists_available() {
        match TestScenarios::resolve("nope") {
            Err(TesterError::UnknownScenario { name, available }) => {
                assert_eq!(name, "nope");
                assert!(available.contains("register_unique"));
                assert!(available.ends_with("all"));
            }
            other => panic!("expected UnknownScenario, got {other:?}"),
        }
    }
}
