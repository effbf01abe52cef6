//! Stellar Burgers API test harness
//!
//! End-to-end checks against the Stellar Burgers food-ordering REST API.
//!
//! ## Main Interface
//!
//! [`StellarBurgersClient`] wraps the endpoints and owns a session: the current
//! bearer token and the users it registered. Every test owns one client and ends
//! with [`StellarBurgersClient::cleanup`], which deletes those users on a best-effort
//! basis and never fails.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stellar_tester::*;
//!
//! # async fn run() -> Result<(), TesterError> {
//! let config = ApiConfig::from_env()?;
//! let mut client = fixtures::api_client(&config)?;
//!
//! let user = fixtures::authenticated_user(&mut client).await?;
//! let profile = client.get_profile().await?;
//! testing::expect_status(&profile, 200, "profile")?;
//!
//! let report = client.cleanup().await;
//! assert!(report.is_clean(), "{:?} left behind", user.email);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod fixtures;
pub mod runtime;
pub mod scenarios;
pub mod testing;

// Main interfaces - re-exported at crate root for convenience
pub use config::{ApiConfig, ApiConfigBuilder, ConfigOverrides};
pub use error::{TesterError, TesterResult};
pub use runtime::{ApiResponse, Auth, StellarBurgersClient};

// Supporting types
pub use runtime::{AccessToken, ClientSession};
pub use scenarios::{ScenarioReport, TestScenarios};
