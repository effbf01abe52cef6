//! Shared types for the Stellar Burgers API harness
//!
//! Request and response bodies, the endpoint table, error types, test user
//! generation and tracing setup used by the tester crate.

pub mod endpoints;
pub mod errors;
pub mod logging;
pub mod types;
pub mod user_data;

pub use endpoints::{DEFAULT_BASE_URL, DEFAULT_URL, Endpoint, Endpoints};
pub use errors::*;
pub use types::*;
pub use user_data::generate_unique_user;
