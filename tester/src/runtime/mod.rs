//! Runtime Management
//!
//! The API client, its session and the cleanup pass run at the end of a test.

pub mod api_client;
pub mod cleanup;
pub mod session;

// Re-export main types
pub use api_client::{ApiResponse, Auth, StellarBurgersClient};
pub use session::{AccessToken, ClientSession};
