//! Configuration Management
//!
//! Configuration structures and builders for the API client.

pub mod api;
pub mod builder;

// Re-export main types
pub use api::{ApiConfig, ConfigOverrides};
pub use builder::ApiConfigBuilder;
