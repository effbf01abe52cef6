//! Shared error types for the API client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No auth token available for {operation}. Please login first.")]
    MissingToken { operation: &'static str },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {message}")]
    Decode { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode { message: err.to_string() }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
