//! Tester error types

use shared::ClientError;
use thiserror::Error;

/// Result type for fixtures, assertions and scenarios
pub type TesterResult<T> = Result<T, TesterError>;

#[derive(Error, Debug)]
pub enum TesterError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Fixture setup failed: {message}")]
    Fixture { message: String },

    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    #[error("Unknown test scenario: '{name}'. Available: {available}")]
    UnknownScenario { name: String, available: String },
}

impl TesterError {
    pub fn assertion<S: Into<String>>(message: S) -> Self {
        TesterError::Assertion { message: message.into() }
    }

    pub fn fixture<S: Into<String>>(message: S) -> Self {
        TesterError::Fixture { message: message.into() }
    }
}
