//! Response Assertions
//!
//! Checks over `ApiResponse` that fail with a descriptive `TesterError::Assertion`
//! instead of panicking, so a scenario can still run its cleanup.

use crate::error::{TesterError, TesterResult};
use crate::runtime::ApiResponse;

/// Assert the exact status code
pub fn expect_status(response: &ApiResponse, expected: u16, context: &str) -> TesterResult<()> {
    if response.status() == expected {
        Ok(())
    } else {
        Err(TesterError::assertion(format!(
            "{context}: expected status {expected}, got {} (body: {})",
            response.status(),
            truncate(response.text())
        )))
    }
}

/// Assert the status is one of several accepted codes
pub fn expect_status_in(response: &ApiResponse, accepted: &[u16], context: &str) -> TesterResult<()> {
    if accepted.contains(&response.status()) {
        Ok(())
    } else {
        Err(TesterError::assertion(format!(
            "{context}: expected status in {accepted:?}, got {}",
            response.status()
        )))
    }
}

/// Assert the body's `success` flag
pub fn expect_success(response: &ApiResponse, expected: bool, context: &str) -> TesterResult<()> {
    match response.success() {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(TesterError::assertion(format!(
            "{context}: expected success={expected}, got {actual:?}"
        ))),
    }
}

/// Assert the body's `message` field exactly
pub fn expect_message(response: &ApiResponse, expected: &str, context: &str) -> TesterResult<()> {
    match response.message() {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(TesterError::assertion(format!(
            "{context}: unexpected error message: {actual:?}, expected {expected:?}"
        ))),
    }
}

/// Assert an arbitrary condition
pub fn expect_that(condition: bool, message: &str) -> TesterResult<()> {
    if condition {
        Ok(())
    } else {
        Err(TesterError::assertion(message))
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn forbidden() -> ApiResponse {
        ApiResponse::new(
            StatusCode::FORBIDDEN,
            r#"{"success":false,"message":"User already exists"}"#.to_string(),
        )
    }

    #[test]
    fn test_matching_expectations_pass() {
        let response = forbidden();
        assert!(expect_status(&response, 403, "duplicate").is_ok());
        assert!(expect_status_in(&response, &[403, 404], "duplicate").is_ok());
        assert!(expect_success(&response, false, "duplicate").is_ok());
        assert!(expect_message(&response, "User already exists", "duplicate").is_ok());
    }

    #[test]
    fn test_mismatch_reports_context() {
        let err = expect_status(&forbidden(), 200, "register").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("register: expected status 200, got 403"));
        assert!(text.contains("User already exists"));
    }

    #[test]
    fn test_missing_message_fails() {
        let response = ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string());
        assert!(expect_message(&response, "anything", "order").is_err());
        assert!(expect_success(&response, false, "order").is_err());
    }

    #[test]
    fn test_truncate_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long).len(), 200);
        assert_eq!(truncate("short"), "short");
    }
}
