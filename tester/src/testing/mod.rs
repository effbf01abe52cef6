//! Testing Framework
//!
//! Assertion helpers shared by scenarios and integration tests.

pub mod assertions;

pub use assertions::{expect_message, expect_status, expect_status_in, expect_success, expect_that};
