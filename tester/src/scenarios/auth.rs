//! Registration, login, logout and password reset scenarios

use shared::logging::log_step;
use shared::{AuthResponse, TestUser, UserField, generate_unique_user};

use crate::config::ApiConfig;
use crate::error::TesterResult;
use crate::fixtures;
use crate::runtime::{ApiResponse, StellarBurgersClient};
use crate::testing::{expect_message, expect_status, expect_status_in, expect_success, expect_that};

pub const USER_EXISTS: &str = "User already exists";
pub const REQUIRED_FIELDS: &str = "Email, password and name are required fields";
pub const INCORRECT_CREDENTIALS: &str = "email or password are incorrect";

/// Register a new unique user and get both tokens back
pub async fn register_unique(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("register_unique", "Register new user and verify successful response");
    let user = generate_unique_user();
    let response = client.register_user(&user).await?;
    expect_status(&response, 200, "successful registration")?;

    expect_auth_body(&response, &user)
}

/// Registering the same payload twice is rejected
pub async fn register_existing(config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("register_existing", "Register user first time");
    let user = generate_unique_user();
    let first = client.register_user(&user).await?;
    expect_status(&first, 200, "first registration")?;

    log_step("register_existing", "Attempt duplicate registration from a separate client");
    let mut second = fixtures::api_client(config)?;
    let response = second.register_user(&user).await?;
    let outcome = expect_status(&response, 403, "duplicate registration")
        .and_then(|_| expect_message(&response, USER_EXISTS, "duplicate registration"));
    second.cleanup().await;
    outcome
}

/// Each of email, password and name is mandatory
pub async fn register_missing_field(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    for field in UserField::ALL {
        log_step("register_missing_field", &format!("Register user without '{field}'"));
        let request = generate_unique_user().without(field);
        let response = client.register(&request).await?;
        expect_status(&response, 403, &format!("registration without {field}"))?;
        expect_message(&response, REQUIRED_FIELDS, &format!("registration without {field}"))?;
    }
    Ok(())
}

/// Correct credentials return tokens for the same user
pub async fn login_success(config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("login_success", "Register user for login test");
    let user = fixtures::authenticated_user(client).await?;

    log_step("login_success", "Login with valid credentials from a fresh client");
    // Only `client` tracks the user; its cleanup removes the account.
    let mut login_client = fixtures::api_client(config)?;
    let response = login_client.login(&user.email, &user.password).await?;
    expect_status(&response, 200, "successful login")?;
    expect_auth_body(&response, &user)
}

/// Register/login body carries both tokens and echoes the user
fn expect_auth_body(response: &ApiResponse, user: &TestUser) -> TesterResult<()> {
    let body: AuthResponse = response.json()?;
    expect_that(body.success, "Response 'success' should be true")?;
    expect_that(body.access_token.starts_with("Bearer "), "No bearer accessToken in response")?;
    expect_that(!body.refresh_token.is_empty(), "No refreshToken in response")?;
    expect_that(body.user.email == user.email, "Returned email differs")?;
    expect_that(body.user.name == user.name, "Returned name differs")
}

/// A wrong password is rejected with 401
pub async fn login_wrong_password(config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("login_wrong_password", "Register user and attempt login with wrong password");
    let user = fixtures::authenticated_user(client).await?;

    let mut login_client = fixtures::api_client(config)?;
    let response = login_client.login(&user.email, "WrongPassword123").await?;
    expect_status(&response, 401, "invalid login")?;
    expect_message(&response, INCORRECT_CREDENTIALS, "invalid login")?;
    expect_that(login_client.token().is_none(), "Rejected login must not set a token")
}

/// Logout with the refresh token from registration
pub async fn logout(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("logout", "Register user and logout with refresh token");
    let (_, registration) = client.register_new_user().await?;
    expect_status(&registration, 200, "registration")?;
    let body: AuthResponse = registration.json()?;
    expect_that(!body.refresh_token.is_empty(), "Refresh token not returned")?;

    let response = client.logout(&body.refresh_token).await?;
    expect_status(&response, 200, "logout")?;
    expect_success(&response, true, "logout")?;
    expect_message(&response, "Successful logout", "logout")
}

/// Reset email request is acknowledged
pub async fn password_reset_request(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("password_reset_request", "Request password reset and verify response");
    let email = format!("reset_test_{}", generate_unique_user().email);
    let response = client.request_password_reset(&email).await?;
    expect_status(&response, 200, "password reset request")?;
    expect_success(&response, true, "password reset request")?;
    expect_message(&response, "Reset email sent", "password reset request")
}

/// Confirming a reset with a made-up token fails
pub async fn password_reset_invalid_token(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("password_reset_invalid_token", "Attempt password reset with invalid token");
    let response = client
        .confirm_password_reset("newpass123", "invalid-token-123")
        .await?;
    expect_status_in(&response, &[403, 404, 500], "password reset with invalid token")?;
    expect_success(&response, false, "password reset with invalid token")
}
