//! Profile read/update scenarios

use reqwest::Method;
use serde_json::json;
use shared::logging::log_step;
use shared::{Endpoint, ProfileUpdate, UserResponse};

use crate::config::ApiConfig;
use crate::error::TesterResult;
use crate::fixtures;
use crate::runtime::{Auth, StellarBurgersClient};
use crate::testing::{expect_message, expect_status, expect_that};

pub const NOT_AUTHORISED: &str = "You should be authorised";

/// Authenticated user changes name and email
pub async fn update_profile(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    fixtures::authenticated_user(client).await?;

    log_step("update_profile", "Update user profile and verify changes");
    let current = client.get_profile().await?;
    expect_status(&current, 200, "get user info")?;
    let current: UserResponse = current.json()?;

    let new_name = "NewName";
    let new_email = format!("new_{}", current.user.email);
    let update = ProfileUpdate::default().name(new_name).email(new_email.clone());

    let response = client.update_profile(&update).await?;
    expect_status(&response, 200, "profile update")?;

    // Cleanup logs in by email, so follow the stored one before any check can fail.
    let body = response.json::<UserResponse>();
    let stored_email = match &body {
        Ok(body) => body.user.email.clone(),
        Err(_) => new_email.clone(),
    };
    client.rename_tracked(&current.user.email, &stored_email);

    let body = body?;
    expect_that(body.success, "Response 'success' should be true")?;
    expect_that(body.user.name == new_name, "Name was not updated")?;
    expect_that(body.user.email == new_email, "Email was not updated")
}

/// Anonymous update is rejected and leaves the profile unchanged
pub async fn update_profile_unauthorized(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    fixtures::authenticated_user(client).await?;

    let before = client.get_profile().await?;
    expect_status(&before, 200, "get user info")?;
    let original: UserResponse = before.json()?;

    log_step("update_profile_unauthorized", "Attempt unauthorized update and verify error");
    let body = json!({ "name": "UnauthorizedName" });
    let response = client
        .send(Method::PATCH, Endpoint::User, Auth::Anonymous, Some(&body))
        .await?;
    expect_status(&response, 401, "update without auth")?;
    expect_message(&response, NOT_AUTHORISED, "update without auth")?;

    log_step("update_profile_unauthorized", "Verify user data unchanged");
    let after = client.get_profile().await?;
    expect_status(&after, 200, "get user info")?;
    let profile: UserResponse = after.json()?;
    expect_that(
        profile.user.name == original.user.name,
        "User name changed despite unauthorized update!",
    )
}
