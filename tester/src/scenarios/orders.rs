//! Order creation and order history scenarios

use reqwest::Method;
use shared::logging::log_step;
use shared::{Endpoint, OrderResponse, OrdersResponse};

use super::profile::NOT_AUTHORISED;
use crate::config::ApiConfig;
use crate::error::TesterResult;
use crate::fixtures;
use crate::runtime::{Auth, StellarBurgersClient};
use crate::testing::{expect_message, expect_status, expect_that};

pub const INGREDIENTS_REQUIRED: &str = "Ingredient ids must be provided";
pub const INVALID_INGREDIENT_ID: &str = "12345invalidID";

/// Authorized user gets an order number back
pub async fn order_with_auth(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    fixtures::authenticated_user(client).await?;
    let ingredients = fixtures::ingredient_ids(client).await?;

    log_step("order_with_auth", "Create order with valid ingredients");
    let response = client.create_order(&ingredients, true).await?;
    expect_status(&response, 200, "order with auth")?;
    let body: OrderResponse = response.json()?;
    expect_that(body.success, "Response 'success' should be true")
}

/// The service currently accepts anonymous orders; this records that behaviour
pub async fn order_without_auth(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    let ingredients = fixtures::ingredient_ids(client).await?;

    log_step("order_without_auth", "Create order without authentication");
    let response = client.create_order(&ingredients, false).await?;
    expect_status(&response, 200, "order without auth")?;
    let body: OrderResponse = response.json()?;
    expect_that(body.success, "Response 'success' should be true")
}

/// Empty ingredient list is a 400 with or without a token
pub async fn order_no_ingredients(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("order_no_ingredients", "Create anonymous order with empty ingredients list");
    let response = client.create_order(&[], false).await?;
    expect_status(&response, 400, "anonymous order without ingredients")?;
    expect_message(&response, INGREDIENTS_REQUIRED, "anonymous order without ingredients")?;

    fixtures::authenticated_user(client).await?;
    log_step("order_no_ingredients", "Create authorized order with empty ingredients list");
    let response = client.create_order(&[], true).await?;
    expect_status(&response, 400, "order without ingredients")?;
    expect_message(&response, INGREDIENTS_REQUIRED, "order without ingredients")
}

/// A malformed ingredient id makes the service fail with 500
pub async fn order_invalid_ingredient(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    fixtures::authenticated_user(client).await?;

    log_step("order_invalid_ingredient", "Create order with invalid ingredient ID");
    let response = client
        .create_order(&[INVALID_INGREDIENT_ID.to_string()], true)
        .await?;
    expect_status(&response, 500, "order with invalid ingredient id")
}

/// Order history lists the order just placed
pub async fn orders_with_auth(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    fixtures::authenticated_user(client).await?;
    let ingredients = fixtures::ingredient_ids(client).await?;

    log_step("orders_with_auth", "Create an order to ensure order history exists");
    let order = client.create_order(&ingredients[..1], true).await?;
    expect_status(&order, 200, "create test order")?;

    log_step("orders_with_auth", "Fetch user orders and verify response");
    let response = client.list_orders().await?;
    expect_status(&response, 200, "fetch user orders")?;
    let body: OrdersResponse = response.json()?;
    expect_that(body.success, "Response 'success' should be true")?;
    expect_that(!body.orders.is_empty(), "Order history should contain the new order")
}

/// Order history without a token is a 401
pub async fn orders_without_auth(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("orders_without_auth", "Fetch orders without authentication");
    let response = client
        .send(Method::GET, Endpoint::Orders, Auth::Anonymous, None)
        .await?;
    expect_status(&response, 401, "orders without auth")?;
    expect_message(&response, NOT_AUTHORISED, "orders without auth")
}

/// Public feed answers without a token
pub async fn orders_feed(_config: &ApiConfig, client: &mut StellarBurgersClient) -> TesterResult<()> {
    log_step("orders_feed", "Fetch the public order feed");
    let response = client.list_all_orders().await?;
    expect_status(&response, 200, "public order feed")?;
    let body: OrdersResponse = response.json()?;
    expect_that(body.success, "Response 'success' should be true")
}
