//! Test fixtures
//!
//! Setup helpers: a fresh client per test, a registered user, and a couple of
//! real ingredient ids to build orders from.

use shared::{IngredientsResponse, TestUser};

use crate::config::ApiConfig;
use crate::error::{TesterError, TesterResult};
use crate::runtime::StellarBurgersClient;

/// Number of ingredient ids handed to order tests
pub const INGREDIENT_SAMPLE: usize = 2;

/// Fresh client with an empty session; callers run `cleanup()` when done
pub fn api_client(config: &ApiConfig) -> TesterResult<StellarBurgersClient> {
    Ok(StellarBurgersClient::new(config)?)
}

/// Register a generated user; the client ends up authenticated as them
pub async fn authenticated_user(client: &mut StellarBurgersClient) -> TesterResult<TestUser> {
    let (user, response) = client.register_new_user().await?;
    if response.status() != 200 {
        return Err(TesterError::fixture(format!(
            "Failed to create test user: {}",
            response.status()
        )));
    }
    Ok(user)
}

/// First few ingredient ids from the live catalogue
pub async fn ingredient_ids(client: &StellarBurgersClient) -> TesterResult<Vec<String>> {
    let response = client.get_ingredients().await?;
    if response.status() != 200 {
        return Err(TesterError::fixture("Failed to fetch ingredients for test setup"));
    }

    let body: IngredientsResponse = response.json()?;
    if !body.success {
        return Err(TesterError::fixture("Ingredients API returned success=false"));
    }

    let ids: Vec<String> = body
        .data
        .into_iter()
        .take(INGREDIENT_SAMPLE)
        .map(|ingredient| ingredient.id)
        .collect();

    if ids.is_empty() {
        return Err(TesterError::fixture("Ingredients API returned no ingredients"));
    }
    Ok(ids)
}
