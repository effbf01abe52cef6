//! REST API Client for Stellar Burgers
//!
//! Wraps every endpoint the harness exercises and keeps the per-instance
//! session: the current bearer token and the users this client registered.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    ClientError, ClientResult, Endpoint, Endpoints, LoginRequest, LogoutRequest, OrderRequest,
    PasswordResetConfirmRequest, PasswordResetRequest, ProfileUpdate, RegisterRequest, TestUser,
    generate_unique_user,
};
use tracing::{debug, warn};

use super::session::{AccessToken, ClientSession};
use crate::config::ApiConfig;

/// Whether a request carries the session token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Bearer,
}

/// Status and raw body of a completed request
///
/// Non-2xx statuses are ordinary responses; only transport failures become errors.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn value(&self) -> ClientResult<serde_json::Value> {
        self.json()
    }

    /// The `message` field, if the body is JSON and has one
    pub fn message(&self) -> Option<String> {
        self.value()
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    /// The `success` flag, if the body is JSON and has one
    pub fn success(&self) -> Option<bool> {
        self.value().ok()?.get("success")?.as_bool()
    }
}

/// API client for the Stellar Burgers service
///
/// Each test owns one instance; the session is never shared.
pub struct StellarBurgersClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    pub(super) session: ClientSession,
}

impl StellarBurgersClient {
    /// Create a new API client
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            endpoints: config.endpoints()?,
            session: ClientSession::new(),
        })
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token().map(AccessToken::as_str)
    }

    pub fn tracked_users(&self) -> &[TestUser] {
        self.session.tracked()
    }

    /// Take responsibility for removing a user registered elsewhere
    pub fn track_user(&mut self, user: TestUser) {
        debug!("📌 Tracking user {} for cleanup", user.email);
        self.session.track(user);
    }

    /// Follow an email change made through `update_profile`
    pub fn rename_tracked(&mut self, old_email: &str, new_email: &str) -> bool {
        self.session.rename_tracked(old_email, new_email)
    }

    /// Register a fresh generated user
    pub async fn register_new_user(&mut self) -> ClientResult<(TestUser, ApiResponse)> {
        let user = generate_unique_user();
        let response = self.register_user(&user).await?;
        Ok((user, response))
    }

    pub async fn register_user(&mut self, user: &TestUser) -> ClientResult<ApiResponse> {
        self.register(&RegisterRequest::from(user)).await
    }

    /// Register with an arbitrary payload
    ///
    /// On 200 the returned token becomes current and a complete payload is tracked.
    pub async fn register(&mut self, request: &RegisterRequest) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::POST, Endpoint::Register, Auth::Anonymous, "register")?;
        let response = self.execute(builder.json(request), Endpoint::Register).await?;

        if response.status() == 200 {
            self.remember_token(&response, "register");
            if let Some(user) = request.to_test_user() {
                self.track_user(user);
            }
        }
        Ok(response)
    }

    /// Log in; on 200 the returned token replaces the current one. Never tracks.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::POST, Endpoint::Login, Auth::Anonymous, "login")?;
        let response = self
            .execute(builder.json(&LoginRequest { email, password }), Endpoint::Login)
            .await?;

        if response.status() == 200 {
            self.remember_token(&response, "login");
        }
        Ok(response)
    }

    /// Invalidate a refresh token; the stored access token is left alone
    pub async fn logout(&self, refresh_token: &str) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::POST, Endpoint::Logout, Auth::Anonymous, "logout")?;
        self.execute(builder.json(&LogoutRequest { token: refresh_token }), Endpoint::Logout)
            .await
    }

    pub async fn get_profile(&self) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::GET, Endpoint::User, Auth::Bearer, "get_profile")?;
        self.execute(builder, Endpoint::User).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::PATCH, Endpoint::User, Auth::Bearer, "update_profile")?;
        self.execute(builder.json(update), Endpoint::User).await
    }

    /// Delete the account the current token belongs to
    pub async fn delete_current_user(&self) -> ClientResult<ApiResponse> {
        let builder =
            self.request(Method::DELETE, Endpoint::User, Auth::Bearer, "delete_current_user")?;
        self.execute(builder, Endpoint::User).await
    }

    pub async fn get_ingredients(&self) -> ClientResult<ApiResponse> {
        let builder =
            self.request(Method::GET, Endpoint::Ingredients, Auth::Anonymous, "get_ingredients")?;
        self.execute(builder, Endpoint::Ingredients).await
    }

    pub async fn create_order(
        &self,
        ingredients: &[String],
        with_auth: bool,
    ) -> ClientResult<ApiResponse> {
        let auth = if with_auth { Auth::Bearer } else { Auth::Anonymous };
        let builder = self.request(Method::POST, Endpoint::Orders, auth, "create_order")?;
        self.execute(builder.json(&OrderRequest { ingredients }), Endpoint::Orders)
            .await
    }

    /// Order history of the current user
    pub async fn list_orders(&self) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::GET, Endpoint::Orders, Auth::Bearer, "list_orders")?;
        self.execute(builder, Endpoint::Orders).await
    }

    /// Public feed of recent orders
    pub async fn list_all_orders(&self) -> ClientResult<ApiResponse> {
        let builder =
            self.request(Method::GET, Endpoint::OrdersAll, Auth::Anonymous, "list_all_orders")?;
        self.execute(builder, Endpoint::OrdersAll).await
    }

    pub async fn request_password_reset(&self, email: &str) -> ClientResult<ApiResponse> {
        let builder = self.request(
            Method::POST,
            Endpoint::PasswordReset,
            Auth::Anonymous,
            "request_password_reset",
        )?;
        self.execute(builder.json(&PasswordResetRequest { email }), Endpoint::PasswordReset)
            .await
    }

    pub async fn confirm_password_reset(
        &self,
        password: &str,
        token: &str,
    ) -> ClientResult<ApiResponse> {
        let builder = self.request(
            Method::POST,
            Endpoint::PasswordResetConfirm,
            Auth::Anonymous,
            "confirm_password_reset",
        )?;
        self.execute(
            builder.json(&PasswordResetConfirmRequest { password, token }),
            Endpoint::PasswordResetConfirm,
        )
        .await
    }

    /// Raw request, for cases the typed operations do not cover
    /// (e.g. hitting a protected endpoint anonymously)
    pub async fn send(
        &self,
        method: Method,
        endpoint: Endpoint,
        auth: Auth,
        body: Option<&serde_json::Value>,
    ) -> ClientResult<ApiResponse> {
        let mut builder = self.request(method, endpoint, auth, "send")?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder, endpoint).await
    }

    /// Build a request, failing locally when a token is required but absent
    fn request(
        &self,
        method: Method,
        endpoint: Endpoint,
        auth: Auth,
        operation: &'static str,
    ) -> ClientResult<RequestBuilder> {
        let builder = self.http.request(method, self.endpoints.url(endpoint));
        match auth {
            Auth::Anonymous => Ok(builder),
            Auth::Bearer => {
                let token = self
                    .session
                    .token()
                    .ok_or(ClientError::MissingToken { operation })?;
                Ok(builder.header(reqwest::header::AUTHORIZATION, token.as_str()))
            }
        }
    }

    async fn execute(&self, builder: RequestBuilder, endpoint: Endpoint) -> ClientResult<ApiResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("🌐 {} -> {}", endpoint, status);
        Ok(ApiResponse::new(status, body))
    }

    fn remember_token(&mut self, response: &ApiResponse, operation: &str) {
        let token = response
            .value()
            .ok()
            .and_then(|body| body.get("accessToken")?.as_str().map(str::to_string));

        match token {
            Some(token) => {
                debug!("🔑 Session authenticated via {}", operation);
                self.session.authenticate(AccessToken::new(token));
            }
            None => warn!("⚠️ {} succeeded without an accessToken; keeping previous token", operation),
        }
    }
}

impl Drop for StellarBurgersClient {
    fn drop(&mut self) {
        let remaining = self.session.tracked().len();
        if remaining > 0 {
            warn!(
                "⚠️ API client dropped with {} tracked user(s) not cleaned up",
                remaining
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_helpers_read_json_fields() {
        let response = ApiResponse::new(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"message":"You should be authorised"}"#.to_string(),
        );
        assert_eq!(response.status(), 401);
        assert!(!response.is_success());
        assert_eq!(response.success(), Some(false));
        assert_eq!(response.message().as_deref(), Some("You should be authorised"));
    }

    #[test]
    fn test_response_helpers_tolerate_html() {
        let response = ApiResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>Internal Server Error</html>".to_string(),
        );
        assert_eq!(response.message(), None);
        assert_eq!(response.success(), None);
        assert!(matches!(response.value(), Err(ClientError::Decode { .. })));
    }

    #[test]
    fn test_bearer_request_without_token_fails_locally() {
        let client = StellarBurgersClient::new(&ApiConfig::default()).unwrap();
        let result = client.request(Method::GET, Endpoint::User, Auth::Bearer, "get_profile");
        match result {
            Err(ClientError::MissingToken { operation }) => assert_eq!(operation, "get_profile"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("request without token should not be built"),
        }
    }
}
