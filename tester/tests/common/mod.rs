//! Test helper utilities for client integration tests

#![allow(dead_code)] // Not every test binary uses every helper

use serde_json::{Value, json};
use shared::TestUser;
use std::net::TcpListener;
use std::time::Duration;
use stellar_tester::{ApiConfig, StellarBurgersClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fake_service;

/// Short-timeout config for the given base URL
pub fn config_for(base_url: &str) -> ApiConfig {
    ApiConfig::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("test config is valid")
}

/// Create a client pointed at the given base URL
pub fn client_for(base_url: &str) -> StellarBurgersClient {
    StellarBurgersClient::new(&config_for(base_url)).expect("client builds")
}

/// Base URL of a port nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Register/login success body for a user
pub fn auth_body(user: &TestUser, token: &str) -> Value {
    json!({
        "success": true,
        "accessToken": token,
        "refreshToken": format!("refresh-{}", user.email),
        "user": { "email": user.email, "name": user.name }
    })
}

pub fn error_body(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// Register any payload with a 200 and the given token
pub async fn mount_register(server: &MockServer, user: &TestUser, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body(user, token)))
        .mount(server)
        .await;
}

/// Login for exactly this user's credentials
pub async fn mount_login(server: &MockServer, user: &TestUser, status: u16, token: &str) {
    let body = if status == 200 {
        auth_body(user, token)
    } else {
        error_body("email or password are incorrect")
    };
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": user.email, "password": user.password })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Delete answered with `status` when called with `token`, expected `times` times
pub async fn mount_delete(server: &MockServer, token: &str, status: u16, times: u64) {
    Mock::given(method("DELETE"))
        .and(path("/api/auth/user"))
        .and(header("Authorization", token))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({ "success": true, "message": "User successfully removed" })),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Emails of login requests in the order the server received them
pub async fn login_order(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == "/api/auth/login")
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .filter_map(|body| body.get("email")?.as_str().map(str::to_string))
        .collect()
}
