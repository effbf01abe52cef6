//! Core shared types for the Stellar Burgers API
//!
//! Request payloads sent by the harness and the response bodies it reads back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Test account created by the harness; identity is the email
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// One of the three registration fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Email,
    Password,
    Name,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Email, UserField::Password, UserField::Name];
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserField::Email => write!(f, "email"),
            UserField::Password => write!(f, "password"),
            UserField::Name => write!(f, "name"),
        }
    }
}

impl TestUser {
    /// Registration payload with one field left out
    pub fn without(&self, field: UserField) -> RegisterRequest {
        let mut request = RegisterRequest::from(self);
        match field {
            UserField::Email => request.email = None,
            UserField::Password => request.password = None,
            UserField::Name => request.name = None,
        }
        request
    }
}

/// Body of POST /api/auth/register
///
/// Fields are optional so that incomplete payloads can be sent on purpose;
/// absent fields are omitted from the JSON entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RegisterRequest {
    /// The complete user this payload describes, if no field is missing
    pub fn to_test_user(&self) -> Option<TestUser> {
        Some(TestUser {
            email: self.email.clone()?,
            password: self.password.clone()?,
            name: self.name.clone()?,
        })
    }
}

impl From<&TestUser> for RegisterRequest {
    fn from(user: &TestUser) -> Self {
        Self {
            email: Some(user.email.clone()),
            password: Some(user.password.clone()),
            name: Some(user.name.clone()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub token: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordResetConfirmRequest<'a> {
    pub password: &'a str,
    pub token: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub ingredients: &'a [String],
}

/// Body of PATCH /api/auth/user; only the provided fields change
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
}

/// Successful register/login body
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// GET/PATCH /api/auth/user body
#[derive(Clone, Debug, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// Generic `{success, message}` body used by errors and simple acknowledgements
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IngredientsResponse {
    pub success: bool,
    pub data: Vec<Ingredient>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderNumber {
    pub number: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default)]
    pub name: Option<String>,
    pub order: OrderNumber,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderSummary {
    pub number: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderSummary>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_today: Option<u64>,
}

/// What went wrong for one tracked user during cleanup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CleanupFailureKind {
    /// Login as the tracked user did not return 200
    LoginRejected,
    /// Delete returned a status outside 200/204/404
    DeleteRejected,
    /// Transport error or local usage error while talking to the service
    RequestFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanupFailure {
    pub kind: CleanupFailureKind,
    pub email: String,
    pub status: Option<u16>,
    pub message: String,
}

impl fmt::Display for CleanupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status) {
            (CleanupFailureKind::LoginRejected, Some(status)) => {
                write!(f, "Failed to login user {} for cleanup: {}", self.email, status)
            }
            (CleanupFailureKind::LoginRejected, None) => {
                write!(f, "Failed to login user {} for cleanup", self.email)
            }
            (CleanupFailureKind::DeleteRejected, Some(status)) => {
                write!(f, "Failed to delete user {}: {}", self.email, status)
            }
            (CleanupFailureKind::DeleteRejected, None) => {
                write!(f, "Failed to delete user {}: {}", self.email, self.message)
            }
            (CleanupFailureKind::RequestFailed, _) => {
                write!(f, "Error during cleanup for {}: {}", self.email, self.message)
            }
        }
    }
}

/// Outcome of a best-effort cleanup pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub attempted: usize,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn deleted(&self) -> usize {
        self.attempted.saturating_sub(self.failures.len())
    }

    /// Human-readable failure lines in the order they happened
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    pub fn record(&mut self, failure: CleanupFailure) {
        self.failures.push(failure);
    }
}
