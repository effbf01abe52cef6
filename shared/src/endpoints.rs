//! Endpoint table for the Stellar Burgers REST API

use std::fmt;
use std::sync::LazyLock;
use url::Url;

use crate::errors::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site";

/// `DEFAULT_BASE_URL` parsed once; the literal is covered by a unit test
pub static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    Login,
    Logout,
    User,
    Orders,
    OrdersAll,
    Ingredients,
    PasswordReset,
    PasswordResetConfirm,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Register => "/api/auth/register",
            Endpoint::Login => "/api/auth/login",
            Endpoint::Logout => "/api/auth/logout",
            Endpoint::User => "/api/auth/user",
            Endpoint::Orders => "/api/orders",
            Endpoint::OrdersAll => "/api/orders/all",
            Endpoint::Ingredients => "/api/ingredients",
            Endpoint::PasswordReset => "/api/password-reset",
            Endpoint::PasswordResetConfirm => "/api/password-reset/reset",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolves endpoints against a base URL
#[derive(Clone, Debug)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> ClientResult<Self> {
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig {
                field: "base_url".to_string(),
                value: base.to_string(),
            });
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for an endpoint; any path on the base URL is kept as a prefix
    pub fn url(&self, endpoint: Endpoint) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", endpoint.path()));
        url
    }
}
