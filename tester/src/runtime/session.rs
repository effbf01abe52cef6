//! Client Session
//!
//! Per-client authentication state and the users the client is responsible for.

use shared::TestUser;

/// Bearer credential exactly as the service returned it (`"Bearer ..."`)
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Session owned by exactly one client instance
///
/// `token` always belongs to the most recently authenticated user, which is not
/// necessarily any particular tracked user.
#[derive(Debug, Default)]
pub struct ClientSession {
    token: Option<AccessToken>,
    tracked: Vec<TestUser>,
}

impl ClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn authenticate(&mut self, token: AccessToken) {
        self.token = Some(token);
    }

    /// Drop the token but keep tracked users
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn track(&mut self, user: TestUser) {
        self.tracked.push(user);
    }

    /// Point a tracked user at a new email; false if nothing matched
    pub fn rename_tracked(&mut self, old_email: &str, new_email: &str) -> bool {
        match self.tracked.iter_mut().find(|user| user.email == old_email) {
            Some(user) => {
                user.email = new_email.to_string();
                true
            }
            None => false,
        }
    }

    pub fn tracked(&self) -> &[TestUser] {
        &self.tracked
    }

    /// Hand over the tracked users, leaving the list empty
    pub fn take_tracked(&mut self) -> Vec<TestUser> {
        std::mem::take(&mut self.tracked)
    }

    /// Back to `NoToken` with nothing tracked
    pub fn reset(&mut self) {
        self.token = None;
        self.tracked.clear();
    }
}
