//! In-memory stand-in for the account endpoints
//!
//! Registered accounts can log in, read and update their profile, and be
//! deleted; a deleted account can no longer log in.

use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

#[derive(Clone, Debug)]
struct Account {
    email: String,
    password: String,
    name: String,
}

#[derive(Default)]
struct State {
    accounts: HashMap<u64, Account>,
    tokens: HashMap<String, u64>,
    next_id: u64,
    ignore_name_updates: bool,
}

#[derive(Clone, Default)]
pub struct FakeAccounts {
    state: Arc<Mutex<State>>,
}

impl FakeAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile updates change the email but keep the old name
    pub fn ignore_name_updates(&self) {
        self.state.lock().unwrap().ignore_name_updates = true;
    }

    pub fn account_count(&self) -> usize {
        self.state.lock().unwrap().accounts.len()
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(any()).respond_with(self.clone()).mount(server).await;
    }
}

impl Respond for FakeAccounts {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let token = request
            .headers
            .iter()
            .find(|(name, _)| name.as_str().eq_ignore_ascii_case("authorization"))
            .map(|(_, values)| values.last().as_str().to_string());

        match (request.method.to_string().as_str(), request.url.path()) {
            ("POST", "/api/auth/register") => state.register(&body),
            ("POST", "/api/auth/login") => state.login(&body),
            ("GET", "/api/auth/user") => state.with_account(token, user_body),
            ("PATCH", "/api/auth/user") => {
                let ignore_name = state.ignore_name_updates;
                state.with_account_mut(token, |account| {
                    if let Some(email) = body.get("email").and_then(Value::as_str) {
                        account.email = email.to_string();
                    }
                    if let Some(name) = body.get("name").and_then(Value::as_str) {
                        if !ignore_name {
                            account.name = name.to_string();
                        }
                    }
                    user_body(account)
                })
            }
            ("DELETE", "/api/auth/user") => state.delete(token),
            _ => ResponseTemplate::new(404),
        }
    }
}

impl State {
    fn register(&mut self, body: &Value) -> ResponseTemplate {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        let (Some(email), Some(password), Some(name)) = (field("email"), field("password"), field("name")) else {
            return error(403, "Email, password and name are required fields");
        };
        if self.accounts.values().any(|account| account.email == email) {
            return error(403, "User already exists");
        }

        self.next_id += 1;
        let id = self.next_id;
        self.accounts.insert(id, Account { email, password, name });
        self.issue_token(id)
    }

    fn login(&mut self, body: &Value) -> ResponseTemplate {
        let email = body.get("email").and_then(Value::as_str);
        let password = body.get("password").and_then(Value::as_str);
        let found = self
            .accounts
            .iter()
            .find(|(_, account)| Some(account.email.as_str()) == email && Some(account.password.as_str()) == password)
            .map(|(id, _)| *id);

        match found {
            Some(id) => self.issue_token(id),
            None => error(401, "email or password are incorrect"),
        }
    }

    fn issue_token(&mut self, id: u64) -> ResponseTemplate {
        let token = format!("Bearer token-{id}-{}", self.tokens.len());
        self.tokens.insert(token.clone(), id);
        let account = &self.accounts[&id];
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "accessToken": token,
            "refreshToken": format!("refresh-{id}"),
            "user": { "email": account.email, "name": account.name }
        }))
    }

    fn with_account<F>(&self, token: Option<String>, f: F) -> ResponseTemplate
    where
        F: FnOnce(&Account) -> Value,
    {
        match token.and_then(|token| self.tokens.get(&token)).and_then(|id| self.accounts.get(id)) {
            Some(account) => ResponseTemplate::new(200).set_body_json(f(account)),
            None => error(401, "You should be authorised"),
        }
    }

    fn with_account_mut<F>(&mut self, token: Option<String>, f: F) -> ResponseTemplate
    where
        F: FnOnce(&mut Account) -> Value,
    {
        let id = token.and_then(|token| self.tokens.get(&token).copied());
        match id.and_then(|id| self.accounts.get_mut(&id)) {
            Some(account) => ResponseTemplate::new(200).set_body_json(f(account)),
            None => error(401, "You should be authorised"),
        }
    }

    fn delete(&mut self, token: Option<String>) -> ResponseTemplate {
        let id = token.and_then(|token| self.tokens.get(&token).copied());
        match id.and_then(|id| self.accounts.remove(&id)) {
            Some(_) => ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "User successfully removed" })),
            None => error(401, "You should be authorised"),
        }
    }
}

fn user_body(account: &Account) -> Value {
    json!({ "success": true, "user": { "email": account.email, "name": account.name } })
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "success": false, "message": message }))
}
