//! Bearer token handling for the Mealie API.
//!
//! The token is the only state shared between calls. It can be supplied up
//! front (a long-lived API token from the user profile page), obtained by
//! logging in with a username and password, or refreshed from an existing
//! session.
//!
//! ## Concurrency
//!
//! The token sits behind a lock so a client can be shared across tasks. Updates
//! are last-write-wins: a call already in flight when [`ApiCore::authenticate`]
//! stores a new token keeps using the token it was built with.

use std::sync::RwLock;

use reqwest::Method;

use crate::client::api::{ApiCore, RequestBody, RequestOptions};
use crate::client::error::Result;
use crate::client::types::AuthToken;

const TOKEN_PATH: &str = "/api/auth/token";
const REFRESH_PATH: &str = "/api/auth/refresh";

/// Holds the current bearer token.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token.filter(|t| !t.is_empty())),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.into());
    }

    pub fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    /// First ten characters of the token, for log output.
    pub fn preview(&self) -> Option<String> {
        self.get()
            .map(|t| format!("{}...", t.chars().take(10).collect::<String>()))
    }
}

impl ApiCore {
    /// Exchanges a username and password for an access token and stores it.
    ///
    /// Credentials go out form-encoded, as the token endpoint expects. Failures
    /// are normalized like any other call; the stored token is left unchanged.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthToken> {
        let options = RequestOptions::new(Method::POST).body(RequestBody::Form(vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]));

        let token: AuthToken = self.request(TOKEN_PATH, options).await?;

        self.token.set(token.access_token.clone());
        Ok(token)
    }

    /// Trades the current token for a fresh one and stores it.
    pub async fn refresh_token(&self) -> Result<AuthToken> {
        let token: AuthToken = self
            .request(REFRESH_PATH, RequestOptions::new(Method::GET))
            .await?;

        self.token.set(token.access_token.clone());
        Ok(token)
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.token.set(token);
    }

    pub fn clear_token(&self) {
        self.token.clear();
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }
}
