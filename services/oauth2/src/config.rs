use std::fmt::{Debug, Formatter};

use super::constants::*;
use reqauth_core::{utils::Redact, Context};

/// Config carries all the configuration for OAuth 2.0 sessions.
#[derive(Clone, Default)]
pub struct Config {
    /// `client_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH2_CLIENT_ID`]
    pub client_id: Option<String>,
    /// `client_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH2_CLIENT_SECRET`]
    pub client_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH2_ACCESS_TOKEN`]
    pub access_token: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client_id
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client_secret
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set access_token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH2_CLIENT_ID) {
            self.client_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH2_CLIENT_SECRET) {
            self.client_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH2_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(Redact::from))
            .field("access_token", &self.access_token.as_ref().map(Redact::from))
            .finish()
    }
}
