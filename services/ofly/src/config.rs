use std::fmt::{Debug, Formatter};

use super::constants::*;
use reqauth_core::{utils::Redact, Context};

/// Config carries all the configuration for Ofly sessions.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OFLY_APP_ID`]
    pub app_id: Option<String>,
    /// `app_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OFLY_APP_SECRET`]
    pub app_secret: Option<String>,
    /// `hash_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OFLY_HASH_METHOD`]
    ///
    /// Must be `sha1` or `md5`, `sha1` is used if unset.
    pub hash_method: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set app_id
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set app_secret
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Set hash_method
    pub fn with_hash_method(mut self, hash_method: impl Into<String>) -> Self {
        self.hash_method = Some(hash_method.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQAUTH_OFLY_APP_ID) {
            self.app_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OFLY_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OFLY_HASH_METHOD) {
            self.hash_method.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.as_ref().map(Redact::from))
            .field("hash_method", &self.hash_method)
            .finish()
    }
}
