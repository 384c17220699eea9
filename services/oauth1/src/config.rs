use std::fmt::{Debug, Formatter};

use super::constants::*;
use reqauth_core::{utils::Redact, Context};

/// Config carries all the configuration for OAuth 1.0 sessions.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `access_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_ACCESS_TOKEN_SECRET`]
    pub access_token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set access_token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set access_token_secret
    pub fn with_access_token_secret(mut self, access_token_secret: impl Into<String>) -> Self {
        self.access_token_secret = Some(access_token_secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_ACCESS_TOKEN_SECRET) {
            self.access_token_secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "consumer_key",
                &self.consumer_key.as_ref().map(Redact::from),
            )
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field(
                "access_token",
                &self.access_token.as_ref().map(Redact::from),
            )
            .field(
                "access_token_secret",
                &self.access_token_secret.as_ref().map(Redact::from),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqauth_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (
                    REQAUTH_OAUTH1_CONSUMER_KEY.to_string(),
                    "env_key".to_string(),
                ),
                (
                    REQAUTH_OAUTH1_CONSUMER_SECRET.to_string(),
                    "env_secret".to_string(),
                ),
            ]),
        });

        let cfg = Config::new()
            .with_consumer_key("explicit_key")
            .from_env(&ctx);
        assert_eq!(cfg.consumer_key.as_deref(), Some("explicit_key"));
        assert_eq!(cfg.consumer_secret.as_deref(), Some("env_secret"));
        assert_eq!(cfg.access_token, None);
        assert_eq!(cfg.access_token_secret, None);
    }
}
