use std::fmt::{Debug, Formatter};

use reqauth_core::{utils::Redact, Error, Result};

use crate::Config;

/// Credential for OAuth 2.0.
#[derive(Clone)]
pub struct Credential {
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Access token sent with every request.
    pub access_token: Option<String>,
}

impl Credential {
    /// Create a new credential without access token.
    ///
    /// Returns a config error if the client id or secret is empty.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.is_empty() {
            return Err(Error::config_invalid("client_id is required"));
        }
        if client_secret.is_empty() {
            return Err(Error::config_invalid("client_secret is required"));
        }

        Ok(Self {
            client_id,
            client_secret,
            access_token: None,
        })
    }

    /// Attach an access token.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

impl TryFrom<Config> for Credential {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self> {
        let mut cred = Credential::new(
            cfg.client_id.unwrap_or_default(),
            cfg.client_secret.unwrap_or_default(),
        )?;
        cred.access_token = cfg.access_token;
        Ok(cred)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("access_token", &self.access_token.as_ref().map(Redact::from))
            .finish()
    }
}
