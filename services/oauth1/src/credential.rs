// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use reqauth_core::{utils::Redact, Error, Result};

use crate::Config;

/// Credential for OAuth 1.0.
///
/// Without an access token the session signs two-legged requests with the
/// consumer credentials only.
#[derive(Clone)]
pub struct Credential {
    /// Client consumer key.
    pub consumer_key: String,
    /// Client consumer secret.
    pub consumer_secret: String,
    /// Access token, sent as `oauth_token`.
    pub access_token: Option<String>,
    /// Access token secret, the second half of the signing key.
    pub access_token_secret: Option<String>,
}

impl Credential {
    /// Create a new two-legged credential.
    ///
    /// Returns a config error if the consumer key or secret is empty.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self> {
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();
        if consumer_key.is_empty() {
            return Err(Error::config_invalid("consumer_key is required"));
        }
        if consumer_secret.is_empty() {
            return Err(Error::config_invalid("consumer_secret is required"));
        }

        Ok(Self {
            consumer_key,
            consumer_secret,
            access_token: None,
            access_token_secret: None,
        })
    }

    /// Attach an access token and its secret.
    pub fn with_access_token(
        mut self,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        self.access_token = Some(access_token.into());
        self.access_token_secret = Some(access_token_secret.into());
        self
    }
}

impl TryFrom<Config> for Credential {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self> {
        let mut cred = Credential::new(
            cfg.consumer_key.unwrap_or_default(),
            cfg.consumer_secret.unwrap_or_default(),
        )?;
        cred.access_token = cfg.access_token;
        cred.access_token_secret = cfg.access_token_secret;
        Ok(cred)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
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
    use reqauth_core::ErrorKind;

    #[test]
    fn test_missing_fields_fail_fast() {
        let err = Credential::new("", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = Credential::try_from(Config::new().with_consumer_key("key")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
            .unwrap()
            .with_access_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");
        let s = format!("{cred:?}");
        assert!(!s.contains("kd94hf93k423kf44"));
        assert!(!s.contains("pfkkdhi9sl3r4s00"));
        assert!(s.contains("kd9***f44"));
    }
}
