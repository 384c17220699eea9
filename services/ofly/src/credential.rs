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

/// Credential for Ofly.
#[derive(Clone)]
pub struct Credential {
    /// Application id, sent as `oflyAppId`.
    pub app_id: String,
    /// Shared secret, the prefix of every base string.
    pub app_secret: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Returns a config error if the app id or secret is empty.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into();
        let app_secret = app_secret.into();
        if app_id.is_empty() {
            return Err(Error::config_invalid("app_id is required"));
        }
        if app_secret.is_empty() {
            return Err(Error::config_invalid("app_secret is required"));
        }

        Ok(Self { app_id, app_secret })
    }
}

impl TryFrom<&Config> for Credential {
    type Error = Error;

    fn try_from(cfg: &Config) -> Result<Self> {
        Credential::new(
            cfg.app_id.clone().unwrap_or_default(),
            cfg.app_secret.clone().unwrap_or_default(),
        )
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &self.app_id)
            .field("app_secret", &Redact::from(&self.app_secret))
            .finish()
    }
}
