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

use std::time::Duration;

use reqauth_core::constants::DEFAULT_TIMEOUT;

/// Protocol version sent as `oauth_version`.
pub const OAUTH1_VERSION: &str = "1.0";

/// Timeout used when the caller does not set one.
pub const OAUTH1_DEFAULT_TIMEOUT: Duration = DEFAULT_TIMEOUT;

// Protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_VERIFIER: &str = "oauth_verifier";

/// Protocol parameters a caller may pass along with its own query or form
/// parameters. They are moved into the protocol parameters before signing.
pub const OPTIONAL_OAUTH_PARAMS: [&str; 3] = [OAUTH_CALLBACK, OAUTH_VERIFIER, OAUTH_VERSION];

// Env values used to load credentials.
pub const REQAUTH_OAUTH1_CONSUMER_KEY: &str = "REQAUTH_OAUTH1_CONSUMER_KEY";
pub const REQAUTH_OAUTH1_CONSUMER_SECRET: &str = "REQAUTH_OAUTH1_CONSUMER_SECRET";
pub const REQAUTH_OAUTH1_ACCESS_TOKEN: &str = "REQAUTH_OAUTH1_ACCESS_TOKEN";
pub const REQAUTH_OAUTH1_ACCESS_TOKEN_SECRET: &str = "REQAUTH_OAUTH1_ACCESS_TOKEN_SECRET";
