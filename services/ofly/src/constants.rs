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

/// Timeout used when the caller does not set one.
pub const OFLY_DEFAULT_TIMEOUT: Duration = DEFAULT_TIMEOUT;

// Protocol parameters.
pub const OFLY_APP_ID: &str = "oflyAppId";
pub const OFLY_HASH_METH: &str = "oflyHashMeth";
pub const OFLY_TIMESTAMP: &str = "oflyTimestamp";
pub const OFLY_API_SIG: &str = "oflyApiSig";

// Env values used to load credentials.
pub const REQAUTH_OFLY_APP_ID: &str = "REQAUTH_OFLY_APP_ID";
pub const REQAUTH_OFLY_APP_SECRET: &str = "REQAUTH_OFLY_APP_SECRET";
pub const REQAUTH_OFLY_HASH_METHOD: &str = "REQAUTH_OFLY_HASH_METHOD";
