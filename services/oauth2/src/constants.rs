use std::time::Duration;

use reqauth_core::constants::DEFAULT_TIMEOUT;

/// Timeout used when the caller does not set one.
pub const OAUTH2_DEFAULT_TIMEOUT: Duration = DEFAULT_TIMEOUT;

/// Query parameter carrying the token.
pub const ACCESS_TOKEN: &str = "access_token";

// Env values used to load credentials.
pub const REQAUTH_OAUTH2_CLIENT_ID: &str = "REQAUTH_OAUTH2_CLIENT_ID";
pub const REQAUTH_OAUTH2_CLIENT_SECRET: &str = "REQAUTH_OAUTH2_CLIENT_SECRET";
pub const REQAUTH_OAUTH2_ACCESS_TOKEN: &str = "REQAUTH_OAUTH2_ACCESS_TOKEN";
