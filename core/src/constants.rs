//! Constants shared by all schemes.

use std::time::Duration;

/// Content type of form bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Timeout handed to the transport when the caller did not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
