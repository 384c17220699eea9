//! OAuth 2.0 bearer token.
//!
//! [`Oauth2Session`] performs no signing at all, it adds the stored access
//! token as `access_token` query parameter and forwards the request.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod session;
pub use session::Oauth2Session;

pub mod constants;
