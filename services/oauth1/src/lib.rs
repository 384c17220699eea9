//! OAuth 1.0/a request signing.
//!
//! An [`Oauth1Session`] signs every request it sends with fresh protocol
//! parameters and forwards it to the transport configured in
//! [`reqauth_core::Context`].
//!
//! Supported signature methods:
//!
//! - [`HmacSha1Signature`] (default)
//! - [`HmacSha256Signature`]
//! - [`PlaintextSignature`]
//! - [`RsaSha1Signature`]
//!
//! Protocol parameters are sent in the `Authorization` header when asked to,
//! otherwise in the form body of `POST`/`PUT` requests or the query string.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod params;
pub use params::OauthParams;

mod signature;
pub use signature::HmacSha1Signature;
pub use signature::HmacSha256Signature;
pub use signature::PlaintextSignature;
pub use signature::RsaSha1Signature;
pub use signature::SignatureContext;
pub use signature::SignatureMethod;

mod session;
pub use session::InjectionTarget;
pub use session::Oauth1Session;

pub mod constants;
