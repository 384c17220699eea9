//! Ofly request signing.
//!
//! Ofly signs the sorted query parameters of a request together with the
//! application id, the digest name and a millisecond timestamp. The hex
//! digest is sent as `oflyApiSig` in the query string.
//!
//! [`sign`] is a pure function usable on its own, [`OflySession`] wraps it
//! and forwards requests to the transport of its [`reqauth_core::Context`].

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign;
pub use sign::sign;
pub use sign::sign_with_time;
pub use sign::HashMethod;

mod session;
pub use session::OflySession;

pub mod constants;
