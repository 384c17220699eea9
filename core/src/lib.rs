//! Core components for signing HTTP requests.
//!
//! This crate provides the foundational types shared by the reqauth sessions.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the HTTP transport and environment access
//! - **RequestOptions**: Headers, query parameters, body and timeout of one outgoing request
//! - **Params**: Query or form parameters, either structured or pre-encoded
//!
//! Scheme specific signing lives in the service crates:
//!
//! - `reqauth-oauth1`: OAuth 1.0/a, signing with HMAC-SHA1 and friends
//! - `reqauth-oauth2`: OAuth 2.0 bearer token
//! - `reqauth-ofly`: Ofly query signing
//!
//! ## Example
//!
//! ```no_run
//! use reqauth_core::{Context, HttpSend, RequestOptions, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! struct MyClient;
//!
//! #[async_trait]
//! impl HttpSend for MyClient {
//!     async fn http_send(
//!         &self,
//!         _req: http::Request<Bytes>,
//!         _timeout: Duration,
//!     ) -> Result<http::Response<Bytes>> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MyClient);
//!
//! let opts = RequestOptions::new().with_params([("format", "json")]);
//! let resp = ctx
//!     .send(http::Method::GET, "https://example.com/resource", opts)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`canonical`]: Sorting and percent encoding of parameters
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod canonical;
pub mod constants;
pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::{Body, Params, RequestOptions};
