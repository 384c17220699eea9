use std::mem;
use std::sync::Arc;

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use log::debug;
use reqauth_core::constants::FORM_URLENCODED;
use reqauth_core::hash::hex_sha1;
use reqauth_core::time::{now, DateTime};
use reqauth_core::{Body, Context, Error, Params, RequestOptions, Result};

use crate::constants::*;
use crate::{Credential, HmacSha1Signature, OauthParams, SignatureContext, SignatureMethod};

/// Where the protocol parameters of a request end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTarget {
    /// `Authorization: OAuth ...` header.
    Header,
    /// Form body, used by `POST` and `PUT`.
    Body,
    /// Query string.
    Query,
}

impl InjectionTarget {
    /// Pick the target for a request.
    pub fn select(method: &Method, header_auth: bool) -> Self {
        if header_auth {
            InjectionTarget::Header
        } else if method == Method::POST || method == Method::PUT {
            InjectionTarget::Body
        } else {
            InjectionTarget::Query
        }
    }
}

/// Session that signs requests with OAuth 1.0/a.
///
/// The session only holds immutable state and can be shared between tasks,
/// every call builds its own protocol parameters.
///
/// ```no_run
/// use reqauth_core::{Context, RequestOptions};
/// use reqauth_oauth1::{Credential, Oauth1Session};
///
/// # async fn example() -> reqauth_core::Result<()> {
/// let cred = Credential::new("123", "456")?.with_access_token("321", "654");
/// let session = Oauth1Session::new(Context::new(), cred);
///
/// let resp = session
///     .request(
///         http::Method::GET,
///         "https://example.com/api/resource",
///         false,
///         None,
///         RequestOptions::new().with_params([("format", "json")]),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Oauth1Session {
    ctx: Context,
    credential: Credential,
    signature: Arc<dyn SignatureMethod>,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Oauth1Session {
    /// Create a new session signing with `HMAC-SHA1`.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            signature: Arc::new(HmacSha1Signature),
            time: None,
            nonce: None,
        }
    }

    /// Replace the signature method.
    pub fn with_signature_method(mut self, signature: impl SignatureMethod) -> Self {
        self.signature = Arc::new(signature);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Servers reject a nonce they have seen before, a fresh one is
    /// generated for every request by default.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// The credential of this session.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Name of the active signature method.
    pub fn signature_method(&self) -> &str {
        self.signature.name()
    }

    /// Sign the request and send it.
    ///
    /// - `header_auth`: send protocol parameters in the `Authorization` header.
    /// - `realm`: realm of the `Authorization` header, only used with `header_auth`.
    ///
    /// The response of the transport is returned unchanged.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        header_auth: bool,
        realm: Option<&str>,
        opts: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let opts = self.sign(&method, url, header_auth, realm, opts)?;
        self.ctx.send(method, url, opts).await
    }

    /// Sign the request and return the options to send.
    ///
    /// `oauth_callback`, `oauth_verifier` and `oauth_version` found in the
    /// caller's query or form parameters are moved into the protocol
    /// parameters.
    pub fn sign(
        &self,
        method: &Method,
        url: &str,
        header_auth: bool,
        realm: Option<&str>,
        opts: RequestOptions,
    ) -> Result<RequestOptions> {
        let mut opts = opts.with_default_timeout(OAUTH1_DEFAULT_TIMEOUT);

        let timestamp = self.time.unwrap_or_else(now).timestamp();
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);
        let mut oauth_params =
            OauthParams::new(&self.credential, self.signature.name(), timestamp, nonce);

        for name in OPTIONAL_OAUTH_PARAMS {
            if let Some(v) = opts.params.remove(name)? {
                oauth_params.set(name, v);
            }
            if let Body::Form(form) = &mut opts.data {
                if let Some(v) = form.remove(name)? {
                    oauth_params.set(name, v);
                }
            }
        }

        // Protocol params replace caller values of the same name in the
        // container they are injected into, before it is signed.
        let target = InjectionTarget::select(method, header_auth);
        {
            let reserved = oauth_params
                .iter()
                .map(|(k, _)| k.as_str())
                .chain([OAUTH_SIGNATURE]);
            match (target, &mut opts.data) {
                (InjectionTarget::Query, _) => {
                    for key in reserved {
                        opts.params.remove(key)?;
                    }
                }
                (InjectionTarget::Body, Body::Form(form)) => {
                    for key in reserved {
                        form.remove(key)?;
                    }
                }
                _ => {}
            }
        }

        let ctx = SignatureContext::from_request(method, url, &opts, &oauth_params)?;
        let signature = self.signature.sign(&self.credential, &ctx)?;
        oauth_params.set(OAUTH_SIGNATURE, signature);

        debug!("inject oauth params into {target:?}");
        match target {
            InjectionTarget::Header => {
                let mut value: HeaderValue = oauth_params
                    .to_authorization_header(realm.unwrap_or_default())
                    .parse()?;
                value.set_sensitive(true);
                opts.headers.insert(AUTHORIZATION, value);
            }
            InjectionTarget::Body => {
                opts.data = match mem::take(&mut opts.data) {
                    Body::Empty => Body::Form(Params::Pairs(oauth_params.into_pairs())),
                    Body::Form(mut form) => {
                        form.extend(oauth_params.into_pairs());
                        Body::Form(form)
                    }
                    Body::Bytes(_) => {
                        return Err(Error::request_invalid(
                            "oauth params can't be merged into a raw body, use a form body or header auth",
                        ))
                    }
                };
                opts.headers
                    .entry(CONTENT_TYPE)
                    .or_insert_with(|| HeaderValue::from_static(FORM_URLENCODED));
            }
            InjectionTarget::Query => {
                opts.params.extend(oauth_params.into_pairs());
            }
        }

        Ok(opts)
    }
}

/// A random value hashed to 40 hex characters.
fn generate_nonce() -> String {
    let bytes: [u8; 32] = rand::random();
    hex_sha1(&bytes)
}
