use std::str::FromStr;

use bytes::Bytes;
use http::header::HeaderName;
use http::{HeaderValue, Method};
use log::debug;
use reqauth_core::time::{now, DateTime};
use reqauth_core::{Context, Params, RequestOptions, Result};

use crate::constants::*;
use crate::{sign_with_time, Config, Credential, HashMethod};

/// Session that signs the query string of requests with Ofly.
///
/// ```no_run
/// use reqauth_core::{Context, RequestOptions};
/// use reqauth_ofly::{Credential, HashMethod, OflySession};
///
/// # async fn example() -> reqauth_core::Result<()> {
/// let cred = Credential::new("app", "secret")?;
/// let session = OflySession::new(Context::new(), cred).with_hash_method(HashMethod::Md5);
///
/// let resp = session
///     .request(
///         http::Method::GET,
///         "https://example.com/api/photos",
///         false,
///         RequestOptions::new().with_params([("format", "json")]),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OflySession {
    ctx: Context,
    credential: Credential,
    hash_method: HashMethod,

    time: Option<DateTime>,
}

impl OflySession {
    /// Create a new session signing with `sha1`.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            hash_method: HashMethod::default(),
            time: None,
        }
    }

    /// Create a new session from config.
    ///
    /// Returns a config error if a field is missing or the hash method is
    /// not supported.
    pub fn from_config(ctx: Context, cfg: &Config) -> Result<Self> {
        let credential = Credential::try_from(cfg)?;
        let hash_method = match &cfg.hash_method {
            Some(v) => HashMethod::from_str(v)?,
            None => HashMethod::default(),
        };

        Ok(Self::new(ctx, credential).with_hash_method(hash_method))
    }

    /// Replace the hash method.
    pub fn with_hash_method(mut self, hash_method: HashMethod) -> Self {
        self.hash_method = hash_method;
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

    /// The credential of this session.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Sign the request and send it.
    ///
    /// With `header_auth` the protocol params are also sent as headers.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        header_auth: bool,
        opts: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let opts = self.sign(url, header_auth, opts)?;
        self.ctx.send(method, url, opts).await
    }

    /// Sign the request and return the options to send.
    ///
    /// The query params of `opts` are replaced by the signed query string.
    pub fn sign(&self, url: &str, header_auth: bool, opts: RequestOptions) -> Result<RequestOptions> {
        let mut opts = opts.with_default_timeout(OFLY_DEFAULT_TIMEOUT);

        let params = opts.params.to_pairs()?;
        let (query, ofly_params) = sign_with_time(
            url,
            &self.credential.app_id,
            &self.credential.app_secret,
            self.hash_method,
            &params,
            self.time.unwrap_or_else(now),
        )?;
        opts.params = Params::Encoded(query);

        if header_auth {
            debug!("inject ofly params into headers");
            for (k, v) in ofly_params {
                opts.headers
                    .insert(HeaderName::from_str(&k)?, HeaderValue::from_str(&v)?);
            }
        }

        Ok(opts)
    }
}
