use bytes::Bytes;
use http::Method;
use log::debug;
use reqauth_core::{Context, Error, RequestOptions, Result};

use crate::constants::*;
use crate::Credential;

/// Session that sends an OAuth 2.0 access token with every request.
///
/// ```no_run
/// use reqauth_core::{Context, RequestOptions};
/// use reqauth_oauth2::{Credential, Oauth2Session};
///
/// # async fn example() -> reqauth_core::Result<()> {
/// let cred = Credential::new("123", "456")?.with_access_token("321");
/// let session = Oauth2Session::new(Context::new(), cred);
///
/// let resp = session
///     .request(
///         http::Method::GET,
///         "https://example.com/api/resource",
///         RequestOptions::new().with_params([("format", "json")]),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Oauth2Session {
    ctx: Context,
    credential: Credential,
}

impl Oauth2Session {
    /// Create a new session.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self { ctx, credential }
    }

    /// The credential of this session.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Add `access_token` to the query and send the request.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        opts: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let opts = self.sign(opts)?;
        self.ctx.send(method, url, opts).await
    }

    /// Add `access_token` to the query and return the options to send.
    ///
    /// The query carries exactly one `access_token` afterwards.
    ///
    /// Returns a config error if the credential carries no access token.
    pub fn sign(&self, opts: RequestOptions) -> Result<RequestOptions> {
        let token = self.credential.access_token.as_deref().ok_or_else(|| {
            Error::config_invalid("access_token is required to send oauth2 requests")
        })?;

        let mut opts = opts.with_default_timeout(OAUTH2_DEFAULT_TIMEOUT);
        // The session token replaces any token passed by the caller.
        opts.params.remove(ACCESS_TOKEN)?;
        opts.params.push(ACCESS_TOKEN, token);
        debug!("inject access token into query");

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqauth_core::{ErrorKind, Params};

    #[test]
    fn test_sign_appends_token() {
        let cred = Credential::new("123", "456")
            .expect("credential must be valid")
            .with_access_token("321");
        let session = Oauth2Session::new(Context::new(), cred);

        let opts = session
            .sign(RequestOptions::new().with_params(Params::encoded("format=json")))
            .unwrap();
        assert_eq!(opts.params, Params::encoded("format=json&access_token=321"));
        assert_eq!(opts.timeout, Some(OAUTH2_DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_sign_replaces_caller_token() {
        let cred = Credential::new("123", "456")
            .expect("credential must be valid")
            .with_access_token("321");
        let session = Oauth2Session::new(Context::new(), cred);

        let opts = session
            .sign(RequestOptions::new().with_params([("access_token", "stale"), ("a", "1")]))
            .unwrap();
        assert_eq!(opts.params, Params::from([("a", "1"), ("access_token", "321")]));

        let opts = session
            .sign(RequestOptions::new().with_params(Params::encoded("access_token=stale&a=1")))
            .unwrap();
        assert_eq!(opts.params, Params::encoded("a=1&access_token=321"));
    }

    #[test]
    fn test_sign_without_token() {
        let cred = Credential::new("123", "456").expect("credential must be valid");
        let session = Oauth2Session::new(Context::new(), cred);

        let err = session.sign(RequestOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
