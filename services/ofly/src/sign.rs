use std::fmt::{Display, Formatter};
use std::str::FromStr;

use http::Uri;
use log::debug;
use reqauth_core::canonical::{encode_and_join_sorted, join_sorted};
use reqauth_core::hash::{hex_md5, hex_sha1};
use reqauth_core::time::{format_iso8601_millis, now, DateTime};
use reqauth_core::{Error, Result};

use crate::constants::*;

/// Digest used for the Ofly signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashMethod {
    /// `sha1`
    #[default]
    Sha1,
    /// `md5`
    Md5,
}

impl HashMethod {
    /// Value sent as `oflyHashMeth`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashMethod::Sha1 => "SHA1",
            HashMethod::Md5 => "MD5",
        }
    }

    /// Hex digest of `content`.
    pub fn hex_digest(&self, content: &[u8]) -> String {
        match self {
            HashMethod::Sha1 => hex_sha1(content),
            HashMethod::Md5 => hex_md5(content),
        }
    }
}

impl FromStr for HashMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha1" => Ok(HashMethod::Sha1),
            "md5" => Ok(HashMethod::Md5),
            v => Err(Error::config_invalid(format!(
                "hash method must be one of \"sha1\", \"md5\", got {v:?}"
            ))),
        }
    }
}

impl Display for HashMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign `params` for an Ofly request to `url` at the current time.
///
/// `hash_method` must be `sha1` or `md5`, anything else is rejected before
/// any work is done.
///
/// Returns:
///
/// - the query string: caller params and `oflyApiSig`, sorted and percent
///   encoded.
/// - the protocol params `oflyAppId`, `oflyHashMeth` and `oflyTimestamp`,
///   to be sent as headers.
pub fn sign(
    url: &str,
    app_id: &str,
    app_secret: &str,
    hash_method: &str,
    params: &[(String, String)],
) -> Result<(String, Vec<(String, String)>)> {
    let hash_method = HashMethod::from_str(hash_method)?;
    sign_with_time(url, app_id, app_secret, hash_method, params, now())
}

/// Same as [`sign`] with an explicit digest and signing time.
pub fn sign_with_time(
    url: &str,
    app_id: &str,
    app_secret: &str,
    hash_method: HashMethod,
    params: &[(String, String)],
    time: DateTime,
) -> Result<(String, Vec<(String, String)>)> {
    let ofly_params = vec![
        (OFLY_APP_ID.to_string(), app_id.to_string()),
        (OFLY_HASH_METH.to_string(), hash_method.as_str().to_string()),
        (OFLY_TIMESTAMP.to_string(), format_iso8601_millis(time)),
    ];

    let base_string = base_string(url, app_secret, params, &ofly_params)?;
    let signature = hash_method.hex_digest(base_string.as_bytes());

    let mut signed = params.to_vec();
    signed.push((OFLY_API_SIG.to_string(), signature));

    Ok((encode_and_join_sorted(&signed), ofly_params))
}

/// `secret + path + "?" + [caller params + "&"] + ofly params`
///
/// Both parameter lists are sorted on their own, values are used as is.
fn base_string(
    url: &str,
    app_secret: &str,
    params: &[(String, String)],
    ofly_params: &[(String, String)],
) -> Result<String> {
    // Only validates the url, `Uri` turns an empty path into `/`.
    Uri::from_str(url)?;
    let path = url_path(url);

    let mut s = format!("{app_secret}{path}?");
    let sorted = join_sorted(params.to_vec(), "=", "&");
    if !sorted.is_empty() {
        s.push_str(&sorted);
        s.push('&');
    }
    s.push_str(&join_sorted(ofly_params.to_vec(), "=", "&"));

    // The base string starts with the app secret and must never be logged.
    debug!("ofly base string built for path {path:?}");
    Ok(s)
}

/// Path of `url` exactly as written, empty if the url has none.
fn url_path(url: &str) -> &str {
    let rest = match url.split_once("://") {
        Some((_, rest)) => match rest.find(|c: char| matches!(c, '/' | '?' | '#')) {
            Some(idx) => &rest[idx..],
            None => "",
        },
        None => url,
    };
    let end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
    &rest[..end]
}
