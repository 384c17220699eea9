use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use http::header::HeaderName;
use http::header::CONTENT_TYPE;
use http::uri::PathAndQuery;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use percent_encoding::percent_decode_str;

use crate::constants::FORM_URLENCODED;
use crate::{Error, Result};

/// Parameters carried by the query string or a form body.
///
/// Callers may hand over either structured pairs or a string that is already
/// `application/x-www-form-urlencoded`. Both forms are kept as given until
/// they are sent, so unrelated pairs are never reordered or re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// Decoded key/value pairs in insertion order.
    Pairs(Vec<(String, String)>),
    /// A pre-encoded `k=v&k=v` string.
    Encoded(String),
}

impl Default for Params {
    fn default() -> Self {
        Params::Pairs(Vec::new())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Params::Pairs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Vec<(String, String)>> for Params {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Params::Pairs(pairs)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Params {
    /// Build params from a pre-encoded string.
    pub fn encoded(s: impl Into<String>) -> Self {
        Params::Encoded(s.into())
    }

    /// Check if there is no parameter at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Params::Pairs(pairs) => pairs.is_empty(),
            Params::Encoded(s) => s.split('&').all(str::is_empty),
        }
    }

    /// Get all parameters as decoded pairs.
    ///
    /// Returns a request invalid error if an encoded string contains a
    /// malformed percent escape or decodes to invalid UTF-8.
    pub fn to_pairs(&self) -> Result<Vec<(String, String)>> {
        match self {
            Params::Pairs(pairs) => Ok(pairs.clone()),
            Params::Encoded(s) => segments(s)
                .filter(|seg| !seg.is_empty())
                .map(decode_segment)
                .collect(),
        }
    }

    /// Remove every occurrence of `key` and return the last value seen.
    ///
    /// For encoded strings only the matching segments are dropped, the
    /// remaining segments are kept byte-for-byte in their original order.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>> {
        match self {
            Params::Pairs(pairs) => {
                let mut found = None;
                pairs.retain(|(k, v)| {
                    if k == key {
                        found = Some(v.clone());
                        false
                    } else {
                        true
                    }
                });
                Ok(found)
            }
            Params::Encoded(s) => {
                let mut found = None;
                let mut kept = Vec::new();
                for seg in segments(s) {
                    if seg.is_empty() {
                        kept.push(seg);
                        continue;
                    }
                    let (k, v) = decode_segment(seg)?;
                    if k == key {
                        found = Some(v);
                    } else {
                        kept.push(seg);
                    }
                }
                if found.is_some() {
                    *s = kept.join("&");
                }
                Ok(found)
            }
        }
    }

    /// Append a pair at the end.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extend([(key.into(), value.into())]);
    }

    /// Append pairs at the end, keeping existing parameters untouched.
    pub fn extend<I, K, V>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        match self {
            Params::Pairs(pairs) => {
                pairs.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
            }
            Params::Encoded(s) => {
                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (k, v) in iter {
                    let (k, v): (String, String) = (k.into(), v.into());
                    serializer.append_pair(&k, &v);
                }
                let extra = serializer.finish();
                if extra.is_empty() {
                    return;
                }
                if !s.is_empty() && !s.ends_with('&') {
                    s.push('&');
                }
                s.push_str(&extra);
            }
        }
    }

    /// Serialize as `application/x-www-form-urlencoded`.
    pub fn to_encoded(&self) -> String {
        match self {
            Params::Pairs(pairs) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish(),
            Params::Encoded(s) => s.clone(),
        }
    }
}

fn segments(s: &str) -> impl Iterator<Item = &str> + '_ {
    // An empty string carries no segment at all.
    s.split('&').filter(move |_| !s.is_empty())
}

fn decode_segment(seg: &str) -> Result<(String, String)> {
    let (k, v) = seg.split_once('=').unwrap_or((seg, ""));
    Ok((decode_component(k)?, decode_component(v)?))
}

/// Decode one form component strictly.
///
/// `form_urlencoded::parse` silently keeps malformed escapes as literal text,
/// we reject them instead so no caller data is ever guessed at.
fn decode_component(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    for (idx, _) in raw.match_indices('%') {
        let valid = matches!(
            bytes.get(idx + 1..idx + 3),
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit)
        );
        if !valid {
            return Err(Error::request_invalid(format!(
                "malformed percent escape in encoded parameter: {raw}"
            )));
        }
    }

    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|v| v.into_owned())
        .map_err(|e| {
            Error::request_invalid(format!("encoded parameter is not valid utf-8: {raw}"))
                .with_source(e)
        })
}

/// Body of an outgoing request.
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// A form body, sent as `application/x-www-form-urlencoded`.
    Form(Params),
    /// Raw bytes, sent as is.
    Bytes(Bytes),
}

impl Body {
    /// Get the form params if this body is a form.
    pub fn as_form(&self) -> Option<&Params> {
        match self {
            Body::Form(params) => Some(params),
            _ => None,
        }
    }
}

/// Options of one outgoing request.
///
/// Sessions take options by value and hand the merged result to the
/// transport, callers keep no alias to the containers being rewritten.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Timeout passed down to the transport.
    pub timeout: Option<Duration>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Query parameters, appended after any query already present in the url.
    pub params: Params,
    /// Request body.
    pub data: Body,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout only if the caller did not set one.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.timeout.get_or_insert(timeout);
        self
    }

    /// Insert a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the query parameters.
    pub fn with_params(mut self, params: impl Into<Params>) -> Self {
        self.params = params.into();
        self
    }

    /// Set a form body.
    pub fn with_form(mut self, form: impl Into<Params>) -> Self {
        self.data = Body::Form(form.into());
        self
    }

    /// Set a raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.data = Body::Bytes(body.into());
        self
    }

    /// Build the final http request.
    ///
    /// - `params` are appended to the query already present in `url`.
    /// - A form body gets `Content-Type: application/x-www-form-urlencoded`
    ///   unless the caller set a content type.
    pub fn into_request(self, method: Method, url: &str) -> Result<http::Request<Bytes>> {
        let mut headers = self.headers;

        let uri = {
            let uri = Uri::from_str(url)?;
            let extra = self.params.to_encoded();
            if extra.is_empty() {
                uri
            } else {
                let mut parts = uri.into_parts();
                let paq = match parts.path_and_query.as_ref() {
                    Some(paq) => match paq.query() {
                        Some(q) if !q.is_empty() => format!("{}?{q}&{extra}", paq.path()),
                        _ => format!("{}?{extra}", paq.path()),
                    },
                    None => format!("/?{extra}"),
                };
                parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);
                Uri::from_parts(parts).map_err(|e| {
                    Error::request_invalid(format!("failed to rebuild url {url}")).with_source(e)
                })?
            }
        };

        let body = match self.data {
            Body::Empty => Bytes::new(),
            Body::Form(form) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
                }
                Bytes::from(form.to_encoded())
            }
            Body::Bytes(bs) => bs,
        };

        let mut req = http::Request::builder().method(method).uri(uri).body(body)?;
        *req.headers_mut() = headers;
        Ok(req)
    }
}
