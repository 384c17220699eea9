use reqauth_core::canonical::percent_encode;

use crate::constants::*;
use crate::Credential;

/// Protocol parameters of one request.
///
/// Built fresh by every call and consumed by the injection step, a session
/// never holds one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OauthParams(Vec<(String, String)>);

impl OauthParams {
    /// Build the default protocol parameters.
    ///
    /// The order is stable: consumer key, nonce, signature method, timestamp,
    /// token (if any), version.
    pub fn new(
        cred: &Credential,
        signature_method: &str,
        timestamp: i64,
        nonce: impl Into<String>,
    ) -> Self {
        let mut params = Self::default();
        params.set(OAUTH_CONSUMER_KEY, cred.consumer_key.clone());
        params.set(OAUTH_NONCE, nonce);
        params.set(OAUTH_SIGNATURE_METHOD, signature_method);
        params.set(OAUTH_TIMESTAMP, timestamp.to_string());
        if let Some(token) = &cred.access_token {
            params.set(OAUTH_TOKEN, token.clone());
        }
        params.set(OAUTH_VERSION, OAUTH1_VERSION);
        params
    }

    /// Set a parameter, replacing the value in place if it already exists.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Get a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }

    /// Build the `Authorization` header value.
    ///
    /// ```text
    /// OAuth realm="<realm>",oauth_consumer_key="<encoded>",...
    /// ```
    ///
    /// The realm is kept verbatim, values are percent encoded.
    pub fn to_authorization_header(&self, realm: &str) -> String {
        let mut s = format!("OAuth realm=\"{realm}\"");
        for (k, v) in &self.0 {
            s.push(',');
            s.push_str(k);
            s.push_str("=\"");
            s.push_str(&percent_encode(v));
            s.push('"');
        }
        s
    }

    /// Take all parameters out.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn credential() -> Credential {
        Credential::new("key", "secret").expect("credential must be valid")
    }

    #[test]
    fn test_default_order() {
        let params = OauthParams::new(&credential(), "HMAC-SHA1", 1318622958, "abc123");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "oauth_consumer_key",
                "oauth_nonce",
                "oauth_signature_method",
                "oauth_timestamp",
                "oauth_version"
            ]
        );

        let cred = credential().with_access_token("token", "token_secret");
        let params = OauthParams::new(&cred, "HMAC-SHA1", 1318622958, "abc123");
        assert_eq!(params.get(OAUTH_TOKEN), Some("token"));
    }

    #[test]
    fn test_set_overrides_in_place() {
        let mut params = OauthParams::new(&credential(), "HMAC-SHA1", 1318622958, "abc123");
        params.set(OAUTH_VERSION, "1.0a");
        params.set(OAUTH_CALLBACK, "oob");

        let pairs = params.into_pairs();
        assert_eq!(pairs[4], ("oauth_version".to_string(), "1.0a".to_string()));
        assert_eq!(pairs[5], ("oauth_callback".to_string(), "oob".to_string()));
    }

    #[test]
    fn test_authorization_header() {
        let mut params = OauthParams::default();
        params.set(OAUTH_CONSUMER_KEY, "key");
        params.set(OAUTH_SIGNATURE, "ab+c/d=");

        assert_eq!(
            params.to_authorization_header("Photos & Co"),
            r#"OAuth realm="Photos & Co",oauth_consumer_key="key",oauth_signature="ab%2Bc%2Fd%3D""#
        );
    }
}
