use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use reqauth_core::{Context, HttpSend, RequestOptions, Result};
use reqauth_oauth2::constants::OAUTH2_DEFAULT_TIMEOUT;
use reqauth_oauth2::{Credential, Oauth2Session};

#[derive(Debug, Clone, Default)]
struct MockHttpSend {
    requests: Arc<Mutex<Vec<(String, Duration)>>>,
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
        timeout: Duration,
    ) -> Result<http::Response<Bytes>> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push((req.uri().to_string(), timeout));
        Ok(http::Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Bytes::new())?)
    }
}

fn init_session(http: MockHttpSend) -> Oauth2Session {
    let _ = env_logger::builder().is_test(true).try_init();
    let cred = Credential::new("123", "456")
        .expect("credential must be valid")
        .with_access_token("321");
    Oauth2Session::new(Context::new().with_http_send(http), cred)
}

#[tokio::test]
async fn test_access_token_in_query() -> Result<()> {
    let http = MockHttpSend::default();
    let session = init_session(http.clone());

    let resp = session
        .request(
            Method::GET,
            "https://example.com/api/resource",
            RequestOptions::new().with_params([("format", "json")]),
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    session
        .request(
            Method::DELETE,
            "https://example.com/api/resource/1?force=true",
            RequestOptions::new().with_timeout(Duration::from_secs(3)),
        )
        .await?;

    let requests = http.requests.lock().expect("lock poisoned").clone();
    assert_eq!(
        requests,
        vec![
            (
                "https://example.com/api/resource?format=json&access_token=321".to_string(),
                OAUTH2_DEFAULT_TIMEOUT
            ),
            (
                "https://example.com/api/resource/1?force=true&access_token=321".to_string(),
                Duration::from_secs(3)
            ),
        ]
    );
    Ok(())
}
