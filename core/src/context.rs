// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::DEFAULT_TIMEOUT;
use crate::{Error, RequestOptions, Result};
use bytes::Bytes;
use http::Method;
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// Context provides the collaborators a session needs besides its credential.
///
/// ## Important
///
/// reqauth provides NO default implementations. Users MAY configure components they need.
/// Any unconfigured component will use a no-op implementation that returns errors or empty values when called.
///
/// ## Example
///
/// ```
/// use reqauth_core::{Context, OsEnv};
///
/// // Create a context with explicit implementations
/// let ctx = Context::new()
///     .with_env(OsEnv);  // Optionally configure environment implementation
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    ///
    /// ```
    /// use reqauth_core::Context;
    ///
    /// let ctx = Context::new();
    /// // You can configure specific components as needed:
    /// // ctx.with_http_send(my_http_client)
    /// //    .with_env(my_env_provider);
    /// ```
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(
        &self,
        req: http::Request<Bytes>,
        timeout: Duration,
    ) -> Result<http::Response<Bytes>> {
        self.http.http_send(req, timeout).await
    }

    /// Build the request described by `opts` and hand it to the transport.
    ///
    /// The response is returned exactly as the transport produced it.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        opts: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let timeout = opts.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let req = opts.into_request(method, url)?;

        // Query strings may carry credentials, only the path is logged.
        debug!(
            "sending request: {} {}://{}{}",
            req.method(),
            req.uri().scheme_str().unwrap_or_default(),
            req.uri().authority().map(|v| v.as_str()).unwrap_or_default(),
            req.uri().path()
        );
        self.http_send(req, timeout).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// HttpSend is the transport a session forwards signed requests to.
///
/// Implementations own connection handling and the enforcement of `timeout`.
/// Any failure should be reported as [`ErrorKind::Transport`](crate::ErrorKind::Transport)
/// with the original error attached as source.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
        timeout: Duration,
    ) -> Result<http::Response<Bytes>>;
}

/// Permits parameterizing environment access.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(
        &self,
        _req: http::Request<Bytes>,
        _timeout: Duration,
    ) -> Result<http::Response<Bytes>> {
        Err(Error::transport(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorder {
        seen: Mutex<Vec<(String, Duration)>>,
    }

    #[async_trait::async_trait]
    impl HttpSend for Arc<Recorder> {
        async fn http_send(
            &self,
            req: http::Request<Bytes>,
            timeout: Duration,
        ) -> Result<http::Response<Bytes>> {
            self.seen
                .lock()
                .expect("lock poisoned")
                .push((req.uri().to_string(), timeout));
            Ok(http::Response::new(Bytes::from_static(b"ok")))
        }
    }

    #[tokio::test]
    async fn test_send_uses_default_timeout() -> Result<()> {
        let recorder = Arc::new(Recorder::default());
        let ctx = Context::new().with_http_send(recorder.clone());

        let resp = ctx
            .send(Method::GET, "https://example.com/a", RequestOptions::new())
            .await?;
        assert_eq!(resp.body().as_ref(), b"ok");

        ctx.send(
            Method::GET,
            "https://example.com/b",
            RequestOptions::new().with_timeout(Duration::from_secs(1)),
        )
        .await?;

        let seen = recorder.seen.lock().expect("lock poisoned").clone();
        assert_eq!(
            seen,
            vec![
                ("https://example.com/a".to_string(), DEFAULT_TIMEOUT),
                ("https://example.com/b".to_string(), Duration::from_secs(1)),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_noop_http_send() {
        let err = Context::new()
            .send(Method::GET, "https://example.com", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([("KEY".to_string(), "value".to_string())]),
        });
        assert_eq!(ctx.env_var("KEY").as_deref(), Some("value"));
        assert_eq!(ctx.env_var("MISSING"), None);
    }
}
