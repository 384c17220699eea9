use anyhow::Result;
use reqauth_core::{Context, OsEnv, RequestOptions};
use reqauth_http_send_reqwest::ReqwestHttpSend;
use reqauth_oauth1::{Config, Credential, Oauth1Session};
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .pool_max_idle_per_host(10)
        .user_agent("reqauth-example/1.0")
        .build()?;
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv);

    // Falls back to demo credentials if REQAUTH_OAUTH1_* are not set.
    let cfg = Config::new().from_env(&ctx);
    let cred = match Credential::try_from(cfg) {
        Ok(cred) => cred,
        Err(_) => Credential::new("demo_key", "demo_secret")?
            .with_access_token("token", "token_secret"),
    };
    println!("Signing with {cred:?}");

    let session = Oauth1Session::new(ctx, cred);

    let resp = session
        .request(
            http::Method::GET,
            "https://httpbin.org/get",
            false,
            None,
            RequestOptions::new()
                .with_params([("format", "json")])
                .with_timeout(Duration::from_secs(30)),
        )
        .await?;
    println!("GET status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));

    let resp = session
        .request(
            http::Method::POST,
            "https://httpbin.org/post",
            true,
            Some("httpbin"),
            RequestOptions::new().with_form([("status", "hello world")]),
        )
        .await?;
    println!("POST status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
