//! Server integration tests.
//!
//! These tests verify the server starts correctly and handles requests.

mod common;

use anyhow::Result;

#[tokio::test]
async fn test_server_starts_and_responds_to_health() -> Result<()> {
    let server = common::TestServer::start().await?;

    let healthy = server.health().await?;
    assert!(healthy, "Server should be healthy");

    Ok(())
}

#[tokio::test]
async fn test_server_health_returns_version() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server.get("/health").send().await?;
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["status"], "ok");
    assert!(body.get("version").is_some());
    assert_eq!(body["texts"], 2);

    Ok(())
}

#[tokio::test]
async fn test_multiple_servers_different_ports() -> Result<()> {
    let server1 = common::TestServer::start().await?;
    let server2 = common::TestServer::start().await?;

    assert_ne!(
        server1.addr, server2.addr,
        "Servers should be on different ports"
    );
    assert!(server1.health().await?);
    assert!(server2.health().await?);

    Ok(())
}

#[tokio::test]
async fn test_servers_have_independent_stores() -> Result<()> {
    let server1 = common::TestServer::start().await?;
    let server2 = common::TestServer::start().await?;

    server1.delete("/texts/1").send().await?;

    let texts1: serde_json::Value = server1.get("/texts").send().await?.json().await?;
    let texts2: serde_json::Value = server2.get("/texts").send().await?.json().await?;
    assert!(texts1.get("1").is_none());
    assert!(texts2.get("1").is_some());

    Ok(())
}

#[tokio::test]
async fn test_rate_limit_enforced() -> Result<()> {
    let config = common::quiet_config()
        .with_rate_limiting(true)
        .with_api_rpm(3);
    // Readiness polling is rate limited too, so the quota is partly spent.
    let server = common::TestServer::start_with_config(config).await?;

    let mut limited = None;
    for _ in 0..5 {
        let resp = server.get("/texts").send().await?;
        if resp.status().as_u16() == 429 {
            limited = Some(resp);
            break;
        }
    }

    let resp = limited.expect("a request should have been rate limited");
    assert!(resp.headers().get("retry-after").is_some());
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["code"], "rate_limit_exceeded");

    Ok(())
}

#[tokio::test]
async fn test_graceful_shutdown() -> Result<()> {
    let server = common::TestServer::start().await?;
    let addr = server.addr;
    server.stop().await?;

    let result = reqwest::Client::new()
        .get(format!("http://{}/health", addr))
        .send()
        .await;
    assert!(result.is_err(), "Server should no longer accept connections");

    Ok(())
}
