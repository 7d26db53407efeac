use anyhow::{bail, Result};
use djevents::{
    api,
    app::{
        auth::{AuthContext, FileTokenStore, MemoryTokenStore, ProxyClient, TokenStore},
        nav::{nav_links, NavItem},
        AppError, Route,
    },
    strapi::{types::LoginRequest, StrapiClient},
};
use secrecy::ExposeSecret;
use serde_json::json;
use std::{net::SocketAddr, time::Duration};
use tokio::net::TcpListener;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Serve the proxy on a loopback port in front of `upstream`.
async fn spawn_proxy(upstream: &MockServer) -> Result<SocketAddr> {
    let strapi = StrapiClient::new(&upstream.uri(), Duration::from_secs(5))?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, api::router(strapi).into_make_service()).await;
    });

    Ok(addr)
}

async fn mount_login(upstream: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .and(body_json(
            json!({ "identifier": "dj@djevents.dev", "password": "secret" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": "jwt-42",
            "user": { "id": 42, "username": "dj", "email": "dj@djevents.dev" }
        })))
        .mount(upstream)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/local"))
        .and(body_json(
            json!({ "identifier": "dj@djevents.dev", "password": "wrong" }),
        ))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": null,
            "error": { "status": 400, "name": "ValidationError", "message": "Invalid identifier or password" }
        })))
        .mount(upstream)
        .await;
}

fn credentials(password: &str) -> LoginRequest {
    LoginRequest {
        identifier: "dj@djevents.dev".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn login_then_logout_through_proxy() -> Result<()> {
    if !can_bind_localhost() {
        return Ok(());
    }
    let upstream = MockServer::start().await;
    mount_login(&upstream).await;
    let addr = spawn_proxy(&upstream).await?;

    let proxy = ProxyClient::new(&format!("http://{addr}"))?;
    let mut auth = AuthContext::new(proxy, MemoryTokenStore::new());

    let route = auth.login(credentials("secret")).await?;

    assert_eq!(route, Route::Dashboard);
    assert_eq!(auth.user().map(|user| user.id), Some(42));
    assert_eq!(auth.token(), Some("jwt-42"));
    assert_eq!(auth.error(), None);
    assert!(nav_links(&auth).contains(&NavItem::Logout));

    let requests_before = upstream.received_requests().await.map_or(0, |r| r.len());
    auth.logout();
    let requests_after = upstream.received_requests().await.map_or(0, |r| r.len());

    assert!(auth.user().is_none());
    assert_eq!(requests_before, requests_after);
    Ok(())
}

#[tokio::test]
async fn failed_login_reports_upstream_message() -> Result<()> {
    if !can_bind_localhost() {
        return Ok(());
    }
    let upstream = MockServer::start().await;
    mount_login(&upstream).await;
    let addr = spawn_proxy(&upstream).await?;

    let proxy = ProxyClient::new(&format!("http://{addr}"))?;
    let mut auth = AuthContext::new(proxy, MemoryTokenStore::new());

    let result = auth.login(credentials("wrong")).await;

    assert_eq!(
        result,
        Err(AppError::Http {
            status: 400,
            message: "Invalid identifier or password".to_string()
        })
    );
    assert!(auth.user().is_none());
    assert_eq!(auth.error(), Some("Invalid identifier or password"));
    Ok(())
}

#[tokio::test]
async fn session_is_restored_from_token_file() -> Result<()> {
    if !can_bind_localhost() {
        return Ok(());
    }
    let upstream = MockServer::start().await;
    mount_login(&upstream).await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer jwt-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "username": "dj", "email": "dj@djevents.dev"
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = spawn_proxy(&upstream).await?;
    let base = format!("http://{addr}");

    let dir = std::env::temp_dir().join(format!("djevents-it-{}", ulid::Ulid::new()));
    let token_file = dir.join("token");

    {
        let mut auth = AuthContext::new(ProxyClient::new(&base)?, FileTokenStore::new(&token_file));
        auth.login(credentials("secret")).await?;
    }

    let mut restored = AuthContext::new(ProxyClient::new(&base)?, FileTokenStore::new(&token_file));
    restored.hydrate().await?;

    let Some(user) = restored.user() else {
        bail!("session was not restored");
    };
    assert_eq!(user.username, "dj");
    assert_eq!(user.token, "jwt-42");

    restored.logout();
    assert!(FileTokenStore::new(&token_file).load()?.is_none());

    let _ = std::fs::remove_dir_all(dir);
    Ok(())
}

#[tokio::test]
async fn rejected_token_is_dropped_on_restore() -> Result<()> {
    if !can_bind_localhost() {
        return Ok(());
    }
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "data": null,
            "error": { "status": 401, "name": "UnauthorizedError", "message": "Missing or invalid credentials" }
        })))
        .mount(&upstream)
        .await;
    let addr = spawn_proxy(&upstream).await?;

    let mut auth = AuthContext::new(
        ProxyClient::new(&format!("http://{addr}"))?,
        MemoryTokenStore::with_token("expired"),
    );

    auth.hydrate().await?;

    assert!(auth.user().is_none());
    assert!(auth
        .store()
        .load()?
        .map(|token| token.expose_secret().to_string())
        .is_none());
    Ok(())
}
