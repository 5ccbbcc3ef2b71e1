use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use uuid::Uuid;

use stockflow_backend::auth::jwt::sign_token;
use stockflow_backend::state::AppState;
use stockflow_backend::store::{DataStore, MemoryStore, Table};

const SECRET: &str = "integration-secret";

async fn spawn_app() -> std::net::SocketAddr {
    spawn_app_with(Arc::new(MemoryStore::new())).await
}

async fn spawn_app_with(store: Arc<MemoryStore>) -> std::net::SocketAddr {
    let state = AppState::new(store, SECRET);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stockflow_backend::app(state)).await.unwrap();
    });
    addr
}

/// Sends a bodiless request and returns the status code and raw body.
async fn send(addr: std::net::SocketAddr, method: &str, path: &str, token: Option<&str>) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let auth = token
        .map(|t| format!("Authorization: Bearer {t}\r\n"))
        .unwrap_or_default();
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\n{auth}Content-Length: 0\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    let status = raw
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let body = raw.split("\r\n\r\n").nth(1).unwrap_or_default().to_string();
    (status, body)
}

#[tokio::test]
async fn health_is_open() {
    let addr = spawn_app().await;
    let (status, body) = send(addr, "GET", "/health", None).await;
    assert_eq!(status, 200);
    assert!(body.contains("OK"));
}

#[tokio::test]
async fn api_requires_bearer_token() {
    let addr = spawn_app().await;
    let (status, body) = send(addr, "GET", "/customers", None).await;
    assert_eq!(status, 401);
    assert!(body.contains("Missing Authorization header"));

    let (status, _) = send(addr, "GET", "/onboarding/industries", Some("not-a-jwt")).await;
    assert_eq!(status, 401);

    let forged = sign_token(Uuid::new_v4(), "admin", None, "some-other-secret").unwrap();
    let (status, _) = send(addr, "GET", "/admin/modules", Some(&forged)).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn valid_token_reaches_handlers() {
    let addr = spawn_app().await;
    let token = sign_token(Uuid::new_v4(), "authenticated", None, SECRET).unwrap();

    let (status, body) = send(addr, "GET", "/onboarding/industries", Some(&token)).await;
    assert_eq!(status, 200);
    assert!(body.contains("\"retail\""));

    let (status, body) = send(addr, "GET", "/customers", Some(&token)).await;
    assert_eq!(status, 200);
    assert!(body.contains("\"total\":0"));

    let (status, _) = send(addr, "GET", "/admin/features", Some(&token)).await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn admin_profile_unlocks_admin_routes() {
    let store = Arc::new(MemoryStore::new());
    let user = Uuid::new_v4();
    let addr = spawn_app_with(store.clone()).await;
    let token = sign_token(user, "authenticated", None, SECRET).unwrap();

    let (status, _) = send(addr, "GET", "/admin/modules", Some(&token)).await;
    assert_eq!(status, 403);

    store
        .insert(
            Table::Profiles,
            serde_json::from_value(json!({ "id": user, "role": "admin" })).unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = send(addr, "GET", "/admin/modules", Some(&token)).await;
    assert_eq!(status, 200);
    assert!(body.contains("[]"));
}

#[tokio::test]
async fn admin_claim_alone_is_not_enough() {
    let addr = spawn_app().await;
    let token = sign_token(Uuid::new_v4(), "admin", None, SECRET).unwrap();
    let (status, _) = send(addr, "GET", "/admin/features", Some(&token)).await;
    assert_eq!(status, 403);
}
