//! End-to-end tests for the contact relay over a real TCP listener.
//!
//! Requests are raw HTTP so the assertions cover the actual wire bytes,
//! including status line and CORS headers, not an extractor's view of them.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use folio::mail::MemoryMailer;
use folio::server::{build_router, AppState};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_server(mailer: Arc<MemoryMailer>) -> SocketAddr {
    let state = AppState::new(
        "<!DOCTYPE html><html><body>portfolio</body></html>".to_string(),
        mailer,
        "inbox@example.com".to_string(),
        PathBuf::from("assets-that-do-not-exist"),
    );
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if !body.is_empty() {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    req.push_str(body);
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

async fn post_contact(addr: SocketAddr, payload: &Value) -> (u16, Value) {
    let body = payload.to_string();
    let (status, _, body) = send_raw(addr, "POST", "/api/contact", &body).await;
    let json: Value = serde_json::from_str(&body).expect("json response body");
    (status, json)
}

#[tokio::test]
async fn missing_field_is_rejected_without_touching_the_transport() {
    let mailer = Arc::new(MemoryMailer::new());
    let addr = spawn_server(mailer.clone()).await;

    let (status, json) = post_contact(
        addr,
        &serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some("All fields are required")
    );
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn empty_string_field_counts_as_missing() {
    let mailer = Arc::new(MemoryMailer::new());
    let addr = spawn_server(mailer.clone()).await;

    let (status, json) = post_contact(
        addr,
        &serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "",
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some("All fields are required")
    );
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn complete_submission_is_delivered_exactly_once() {
    let mailer = Arc::new(MemoryMailer::new());
    let addr = spawn_server(mailer.clone()).await;

    let (status, json) = post_contact(
        addr,
        &serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Analytical engines",
            "message": "Your notes on the engine were wonderful.",
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some("Message sent successfully")
    );

    assert_eq!(mailer.attempt_count(), 1);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let mail = &sent[0];
    assert_eq!(mail.to, "inbox@example.com");
    assert_eq!(mail.reply_to, "ada@example.com");
    for body in [&mail.text_body, &mail.html_body] {
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Analytical engines"));
        assert!(body.contains("Your notes on the engine were wonderful."));
    }
}

#[tokio::test]
async fn transport_failure_maps_to_an_opaque_500() {
    let mailer = Arc::new(MemoryMailer::failing());
    let addr = spawn_server(mailer.clone()).await;

    let (status, json) = post_contact(
        addr,
        &serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Hi there",
        }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some("Failed to send message")
    );
    // The SMTP-level reason must not leak to the client.
    assert!(!json.to_string().contains("simulated"));
    // The transport was invoked exactly once and refused the delivery.
    assert_eq!(mailer.attempt_count(), 1);
    assert_eq!(mailer.delivery_count(), 0);
}

#[tokio::test]
async fn responses_carry_open_cors_headers() {
    let addr = spawn_server(Arc::new(MemoryMailer::new())).await;

    let (status, headers, _) = send_raw(addr, "GET", "/", "").await;
    assert_eq!(status, 200);
    let headers = headers.to_ascii_lowercase();
    assert!(headers.contains("access-control-allow-origin: *"));
    assert!(headers.contains("access-control-allow-methods: get,post"));
}

#[tokio::test]
async fn preflight_is_answered_without_a_body() {
    let addr = spawn_server(Arc::new(MemoryMailer::new())).await;

    let (status, headers, body) = send_raw(addr, "OPTIONS", "/api/contact", "").await;
    assert_eq!(status, 204);
    assert!(headers
        .to_ascii_lowercase()
        .contains("access-control-allow-origin: *"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn page_and_healthz_are_served() {
    let addr = spawn_server(Arc::new(MemoryMailer::new())).await;

    let (status, headers, body) = send_raw(addr, "GET", "/", "").await;
    assert_eq!(status, 200);
    assert!(headers.to_ascii_lowercase().contains("text/html"));
    assert!(body.contains("portfolio"));

    let (status, _, body) = send_raw(addr, "GET", "/healthz", "").await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("healthz json");
    assert_eq!(json.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn missing_assets_are_a_404_not_an_error() {
    let addr = spawn_server(Arc::new(MemoryMailer::new())).await;

    let (status, _, _) = send_raw(addr, "GET", "/assets/nope.png", "").await;
    assert_eq!(status, 404);

    let (status, _, _) = send_raw(addr, "GET", "/assets/../secret.txt", "").await;
    assert_eq!(status, 404);
}
