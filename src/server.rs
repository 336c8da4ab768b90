//! HTTP server: the rendered page plus the contact relay.
//!
//! Three kinds of route, one process:
//!
//! - `GET /` serves the portfolio page, rendered once at startup and held
//!   as a string for the process lifetime
//! - `GET /assets/{*path}` serves binary assets (photos, logos, the CV)
//!   from the configured directory
//! - `POST /api/contact` is the relay: validate field presence, compose
//!   one email, hand it to the [`Mailer`], map the outcome to a status
//!
//! ## The Relay Contract
//!
//! Requests are independent; there is no shared mutable state, no retry,
//! no queue, and no idempotency key — a duplicate submission sends a
//! duplicate email. Validation is presence-only and happens before the
//! transport is touched. Transport failures are logged server-side and
//! reported to the caller as a fixed generic body with no detail leak.
//!
//! ## CORS
//!
//! Open to any origin, methods limited to GET and POST, as a small axum
//! middleware (the page may be statically hosted on a different origin
//! than the relay).

use axum::extract::{Path as UrlPath, Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::SiteConfig;
use crate::content::Portfolio;
use crate::mail::{Mailer, OutboundMail};
use crate::render;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared server state. Cheap to clone; everything heavy is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    page: String,
    mailer: Arc<dyn Mailer>,
    inbox: String,
    assets_dir: PathBuf,
}

impl AppState {
    pub fn new(page: String, mailer: Arc<dyn Mailer>, inbox: String, assets_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(StateInner {
                page,
                mailer,
                inbox,
                assets_dir,
            }),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/healthz", get(healthz_handler))
        .route("/assets/{*path}", get(asset_handler))
        .route("/api/contact", post(contact_handler))
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: &SiteConfig, portfolio: &Portfolio, mailer: Arc<dyn Mailer>) -> Result<(), ServeError> {
    let page = render::render_page(portfolio, config);
    let state = AppState::new(
        page,
        mailer,
        config.mail.delivery_inbox().to_string(),
        PathBuf::from(&config.server.assets_dir),
    );

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

async fn page_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.inner.page.clone())
}

async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// The contact relay. One submission in, at most one email out.
async fn contact_handler(
    State(state): State<AppState>,
    Json(submission): Json<crate::mail::ContactSubmission>,
) -> Response {
    if !submission.is_complete() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "All fields are required"})),
        )
            .into_response();
    }

    let mail = OutboundMail::compose(&submission, &state.inner.inbox);
    match state.inner.mailer.deliver(&mail).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Message sent successfully"})),
        )
            .into_response(),
        Err(err) => {
            // Logged here, never surfaced to the caller.
            error!(error = %err, reply_to = %mail.reply_to, "contact delivery failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to send message"})),
            )
                .into_response()
        }
    }
}

async fn asset_handler(
    State(state): State<AppState>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    let rel = Path::new(&path);
    if !is_safe_rel_path(rel) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let full = state.inner.assets_dir.join(rel);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let mime = content_type_for(rel);
            ([(header::CONTENT_TYPE, mime)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Reject anything but plain `a/b/c` relative paths. Assets are a flat,
/// operator-controlled directory; there is no reason to honor `..` or
/// absolute components.
fn is_safe_rel_path(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Open CORS: any origin, GET and POST. Preflights are answered here and
/// never reach a handler.
async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        put_cors_headers(resp.headers_mut());
        resp.headers_mut().insert(
            "access-control-allow-headers",
            HeaderValue::from_static("content-type"),
        );
        return resp;
    }

    let mut resp = next.run(req).await;
    put_cors_headers(resp.headers_mut());
    resp
}

fn put_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_paths_are_plain_relative() {
        assert!(is_safe_rel_path(Path::new("image.jpg")));
        assert!(is_safe_rel_path(Path::new("logos/uom.png")));
        assert!(!is_safe_rel_path(Path::new("")));
        assert!(!is_safe_rel_path(Path::new("../secret")));
        assert!(!is_safe_rel_path(Path::new("a/../../b")));
        assert!(!is_safe_rel_path(Path::new("/etc/passwd")));
    }

    #[test]
    fn content_types_cover_site_assets() {
        assert_eq!(content_type_for(Path::new("x.png")), "image/png");
        assert_eq!(content_type_for(Path::new("x.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("cv.pdf")), "application/pdf");
        assert_eq!(
            content_type_for(Path::new("unknown.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("noext")),
            "application/octet-stream"
        );
    }
}
