//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` (minus the outer tower-http
//! layers, which are orthogonal to the API behavior under test) so requests
//! exercise the real handler stack via `tower::ServiceExt` without a TCP
//! listener.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use webreporter::{
    config::{Config, DatabaseConfig, ServerConfig},
    db::repositories::{ReportRepository, UserRepository},
    handlers,
    models::{NewReport, NewUser, Report, User},
    state::AppState,
};

pub const DEFAULT_TITLE: &str = "AAAAAAAAAA";
pub const UPDATED_TITLE: &str = "BBBBBBBBBB";

pub const DEFAULT_DESCRIPTION: &str = "AAAAAAAAAA";
pub const UPDATED_DESCRIPTION: &str = "BBBBBBBBBB";

pub const DEFAULT_IP_ADDRESS: &str = "AAAAAAAAAA";
pub const UPDATED_IP_ADDRESS: &str = "BBBBBBBBBB";

/// Build a test `Config` with safe defaults; the database settings are
/// unused because the pool comes from `#[sqlx::test]`.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
        },
    }
}

/// Build the application router on the given pool
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState::new(pool, test_config());

    Router::new()
        .nest("/api", handlers::routes())
        .with_state(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, "application/json", body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, "application/json", body).await
}

/// PATCH with the merge-patch media type the partial-update endpoint speaks
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, "application/merge-patch+json", body).await
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a user directly through the repository layer
pub async fn seed_user(pool: &PgPool, login: &str) -> User {
    UserRepository::create(
        pool,
        &NewUser {
            login: login.to_string(),
            email: Some(format!("{login}@example.com")),
            display_name: Some(login.to_uppercase()),
        },
    )
    .await
    .unwrap()
}

/// Insert the canonical test report directly through the repository layer
pub async fn seed_report(pool: &PgPool, user_id: Option<i64>) -> Report {
    ReportRepository::create(
        pool,
        &NewReport {
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            ip_address: DEFAULT_IP_ADDRESS.to_string(),
            user_id,
        },
    )
    .await
    .unwrap()
}

/// Count all stored reports, bypassing the HTTP layer
pub async fn stored_report_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM reports")
        .fetch_one(pool)
        .await
        .unwrap()
}
