#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use projectdash_api::config::{LogFormat, ServerConfig};
use projectdash_api::router::build_app_router;
use projectdash_api::state::AppState;
use projectdash_db::DbPool;
use sqlx::sqlite::SqliteConnectOptions;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router backed by its own SQLite file.
///
/// The temporary directory is deleted when the `TestApp` is dropped, so
/// keep it alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

fn app_for(pool: DbPool, dir: TempDir, config: &ServerConfig) -> TestApp {
    let state = AppState { pool: pool.clone() };
    TestApp {
        router: build_app_router(state, config),
        pool,
        _dir: dir,
    }
}

/// A fresh store, bootstrapped exactly as production does (schema + seed).
pub async fn seeded_app() -> TestApp {
    seeded_app_with(&test_config()).await
}

/// [`seeded_app`] behind a router built from `config`.
pub async fn seeded_app_with(config: &ServerConfig) -> TestApp {
    let dir = TempDir::new().unwrap();
    let options = SqliteConnectOptions::new().filename(dir.path().join("test_projects.db"));
    let pool = projectdash_db::bootstrap(options).await.unwrap();
    app_for(pool, dir, config)
}

/// A store with the schema applied but no rows.
pub async fn empty_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("empty.db"))
        .create_if_missing(true);
    let pool = projectdash_db::create_pool(options).await.unwrap();
    projectdash_db::init_schema(&pool).await.unwrap();
    app_for(pool, dir, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
