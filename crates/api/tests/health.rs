//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get as get_route;
use axum::Router;
use common::{body_json, get};
use projectdash_api::config::ServerConfig;
use projectdash_api::router::with_middleware;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::seeded_app().await;
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_when_pool_is_closed() {
    let app = common::seeded_app().await;
    app.pool.close().await;

    let json = body_json(get(&app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::seeded_app().await;
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::seeded_app().await;
    let response = get(&app, "/api/dashboard").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = common::seeded_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "http://localhost:5000")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5000");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("GET"),
        "Allow-Methods should contain GET, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Middleware: timeout and panic recovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_exceeding_timeout_returns_408() {
    let config = ServerConfig {
        request_timeout_secs: 0,
        ..common::test_config()
    };
    let app = common::seeded_app_with(&config).await;

    // With every pooled connection checked out, the handler waits on acquire
    // until the timeout layer answers for it.
    let mut held = Vec::new();
    for _ in 0..projectdash_db::MAX_CONNECTIONS {
        held.push(app.pool.acquire().await.unwrap());
    }

    let response = get(&app, "/api/dashboard").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    drop(held);
}

async fn panicking_handler() -> &'static str {
    panic!("handler panicked");
}

#[tokio::test]
async fn panicking_handler_returns_500() {
    let router = with_middleware(
        Router::new().route("/panic", get_route(panicking_handler)),
        &common::test_config(),
    );

    let request = Request::builder().uri("/panic").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));
}
