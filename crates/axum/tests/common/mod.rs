use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pagewise_axum::config::ServerConfig;
use pagewise_axum::router::build_app_router;
use pagewise_axum::routes::items::seed_items;
use pagewise_axum::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and the stock pagination bounds.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_page_limit: 20,
        max_page_limit: 100,
    }
}

/// Build the full application router over a dataset of `item_count` seeded
/// items.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, pagination extension) that production uses.
#[allow(dead_code)]
pub fn build_test_app(item_count: usize) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        items: Arc::new(seed_items(item_count)),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against an in-memory router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("body must be JSON")
}
