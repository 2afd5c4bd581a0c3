//! Integration tests for the `Pagination` extractor, through a probe route
//! that echoes the parsed parameters back as JSON.

mod common;

use axum::routing::get;
use axum::{Extension, Json, Router};
use common::body_json;
use pagewise_axum::Pagination;
use pagewise_core::{limit_offset, LimitOffset, PageParams};

async fn echo_params(pagination: Pagination) -> Json<PageParams> {
    Json(*pagination.params())
}

/// A router with the probe route and the given strategy attached.
fn echo_app(strategy: LimitOffset) -> Router {
    Router::new()
        .route("/", get(echo_params))
        .layer(Extension(strategy))
}

/// A router with the probe route and no strategy extension at all.
fn bare_echo_app() -> Router {
    Router::new().route("/", get(echo_params))
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sets_a_default_limit_if_none_is_provided() {
    let payload = body_json(common::get(echo_app(LimitOffset::default()), "/").await).await;

    assert_eq!(payload["limit"], limit_offset::DEFAULT_LIMIT);
    assert_eq!(payload["offset"], 0);
}

#[tokio::test]
async fn clamps_to_the_default_maximum_limit() {
    let payload =
        body_json(common::get(echo_app(LimitOffset::default()), "/?limit=1000").await).await;

    assert_eq!(payload["limit"], limit_offset::DEFAULT_MAX_LIMIT);
}

#[tokio::test]
async fn falls_back_to_the_default_strategy_without_an_extension() {
    let payload = body_json(common::get(bare_echo_app(), "/?limit=30&offset=40").await).await;

    assert_eq!(payload["limit"], 30);
    assert_eq!(payload["offset"], 40);
}

#[tokio::test]
async fn resolves_garbage_values_to_defaults() {
    let payload =
        body_json(common::get(echo_app(LimitOffset::default()), "/?limit=abc&offset=xyz").await)
            .await;

    assert_eq!(payload["limit"], limit_offset::DEFAULT_LIMIT);
    assert_eq!(payload["offset"], 0);
}

#[tokio::test]
async fn reads_a_leading_integer_prefix() {
    let payload =
        body_json(common::get(echo_app(LimitOffset::default()), "/?limit=12abc").await).await;

    assert_eq!(payload["limit"], 12);
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[tokio::test]
async fn supports_receiving_a_default_limit() {
    let strategy = LimitOffset {
        default_limit: 50,
        ..Default::default()
    };
    let payload = body_json(common::get(echo_app(strategy), "/").await).await;

    assert_eq!(payload["limit"], 50);
}

#[tokio::test]
async fn supports_receiving_a_custom_limit_parameter_key() {
    let strategy = LimitOffset {
        limit_parameter: "foo".to_string(),
        ..Default::default()
    };
    let payload = body_json(common::get(echo_app(strategy), "/?foo=55").await).await;

    assert_eq!(payload["limit"], 55);
}

#[tokio::test]
async fn supports_receiving_a_custom_offset_parameter_key() {
    let strategy = LimitOffset {
        offset_parameter: "foo".to_string(),
        ..Default::default()
    };
    let payload = body_json(common::get(echo_app(strategy), "/?foo=10").await).await;

    assert_eq!(payload["offset"], 10);
}

#[tokio::test]
async fn supports_receiving_a_custom_maximum_limit() {
    let strategy = LimitOffset {
        maximum_limit: 1000,
        ..Default::default()
    };
    let payload = body_json(common::get(echo_app(strategy), "/?limit=1000").await).await;

    assert_eq!(payload["limit"], 1000);
}
