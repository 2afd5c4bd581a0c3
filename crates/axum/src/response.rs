//! Paginated response envelope for Axum handlers.
//!
//! Use [`Paginated`] instead of hand-rolled `serde_json::json!` envelopes so
//! every listing endpoint emits the same
//! `{ "count": ..., "next": ..., "previous": ..., "results": [...] }` shape.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pagewise_core::PageEnvelope;

/// A paginated listing, sent as JSON.
///
/// Produced by [`crate::Pagination::reply`]; handlers return it directly.
#[derive(Debug)]
pub struct Paginated<T>(pub PageEnvelope<T>);

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}
