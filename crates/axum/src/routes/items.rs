//! Reference routes: a paginated listing over a seeded dataset.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use pagewise_core::Page;

use crate::error::{AppError, AppResult};
use crate::extract::Pagination;
use crate::response::Paginated;
use crate::state::AppState;

/// A demo item.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Seed `count` items with ids `1..=count`.
pub fn seed_items(count: usize) -> Vec<Item> {
    (1..=count as i64)
        .map(|id| Item {
            id,
            name: format!("item-{id}"),
        })
        .collect()
}

/// GET /items
///
/// Paginated listing of the seeded dataset.
async fn list_items(State(state): State<AppState>, pagination: Pagination) -> Paginated<Item> {
    let results = window(&state.items, pagination.limit(), pagination.offset());
    pagination.reply(Page::new(state.items.len() as i64, results))
}

/// GET /items/{id}
async fn get_item(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Item>> {
    if id < 1 {
        return Err(AppError::BadRequest("item id must be positive".into()));
    }

    state
        .items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound { entity: "item", id })
}

/// Slice the requested window out of the dataset.
///
/// Pagination parameters are not range-checked upstream, so out-of-range and
/// negative values saturate to an empty or truncated window here.
fn window(items: &[Item], limit: i64, offset: i64) -> Vec<Item> {
    let len = items.len();
    let start = offset.clamp(0, len as i64) as usize;
    let take = limit.max(0) as usize;
    let end = start.saturating_add(take).min(len);
    items[start..end].to_vec()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/{id}", get(get_item))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
