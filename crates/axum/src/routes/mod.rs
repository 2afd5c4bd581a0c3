use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod items;

/// All routes nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(items::router())
}
