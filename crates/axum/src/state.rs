use std::sync::Arc;

use crate::config::ServerConfig;
use crate::routes::items::Item;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The reference server's seeded dataset.
    pub items: Arc<Vec<Item>>,
}
