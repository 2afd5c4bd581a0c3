//! Axum integration for the `pagewise` pagination strategies.
//!
//! Exposes the [`Pagination`] extractor and [`Paginated`] response type,
//! plus the reference server's building blocks (config, error handling,
//! routes, router) so integration tests and the binary entrypoint can both
//! access them.
//!
//! A strategy is attached to a router with an extension layer; routes then
//! take the extractor and reply through it:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/items", get(list_items))
//!     .layer(Extension(LimitOffset::default()));
//!
//! async fn list_items(pagination: Pagination) -> Paginated<Item> {
//!     let window = fetch(pagination.limit(), pagination.offset());
//!     pagination.reply(Page::new(total, window))
//! }
//! ```
//!
//! Routers without the extension fall back to `LimitOffset::default()`.

pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

pub use extract::Pagination;
pub use response::Paginated;
