//! Page input and response envelope types.

use serde::Serialize;

/// One window of results plus the total item count.
///
/// `count` is the total number of items available, not the size of this
/// window. The window itself is whatever slice the caller fetched for the
/// current `(limit, offset)`.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Total items available across all pages.
    pub count: i64,
    /// The current page's items.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(count: i64, items: Vec<T>) -> Self {
        Self { count, items }
    }
}

/// The wire envelope for a paginated listing.
///
/// Serializes to exactly `{ "count": ..., "next": ..., "previous": ...,
/// "results": [...] }` with absent links as `null`. `next`/`previous`, when
/// present, are form-url-encoded query strings (`limit=<n>&offset=<n>`)
/// describing the neighboring pages.
#[derive(Debug, Clone, Serialize)]
pub struct PageEnvelope<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
