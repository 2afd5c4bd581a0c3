//! The limit-offset pagination strategy.
//!
//! `limit` is the page window size, `offset` the number of items skipped
//! before the window begins. Continuation links are query strings
//! (`limit=<n>&offset=<n>`) the client can replay to fetch the neighboring
//! pages.

use serde::Serialize;
use url::form_urlencoded;

use crate::page::{Page, PageEnvelope};
use crate::query::{decode, parse_int_prefix};
use crate::strategy::PaginationStrategy;

/// Limit applied when the limit parameter is absent or unparseable.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper clamp on the limit unless overridden.
pub const DEFAULT_MAX_LIMIT: i64 = 100;

/// Query key read for the limit unless overridden.
pub const DEFAULT_LIMIT_PARAMETER: &str = "limit";

/// Query key read for the offset unless overridden.
pub const DEFAULT_OFFSET_PARAMETER: &str = "offset";

/// Per-request pagination parameters derived from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

/// The limit-offset strategy: immutable configuration for parsing and link
/// derivation.
///
/// Construct with struct-update syntax over [`Default`] to override any
/// option independently:
///
/// ```
/// use pagewise_core::LimitOffset;
///
/// let strategy = LimitOffset {
///     default_limit: 50,
///     ..Default::default()
/// };
/// assert_eq!(strategy.parse_query("").limit, 50);
/// ```
///
/// Configured values are used as-is. In particular a negative
/// `default_limit` or `maximum_limit` is not rejected, and a parsed negative
/// limit passes through un-clamped except by `maximum_limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffset {
    /// Query key read for the limit.
    pub limit_parameter: String,
    /// Query key read for the offset.
    pub offset_parameter: String,
    /// Limit applied when the limit parameter is absent or unparseable.
    pub default_limit: i64,
    /// Upper clamp on the limit. Applies after default substitution, so a
    /// `default_limit` above it is clamped too.
    pub maximum_limit: i64,
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit_parameter: DEFAULT_LIMIT_PARAMETER.to_string(),
            offset_parameter: DEFAULT_OFFSET_PARAMETER.to_string(),
            default_limit: DEFAULT_LIMIT,
            maximum_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl LimitOffset {
    /// Derive `(limit, offset)` from query pairs as received on the wire.
    ///
    /// Malformed or missing values resolve silently to `default_limit` /
    /// `0`; this never fails. Duplicate keys: the first occurrence wins.
    pub fn parse_pairs<I, K, V>(&self, pairs: I) -> PageParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut limit: Option<i64> = None;
        let mut offset: Option<i64> = None;
        let mut limit_seen = false;
        let mut offset_seen = false;

        for (key, value) in pairs {
            let key = key.as_ref();
            if !limit_seen && key == self.limit_parameter {
                limit_seen = true;
                limit = parse_int_prefix(value.as_ref());
            }
            if !offset_seen && key == self.offset_parameter {
                offset_seen = true;
                offset = parse_int_prefix(value.as_ref());
            }
            if limit_seen && offset_seen {
                break;
            }
        }

        PageParams {
            limit: limit.unwrap_or(self.default_limit).min(self.maximum_limit),
            offset: offset.unwrap_or(0),
        }
    }

    /// Derive `(limit, offset)` from a raw query string.
    pub fn parse_query(&self, raw_query: &str) -> PageParams {
        self.parse_pairs(decode(raw_query))
    }

    /// Assemble the response envelope for a fetched page.
    ///
    /// Re-derives `(limit, offset)` from `raw_query` rather than trusting a
    /// caller-provided pair, so the emitted links always match what the
    /// request asked for.
    pub fn envelope<T>(&self, raw_query: &str, page: Page<T>) -> PageEnvelope<T> {
        let PageParams { limit, offset } = self.parse_query(raw_query);

        let next = if offset.saturating_add(limit) < page.count {
            Some(continuation(limit, offset.saturating_add(limit)))
        } else {
            None
        };

        let previous = if offset.saturating_sub(limit) < 0 {
            None
        } else {
            Some(continuation(limit, offset.saturating_sub(limit)))
        };

        PageEnvelope {
            count: page.count,
            next,
            previous,
            results: page.items,
        }
    }
}

impl PaginationStrategy for LimitOffset {
    type Params = PageParams;

    fn parse_query(&self, raw_query: &str) -> PageParams {
        LimitOffset::parse_query(self, raw_query)
    }

    fn envelope<T>(&self, raw_query: &str, page: Page<T>) -> PageEnvelope<T> {
        LimitOffset::envelope(self, raw_query, page)
    }
}

/// Encode a continuation link.
///
/// Links always use the literal `limit`/`offset` keys in that order, even
/// when the strategy reads custom parameter names.
fn continuation(limit: i64, offset: i64) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string())
        .finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
