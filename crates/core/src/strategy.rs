//! The pluggable strategy seam.

use crate::page::{Page, PageEnvelope};

/// A pagination strategy: parses request parameters and assembles response
/// envelopes.
///
/// A strategy value is immutable configuration; both operations are pure
/// functions of the query they are handed, so one instance can serve
/// concurrent requests. The host integration layer is written against this
/// trait; [`crate::LimitOffset`] is the shipped implementation.
pub trait PaginationStrategy: Clone + Send + Sync + 'static {
    /// The per-request parameters this strategy derives from a query.
    type Params: Send;

    /// Derive parameters from a raw query string, resolving malformed or
    /// missing input to the strategy's defaults. Never fails.
    fn parse_query(&self, raw_query: &str) -> Self::Params;

    /// Assemble the response envelope for a fetched page.
    ///
    /// Takes the raw query of the request being answered, not previously
    /// parsed parameters: the envelope re-derives them itself so the links
    /// it emits are always consistent with what was requested.
    fn envelope<T>(&self, raw_query: &str, page: Page<T>) -> PageEnvelope<T>;
}
