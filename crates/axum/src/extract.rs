//! The `Pagination` request extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use pagewise_core::{LimitOffset, Page, PaginationStrategy};

use crate::response::Paginated;

/// Extracts pagination parameters from a request's query string.
///
/// The strategy is looked up in the request extensions (attach one with
/// `Router::layer(Extension(strategy))`); when none is attached the
/// strategy's `Default` is used. Extraction never rejects: malformed input
/// resolves to the strategy's defaults.
///
/// Besides the parsed parameters, the extractor keeps the strategy and the
/// raw query so [`Pagination::reply`] can re-derive `(limit, offset)` from
/// the same query when assembling the envelope. The links a response carries
/// therefore always agree with the request being answered, regardless of
/// what the handler did with the parameters in between.
pub struct Pagination<S: PaginationStrategy = LimitOffset> {
    strategy: S,
    raw_query: String,
    params: S::Params,
}

impl<S: PaginationStrategy> Pagination<S> {
    /// The parameters parsed from the request query.
    pub fn params(&self) -> &S::Params {
        &self.params
    }

    /// Assemble the paginated response for a fetched page.
    pub fn reply<T>(&self, page: Page<T>) -> Paginated<T> {
        Paginated(self.strategy.envelope(&self.raw_query, page))
    }
}

impl Pagination<LimitOffset> {
    /// Maximum number of items the handler should return.
    pub fn limit(&self) -> i64 {
        self.params.limit
    }

    /// Number of items the handler should skip.
    pub fn offset(&self) -> i64 {
        self.params.offset
    }
}

impl<AppS, S> FromRequestParts<AppS> for Pagination<S>
where
    AppS: Send + Sync,
    S: PaginationStrategy + Default,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &AppS) -> Result<Self, Infallible> {
        let strategy = parts.extensions.get::<S>().cloned().unwrap_or_default();
        let raw_query = parts.uri.query().unwrap_or_default().to_string();
        let params = strategy.parse_query(&raw_query);

        Ok(Self {
            strategy,
            raw_query,
            params,
        })
    }
}
