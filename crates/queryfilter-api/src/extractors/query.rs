//! `FilterQuery` extractor: the raw query string as [`QueryParams`].

use std::convert::Infallible;
use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use queryfilter_scope::QueryParams;

/// The request's query parameters, with repeated keys kept.
///
/// Never rejects: a missing query string yields empty parameters.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery(pub QueryParams);

impl FilterQuery {
    /// Returns the inner parameters.
    pub fn into_inner(self) -> QueryParams {
        self.0
    }
}

impl Deref for FilterQuery {
    type Target = QueryParams;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = parts
            .uri
            .query()
            .map(QueryParams::parse)
            .unwrap_or_default();
        Ok(Self(params))
    }
}
