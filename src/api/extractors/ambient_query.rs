//! The request's own query string as the ambient query for page links.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::domain::{QueryParams, QuerySource};
use crate::errors::AppResult;

/// Raw query string of the current request.
///
/// Parsing is deferred until a page URL actually needs it, so a malformed
/// query only matters when links are built from it.
#[derive(Debug, Clone, Default)]
pub struct AmbientQuery {
    raw: Option<String>,
    reserved: &'static [&'static str],
}

impl AmbientQuery {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw, reserved: &[] }
    }

    /// Leave out parameters the handler consumes itself.
    pub fn without_keys(mut self, keys: &'static [&'static str]) -> Self {
        self.reserved = keys;
        self
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AmbientQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AmbientQuery::new(parts.uri.query().map(str::to_string)))
    }
}

impl QuerySource for AmbientQuery {
    fn query_params(&self) -> AppResult<QueryParams> {
        let params = match &self.raw {
            Some(raw) => QueryParams::parse(raw)?,
            None => QueryParams::new(),
        };
        Ok(params
            .iter()
            .filter(|(key, _)| !self.reserved.contains(key))
            .collect())
    }
}
