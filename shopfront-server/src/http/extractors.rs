//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Location id from the path.
///
/// `id` is `None` when the segment is not an integer (or not even valid
/// UTF-8): such an id can never match a row, so handlers answer
/// "not found" without querying. `raw` keeps the segment as requested.
pub struct LocationId {
    pub id: Option<i64>,
    pub raw: String,
}

impl LocationId {
    fn parse(raw: &str) -> Option<i64> {
        raw.trim().parse().ok()
    }
}

impl<S> FromRequestParts<S> for LocationId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "unreadable location id");
                String::new()
            }
        };

        Ok(Self {
            id: Self::parse(&raw),
            raw,
        })
    }
}
