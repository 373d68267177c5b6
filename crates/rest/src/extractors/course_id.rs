//! Course id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment of a course URL.
///
/// A segment that is not an integer cannot name a course, so it is rejected
/// with 404 rather than 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseId(pub i64);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;

        raw.parse::<i64>().map(CourseId).map_err(|_| {
            tracing::debug!(id = %raw, "Path id is not an integer");
            RestError::NotFound
        })
    }
}
