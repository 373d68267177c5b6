//! List query extractor.
//!
//! Extracts the `id`, `name` and `ordering` parameters of a course listing
//! into a [`CourseFilter`].

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use courses_persistence::types::{CourseFilter, Ordering};

use crate::error::RestError;

/// Axum extractor for course list parameters.
///
/// - `id` - exact id; must be an integer
/// - `name` - exact, case-sensitive name
/// - `ordering` - comma separated fields, `-` prefix for descending
///
/// Empty values are treated as absent, repeated parameters take the last
/// value, and unknown parameters are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::extractors::ListQuery;
///
/// async fn list_handler(ListQuery(filter): ListQuery) {
///     let courses = storage.list(&filter).await?;
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery(pub CourseFilter);

impl ListQuery {
    /// Builds a filter from decoded query pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut id: Option<String> = None;
        let mut name: Option<String> = None;
        let mut ordering: Option<String> = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "id" => id = Some(value.to_string()),
                "name" => name = Some(value.to_string()),
                "ordering" => ordering = Some(value.to_string()),
                _ => {}
            }
        }

        let mut filter = CourseFilter::new();

        if let Some(raw) = id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let parsed = raw.parse::<i64>().map_err(|_| RestError::FieldError {
                field: "id".to_string(),
                message: "Enter a number.".to_string(),
            })?;
            filter = filter.with_id(parsed);
        }

        if let Some(name) = name.filter(|s| !s.is_empty()) {
            filter = filter.with_name(name);
        }

        if let Some(ordering) = ordering {
            filter.ordering = Ordering::parse_list(&ordering);
        }

        Ok(ListQuery(filter))
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        ListQuery::from_pairs(pairs)
    }
}
