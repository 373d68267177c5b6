//! List handler.
//!
//! `GET [base]/courses/?id=&name=&ordering=`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListQuery;
use crate::state::AppState;

/// Handler for listing courses.
///
/// Returns a JSON array of every course matching the filters, in the
/// requested order (ascending id by default).
///
/// # HTTP Request
///
/// `GET [base]/courses/`
///
/// # Query Parameters
///
/// - `id` - Exact id
/// - `name` - Exact, case-sensitive name
/// - `ordering` - e.g. `name`, `-id`, `-name,id`
///
/// # Response
///
/// - `200 OK` - Array of courses (possibly empty)
/// - `400 Bad Request` - `id` is not an integer
///
/// # Example
///
/// ```http
/// GET /courses/?name=Python HTTP/1.1
/// Host: api.example.com
/// ```
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    ListQuery(filter): ListQuery,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(
        id = ?filter.id,
        name = ?filter.name,
        ordering = ?filter.ordering,
        "Processing list request"
    );

    let courses = state.storage().list(&filter).await?;

    debug!(count = courses.len(), "Returning courses");

    Ok((StatusCode::OK, Json(courses)).into_response())
}
