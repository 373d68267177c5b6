//! Delete handler.
//!
//! `DELETE [base]/courses/[id]/`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CourseId;
use crate::state::AppState;

/// Handler for deleting a course.
///
/// The course is removed permanently and its id is not handed out again.
///
/// # HTTP Request
///
/// `DELETE [base]/courses/[id]/`
///
/// # Response
///
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No course has this id
///
/// # Example
///
/// ```http
/// DELETE /courses/1/ HTTP/1.1
/// Host: api.example.com
/// ```
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id = id, "Processing delete request");

    state.storage().delete(id).await?;

    debug!(id = id, "Course deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
