//! Update handler.
//!
//! `PUT [base]/courses/[id]/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{CourseBody, CourseId};
use crate::state::AppState;

/// Handler for fully updating a course.
///
/// Every writable field must be supplied. Unlike create, this never makes
/// a new course: an unknown id is 404.
///
/// # HTTP Request
///
/// `PUT [base]/courses/[id]/`
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Missing or invalid fields
/// - `404 Not Found` - No course has this id
///
/// # Example
///
/// ```http
/// PUT /courses/1/ HTTP/1.1
/// Host: api.example.com
/// Content-Type: application/json
///
/// {"name": "Python 3"}
/// ```
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
    body: CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id = id, "Processing update request");

    // Unknown ids take precedence over payload errors
    if !state.storage().exists(id).await? {
        return Err(RestError::NotFound);
    }

    let payload = body.into_new_course()?;
    let course = state.storage().replace(id, payload).await?;

    debug!(id = course.id, name = %course.name, "Course updated");

    Ok((StatusCode::OK, Json(course)).into_response())
}
