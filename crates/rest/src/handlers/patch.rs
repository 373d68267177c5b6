//! Patch handler.
//!
//! `PATCH [base]/courses/[id]/`

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

/// Handler for partially updating a course.
///
/// Only the fields present in the body change. An empty object leaves the
/// course as it is and returns it.
///
/// # HTTP Request
///
/// `PATCH [base]/courses/[id]/`
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid field values
/// - `404 Not Found` - No course has this id
///
/// # Example
///
/// ```http
/// PATCH /courses/1/ HTTP/1.1
/// Host: api.example.com
/// Content-Type: application/json
///
/// {"name": "New Course"}
/// ```
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
    body: CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id = id, "Processing patch request");

    // Unknown ids take precedence over payload errors
    if !state.storage().exists(id).await? {
        return Err(RestError::NotFound);
    }

    let patch = body.into_patch()?;
    let course = state.storage().update(id, patch).await?;

    debug!(id = course.id, name = %course.name, "Course patched");

    Ok((StatusCode::OK, Json(course)).into_response())
}
