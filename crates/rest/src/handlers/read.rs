//! Read handler.
//!
//! `GET [base]/courses/[id]/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::CourseId;
use crate::state::AppState;

/// Handler for reading one course.
///
/// # HTTP Request
///
/// `GET [base]/courses/[id]/`
///
/// # Response
///
/// - `200 OK` - The course
/// - `404 Not Found` - No course has this id
///
/// # Example
///
/// ```http
/// GET /courses/1/ HTTP/1.1
/// Host: api.example.com
/// Accept: application/json
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    CourseId(id): CourseId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id = id, "Processing read request");

    match state.storage().read(id).await? {
        Some(course) => Ok((StatusCode::OK, Json(course)).into_response()),
        None => {
            debug!(id = id, "Course not found");
            Err(RestError::NotFound)
        }
    }
}
