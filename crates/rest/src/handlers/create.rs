//! Create handler.
//!
//! `POST [base]/courses/`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CourseBody;
use crate::state::AppState;

/// Handler for creating a course.
///
/// The server assigns the id. Any `id` in the body is ignored.
///
/// # HTTP Request
///
/// `POST [base]/courses/`
///
/// # Response
///
/// - `201 Created` - The created course, with a `Location` header
/// - `400 Bad Request` - Invalid JSON or field values
/// - `415 Unsupported Media Type` - Body is not JSON
///
/// # Example
///
/// ```http
/// POST /courses/ HTTP/1.1
/// Host: api.example.com
/// Content-Type: application/json
///
/// {"name": "HTML"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    body: CourseBody,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!("Processing create request");

    let payload = body.into_new_course()?;
    let course = state.storage().create(payload).await?;

    debug!(id = course.id, name = %course.name, "Course created");

    let location = state.course_url(course.id);
    let mut response = (StatusCode::CREATED, Json(course)).into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, value);
    }

    Ok(response)
}
