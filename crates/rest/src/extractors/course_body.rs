//! Course body extractor.
//!
//! Extracts a JSON object from the request body and turns it into the
//! create, replace or patch payloads understood by storage.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use courses_persistence::error::ValidationError;
use courses_persistence::types::{CoursePatch, NewCourse};
use serde_json::{Map, Value};

use crate::error::RestError;

/// Axum extractor for course payloads.
///
/// Accepts `application/json` (and `+json` suffixed types). A request with
/// no `Content-Type` is read as JSON, and an empty body is an empty object.
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::extractors::CourseBody;
///
/// async fn create_handler(body: CourseBody) {
///     let payload = body.into_new_course()?;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CourseBody(pub Map<String, Value>);

impl CourseBody {
    /// Reads the fields of a full course, as needed for create and replace.
    ///
    /// Unknown fields (including `id`) are ignored. String values are stored
    /// with surrounding whitespace trimmed.
    pub fn into_new_course(self) -> Result<NewCourse, ValidationError> {
        match string_field(&self.0, "name")? {
            Some(name) => Ok(NewCourse::new(name)),
            None => Err(ValidationError::MissingRequiredField {
                field: "name".to_string(),
            }),
        }
    }

    /// Reads the fields present in a partial update.
    pub fn into_patch(self) -> Result<CoursePatch, ValidationError> {
        Ok(CoursePatch {
            name: string_field(&self.0, "name")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, field: &str) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "string".to_string(),
        }),
    }
}

/// Returns the JSON kind of a value, as reported in error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    match content_type.parse::<mime::Mime>() {
        Ok(m) => {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        }
        Err(_) => false,
    }
}

/// Error type for course body extraction failures.
#[derive(Debug)]
pub enum CourseBodyRejection {
    /// The body could not be read.
    BodyRead(String),
    /// The body exceeded the configured size limit.
    TooLarge,
    /// JSON parsing failed.
    InvalidJson(String),
    /// The body was JSON but not an object.
    NotAnObject(&'static str),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl From<CourseBodyRejection> for RestError {
    fn from(rejection: CourseBodyRejection) -> Self {
        match rejection {
            CourseBodyRejection::BodyRead(message) => RestError::BadRequest { message },
            CourseBodyRejection::TooLarge => RestError::PayloadTooLarge,
            CourseBodyRejection::InvalidJson(message) => RestError::ParseError { message },
            CourseBodyRejection::NotAnObject(kind) => RestError::InvalidData {
                kind: kind.to_string(),
            },
            CourseBodyRejection::UnsupportedMediaType(content_type) => {
                RestError::UnsupportedMediaType { content_type }
            }
        }
    }
}

impl IntoResponse for CourseBodyRejection {
    fn into_response(self) -> Response {
        RestError::from(self).into_response()
    }
}

impl<S> FromRequest<S> for CourseBody
where
    S: Send + Sync,
{
    type Rejection = CourseBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A header that is not visible ASCII is still a content type, just not JSON
        if let Some(value) = req.headers().get(header::CONTENT_TYPE) {
            let is_json = value.to_str().is_ok_and(is_json_content_type);
            if !is_json {
                return Err(CourseBodyRejection::UnsupportedMediaType(
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                ));
            }
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                CourseBodyRejection::TooLarge
            } else {
                CourseBodyRejection::BodyRead(e.body_text())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CourseBody(Map::new()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| CourseBodyRejection::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(object) => Ok(CourseBody(object)),
            other => Err(CourseBodyRejection::NotAnObject(json_kind(&other))),
        }
    }
}
