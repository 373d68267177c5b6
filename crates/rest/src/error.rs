//! Error types for the courses REST API.
//!
//! Every error renders as a JSON object. Errors about the request as a whole
//! carry a `detail` string; errors about individual fields are keyed by the
//! field name and carry a list of messages.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | `{"detail": "Not found."}` |
//! | MethodNotAllowed | 405 | `{"detail": "Method \"<METHOD>\" not allowed."}` |
//! | FieldError | 400 | `{"<field>": ["<message>"]}` |
//! | InvalidData | 400 | `{"non_field_errors": ["..."]}` |
//! | ParseError | 400 | `{"detail": "JSON parse error - ..."}` |
//! | BadRequest | 400 | `{"detail": "..."}` |
//! | PayloadTooLarge | 413 | `{"detail": "..."}` |
//! | UnsupportedMediaType | 415 | `{"detail": "..."}` |
//! | ServiceUnavailable | 503 | `{"detail": "..."}` |
//! | InternalError | 500 | `{"detail": "..."}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No course with the requested id (HTTP 404).
    NotFound,

    /// The route exists but does not accept this method (HTTP 405).
    MethodNotAllowed {
        /// The rejected method.
        method: String,
    },

    /// A single field failed validation (HTTP 400).
    FieldError {
        /// The offending field, or query parameter.
        field: String,
        /// Human-readable message.
        message: String,
    },

    /// The request body was valid JSON but not an object (HTTP 400).
    InvalidData {
        /// The JSON kind that was received (e.g. "array").
        kind: String,
    },

    /// The request body was not valid JSON (HTTP 400).
    ParseError {
        /// Parser message.
        message: String,
    },

    /// Bad request not tied to a field (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body exceeded the configured limit (HTTP 413).
    PayloadTooLarge,

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Storage is not reachable (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound => write!(f, "Not found"),
            RestError::MethodNotAllowed { method } => write!(f, "Method not allowed: {}", method),
            RestError::FieldError { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            RestError::InvalidData { kind } => {
                write!(f, "Invalid data: expected an object, got {}", kind)
            }
            RestError::ParseError { message } => write!(f, "JSON parse error: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::PayloadTooLarge => write!(f, "Payload too large"),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::FieldError { .. }
            | RestError::InvalidData { .. }
            | RestError::ParseError { .. }
            | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON body for this error.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            RestError::NotFound => detail("Not found."),
            RestError::MethodNotAllowed { method } => {
                detail(&format!("Method \"{}\" not allowed.", method))
            }
            RestError::FieldError { field, message } => field_errors(field, message),
            RestError::InvalidData { kind } => field_errors(
                "non_field_errors",
                &format!("Invalid data. Expected a dictionary, but got {}.", kind),
            ),
            RestError::ParseError { message } => {
                detail(&format!("JSON parse error - {}", message))
            }
            RestError::BadRequest { message } => detail(message),
            RestError::PayloadTooLarge => detail("Request body is too large."),
            RestError::UnsupportedMediaType { content_type } => detail(&format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )),
            RestError::ServiceUnavailable { message } | RestError::InternalError { message } => {
                detail(message)
            }
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(self.to_body())).into_response()
    }
}

fn detail(message: &str) -> serde_json::Value {
    serde_json::json!({ "detail": message })
}

fn field_errors(field: &str, message: &str) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), serde_json::json!([message]));
    serde_json::Value::Object(body)
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { .. } => RestError::NotFound,
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::MissingRequiredField { .. } => "This field is required.".to_string(),
            ValidationError::InvalidType { .. } => "Not a valid string.".to_string(),
            ValidationError::Blank { .. } => "This field may not be blank.".to_string(),
            ValidationError::TooLong { max, .. } => {
                format!("Ensure this field has no more than {} characters.", max)
            }
        };
        RestError::FieldError {
            field: err.field().to_string(),
            message,
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::ServiceUnavailable {
                    message: err.to_string(),
                }
            }
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_body() {
        let err = RestError::NotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_body(), serde_json::json!({"detail": "Not found."}));
    }

    #[test]
    fn test_method_not_allowed_body() {
        let err = RestError::MethodNotAllowed {
            method: "DELETE".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            err.to_body(),
            serde_json::json!({"detail": "Method \"DELETE\" not allowed."})
        );
    }

    #[test]
    fn test_field_error_body() {
        let err = RestError::FieldError {
            field: "id".to_string(),
            message: "Enter a number.".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_body(), serde_json::json!({"id": ["Enter a number."]}));
    }

    #[test]
    fn test_invalid_data_body() {
        let err = RestError::InvalidData {
            kind: "array".to_string(),
        };
        assert_eq!(
            err.to_body(),
            serde_json::json!({
                "non_field_errors": ["Invalid data. Expected a dictionary, but got array."]
            })
        );
    }

    #[test]
    fn test_unsupported_media_type_body() {
        let err = RestError::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            err.to_body()["detail"],
            "Unsupported media type \"text/plain\" in request."
        );
    }

    #[test]
    fn test_from_storage_not_found() {
        let err: RestError = StorageError::from(ResourceError::NotFound { id: 9 }).into();
        assert!(matches!(err, RestError::NotFound));
    }

    #[test]
    fn test_from_validation_messages() {
        let cases = [
            (
                ValidationError::MissingRequiredField {
                    field: "name".to_string(),
                },
                "This field is required.",
            ),
            (
                ValidationError::InvalidType {
                    field: "name".to_string(),
                    expected: "string".to_string(),
                },
                "Not a valid string.",
            ),
            (
                ValidationError::Blank {
                    field: "name".to_string(),
                },
                "This field may not be blank.",
            ),
            (
                ValidationError::TooLong {
                    field: "name".to_string(),
                    max: 256,
                },
                "Ensure this field has no more than 256 characters.",
            ),
        ];

        for (validation, expected) in cases {
            let err = RestError::from(validation);
            assert_eq!(err.to_body(), serde_json::json!({"name": [expected]}));
        }
    }

    #[test]
    fn test_from_backend_error() {
        let err: RestError = BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "pool exhausted".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err: RestError = BackendError::MigrationError {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
