//! Fallback handlers.
//!
//! Give unmatched paths and unsupported methods the same JSON error bodies
//! as the course endpoints.

use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::RestError;

/// Handler for paths that match no route.
///
/// # Response
///
/// - `404 Not Found` - `{"detail": "Not found."}`
pub async fn not_found_handler(uri: Uri) -> RestError {
    debug!(path = %uri.path(), "No route matched");
    RestError::NotFound
}

/// Handler for a known path called with a method it does not support.
///
/// # Response
///
/// - `405 Method Not Allowed` - `{"detail": "Method \"<METHOD>\" not allowed."}`
pub async fn method_not_allowed_handler(method: Method) -> RestError {
    debug!(method = %method, "Method not allowed");
    RestError::MethodNotAllowed {
        method: method.to_string(),
    }
}
