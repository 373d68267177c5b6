//! Course route configuration.
//!
//! Defines all routes for the courses REST API.

use axum::{Router, routing::get};
use courses_persistence::core::CourseStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all courses REST API routes.
///
/// Every course route answers both with and without a trailing slash.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Collection
/// - `GET /courses/` - List (filter with `id`, `name`; sort with `ordering`)
/// - `POST /courses/` - Create
///
/// ## Instance
/// - `GET /courses/{id}/` - Read
/// - `PUT /courses/{id}/` - Update
/// - `PATCH /courses/{id}/` - Patch
/// - `DELETE /courses/{id}/` - Delete
///
/// Unknown paths answer 404 and unsupported methods 405, both with JSON
/// error bodies.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CourseStorage + Send + Sync + 'static,
{
    let collection = get(handlers::list_handler::<S>).post(handlers::create_handler::<S>);
    let instance = get(handlers::read_handler::<S>)
        .put(handlers::update_handler::<S>)
        .patch(handlers::patch_handler::<S>)
        .delete(handlers::delete_handler::<S>);

    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Collection routes
        .route("/courses", collection.clone())
        .route("/courses/", collection)
        // Instance routes
        .route("/courses/{id}", instance.clone())
        .route("/courses/{id}/", instance)
        // JSON bodies for unmatched paths and methods
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        // State
        .with_state(state)
}
