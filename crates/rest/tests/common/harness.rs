//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use courses_persistence::backends::sqlite::SqliteBackend;
use courses_persistence::core::CourseStorage;
use serde_json::Value;

use courses_rest::{AppState, ServerConfig, routing};

use super::fixtures::CourseFactory;

/// Test harness for REST API testing.
///
/// Holds a test server over a fresh in-memory SQLite backend, plus a shared
/// handle on that backend for seeding and inspecting state.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::new();
///     let course = harness.factory().create_named("Python").await;
///
///     let response = harness.get(&format!("/courses/{}/", course.id)).await;
///
///     assert_eq!(response.status_code(), 200);
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<SqliteBackend>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let state = AppState::new(Arc::clone(&backend), config.clone());
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Returns a course factory writing to the harness backend.
    pub fn factory(&self) -> CourseFactory<'_, SqliteBackend> {
        CourseFactory::new(&self.backend)
    }

    /// Returns the number of stored courses.
    pub async fn count(&self) -> u64 {
        self.backend.count().await.expect("Failed to count courses")
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a PATCH request with JSON body.
    pub async fn patch(&self, path: &str, body: Value) -> TestResponse {
        self.server.patch(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}

/// Returns the detail URL of a course.
pub fn course_path(id: i64) -> String {
    format!("/courses/{}/", id)
}
