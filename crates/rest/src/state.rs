//! Application state for the courses REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use courses_persistence::core::CourseStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`CourseStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::{AppState, ServerConfig};
/// use courses_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig::default();
/// let state = AppState::new(Arc::new(backend), config);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: CourseStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the base URL for the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Returns the absolute URL of a course.
    pub fn course_url(&self, id: i64) -> String {
        format!("{}/courses/{}/", self.base_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use courses_persistence::error::{BackendError, StorageResult};
    use courses_persistence::types::{Course, CourseFilter, CoursePatch, NewCourse};

    // Mock storage for testing
    struct MockStorage;

    #[async_trait]
    impl CourseStorage for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn create(&self, _course: NewCourse) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn read(&self, _id: i64) -> StorageResult<Option<Course>> {
            unimplemented!()
        }

        async fn list(&self, _filter: &CourseFilter) -> StorageResult<Vec<Course>> {
            unimplemented!()
        }

        async fn update(&self, _id: i64, _patch: CoursePatch) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn replace(&self, _id: i64, _course: NewCourse) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }

        async fn count(&self) -> StorageResult<u64> {
            unimplemented!()
        }

        async fn health_check(&self) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);

        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_course_url() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig {
            base_url: "https://api.example.com/".to_string(),
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert_eq!(state.course_url(12), "https://api.example.com/courses/12/");
    }

    #[test]
    fn test_app_state_clone() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);
        let cloned = state.clone();

        assert_eq!(state.base_url(), cloned.base_url());
        assert!(Arc::ptr_eq(&state.storage, &cloned.storage));
    }
}
