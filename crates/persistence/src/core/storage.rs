//! Core course storage trait.
//!
//! This module defines the [`CourseStorage`] trait, which provides the CRUD
//! operations the REST layer needs for courses.

use async_trait::async_trait;

use crate::error::{BackendError, StorageResult};
use crate::types::{Course, CourseFilter, CoursePatch, NewCourse};

/// Core storage trait for courses.
///
/// Implementations own id assignment: `create` returns the course with its
/// new id, and ids are never reused after a delete.
///
/// # Example
///
/// ```ignore
/// use courses_persistence::core::CourseStorage;
/// use courses_persistence::types::{CourseFilter, CoursePatch, NewCourse};
///
/// async fn example<S: CourseStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage.create(NewCourse::new("Python")).await?;
///
///     let read = storage.read(created.id).await?;
///     assert_eq!(read, Some(created.clone()));
///
///     let renamed = storage
///         .update(created.id, CoursePatch::new().with_name("Python 3"))
///         .await?;
///     assert_eq!(renamed.name, "Python 3");
///
///     let named = storage
///         .list(&CourseFilter::new().with_name("Python 3"))
///         .await?;
///     assert_eq!(named.len(), 1);
///
///     storage.delete(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the payload fails validation
    async fn create(&self, course: NewCourse) -> StorageResult<Course>;

    /// Reads a course by id, returning `None` if it does not exist.
    async fn read(&self, id: i64) -> StorageResult<Option<Course>>;

    /// Lists the courses matching `filter`, in the filter's order.
    async fn list(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>>;

    /// Applies a partial update. Fields absent from `patch` are unchanged.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    /// * `StorageError::Validation` - If a supplied field fails validation
    async fn update(&self, id: i64, patch: CoursePatch) -> StorageResult<Course>;

    /// Replaces every writable field of an existing course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    /// * `StorageError::Validation` - If the payload fails validation
    async fn replace(&self, id: i64, course: NewCourse) -> StorageResult<Course>;

    /// Permanently removes a course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Returns the number of stored courses.
    async fn count(&self) -> StorageResult<u64>;

    /// Checks that the backend can serve requests.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Checks whether a course exists.
    async fn exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }
}
