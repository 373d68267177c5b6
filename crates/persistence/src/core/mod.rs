//! Core storage traits and abstractions.
//!
//! - [`CourseStorage`] - CRUD operations over courses
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use courses_persistence::core::CourseStorage;
//! use courses_persistence::error::StorageResult;
//! use courses_persistence::types::{Course, NewCourse};
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl CourseStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn create(&self, course: NewCourse) -> StorageResult<Course> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod storage;

pub use storage::CourseStorage;
