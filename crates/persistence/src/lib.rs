//! Courses Persistence Layer
//!
//! This crate provides the storage layer for the courses service: the
//! [`Course`](types::Course) record, the [`CourseStorage`](core::CourseStorage)
//! trait that the REST layer is written against, and a SQLite backend.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! courses-persistence = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Course record, write payloads, list filters
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use courses_persistence::types::{Course, CoursePatch, NewCourse};
//!
//! let payload = NewCourse::new("Python");
//! assert!(payload.validate().is_ok());
//!
//! let course = Course::new(1, "Python");
//! let renamed = CoursePatch::new().with_name("Go").apply_to(&course);
//! assert_eq!(renamed.id, 1);
//! assert_eq!(renamed.name, "Go");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use core::CourseStorage;
pub use error::{StorageError, StorageResult};
pub use types::{Course, CourseFilter, CoursePatch, NewCourse};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
