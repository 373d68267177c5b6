//! Core types for the persistence layer.
//!
//! - [`Course`] - A persisted course
//! - [`NewCourse`], [`CoursePatch`] - Create/replace and partial update payloads
//! - [`CourseFilter`], [`Ordering`] - List criteria
//!
//! # Example
//!
//! ```
//! use courses_persistence::types::{CourseFilter, OrderField, Ordering};
//!
//! let filter = CourseFilter::new()
//!     .with_name("Python")
//!     .order_by(Ordering::desc(OrderField::Id));
//!
//! assert_eq!(filter.name.as_deref(), Some("Python"));
//! assert_eq!(filter.ordering[0].to_string(), "-id");
//! ```

mod course;
mod filter;

pub use course::{Course, CoursePatch, MAX_NAME_LENGTH, NewCourse, validate_name};
pub use filter::{CourseFilter, OrderField, Ordering, SortDirection};
